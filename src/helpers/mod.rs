//! Standalone helpers for agent sessions and docs
//!
//! Each helper is independent of the others:
//! - `NameGenerator` - Memorable `action-adjective-noun` session names
//! - `format_age` - "5 minutes ago" style timestamps
//! - `ChatDirective` - Turn transcripts into `.. chat::` blocks
//! - `tokenizer_for_model` - Which encoding to count tokens with

mod age;
mod chat_directive;
mod naming;
mod tokenizer;

pub use age::{format_age, format_age_at};
pub use chat_directive::{transform_transcript, ChatDirective, DIRECTIVE, INDENT};
pub use naming::{
    generate_identifier, is_generated_identifier, NameGenerator, Vocabulary, SEPARATOR,
};
pub use tokenizer::{tokenizer_for_model, Encoding, TokenizerChoice, FALLBACK_ENCODING};
