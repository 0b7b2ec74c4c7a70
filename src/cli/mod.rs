//! Terminal helpers: confirmation prompts, code previews, the bell

mod console;

pub use console::{choice_hint, parse_confirmation, print_bell, Console, EMOJI_WARN};
