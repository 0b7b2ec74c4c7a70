//! Tokenizer selection by model name
//!
//! Picks which BPE encoding to count tokens with for a given model. The
//! encoding itself lives in the tokenizer library; this only decides which
//! one to ask for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// BPE encodings the agent knows how to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// GPT-4 and GPT-3.5 models
    Cl100kBase,
    /// GPT-4o models
    O200kBase,
}

impl Encoding {
    /// Canonical encoding name, e.g. `cl100k_base`
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The encoding chosen for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerChoice {
    pub encoding: Encoding,
    /// False when the model is unknown and counts are only estimates
    pub exact: bool,
}

/// Encoding used when the model is not recognized
pub const FALLBACK_ENCODING: Encoding = Encoding::Cl100kBase;

/// Choose the tokenizer encoding for `model`
///
/// Unknown models fall back to [`FALLBACK_ENCODING`] with `exact: false`.
pub fn tokenizer_for_model(model: &str) -> TokenizerChoice {
    if model.contains("gpt-4o") {
        TokenizerChoice {
            encoding: Encoding::O200kBase,
            exact: true,
        }
    } else if model.contains("gpt-4") || model.contains("gpt-3.5") {
        TokenizerChoice {
            encoding: Encoding::Cl100kBase,
            exact: true,
        }
    } else {
        tracing::warn!(
            "No encoder implemented for model {}. Defaulting to {} encoder. Use results only as estimates.",
            model,
            FALLBACK_ENCODING
        );
        TokenizerChoice {
            encoding: FALLBACK_ENCODING,
            exact: false,
        }
    }
}
