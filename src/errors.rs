//! Error taxonomy for the wrapper-generation pipeline
//!
//! Failures are always local to a single declaration: callers skip the
//! offending fragment and keep going, they never abort a whole emission run.

use thiserror::Error;

/// Errors produced while parsing or generating wrappers.
#[derive(Debug, Error)]
pub enum WrapgenError {
    /// The fragment has no matching parenthesis pair, or a parameter list
    /// entry cannot yield a non-empty name.
    #[error("malformed declaration: {text}")]
    MalformedDeclaration { text: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WrapgenError {
    /// Build a `MalformedDeclaration` carrying the offending raw text.
    pub fn malformed(text: impl Into<String>) -> Self {
        Self::MalformedDeclaration { text: text.into() }
    }
}
