//! Setup Errors
//!
//! The flow distinguishes two error classes: validation errors are
//! recoverable (the prompt is re-issued), everything else is fatal and
//! propagates as `anyhow::Error`.

use thiserror::Error;

/// Number of attempts a prompt gets before the flow aborts.
pub const MAX_PROMPT_RETRIES: usize = 5;

#[derive(Debug, Error)]
pub enum SetupError {
    /// Recoverable: the entered value was rejected. The prompt loop warns
    /// and asks again.
    #[error("{0}")]
    Validation(String),

    /// Fatal: the retry budget for a prompt is exhausted.
    #[error("too many attempts ({0}), aborting setup")]
    RetriesExhausted(usize),
}

impl SetupError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SetupError::Validation(msg.into())
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, SetupError::Validation(_))
    }
}
