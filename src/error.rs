use thiserror::Error;

use crate::StericKind;

/// Errors reported by the relate engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelateError {
    /// A DE-9IM pattern was not exactly nine characters over the
    /// accepted alphabet.
    #[error("invalid DE-9IM pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A strategy was handed an operand kind it has no rule for.
    #[error("no relate strategy for {subject:?} against {other:?}")]
    UnsupportedKindPair {
        subject: StericKind,
        other: StericKind,
    },
}

impl RelateError {
    pub(crate) fn invalid_pattern<R: Into<String>>(pattern: &str, reason: R) -> Self {
        RelateError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelateError>;
