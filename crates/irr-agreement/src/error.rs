//! Error types for the agreement statistics.

use thiserror::Error;

/// Errors reported by the agreement statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgreementError {
    /// The two rating sequences differ in length.
    #[error("rating length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Both rating sequences are empty, so agreement is undefined.
    #[error("cannot compute agreement over empty ratings")]
    EmptyRatings,

    /// Bennett's S requires at least two possible labels.
    #[error("label set must contain at least two labels, got {count}")]
    DegenerateLabelSet { count: usize },
}

pub type Result<T> = std::result::Result<T, AgreementError>;
