//! Error types for code extraction.

use thiserror::Error;

/// Errors that can occur when extracting codes from a dataframe column.
#[derive(Debug, Error)]
pub enum CodesError {
    /// The named column does not exist in the dataframe.
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// A cell in the column holds a non-string value.
    #[error("column {name} is not a string column (found {dtype})")]
    NotStringColumn { name: String, dtype: String },
}

pub type Result<T> = std::result::Result<T, CodesError>;
