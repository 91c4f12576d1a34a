//! Error types for collection operations.

use thiserror::Error;

/// All possible errors from collection operations.
///
/// Every variant carries a human-readable message. Missing record fields are
/// never an error; field-addressed operations treat an absent field as null.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A where clause was requested without any usable argument.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// An operator symbol outside the fixed operator table.
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    /// A slice request that cannot be satisfied.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, Error>;
