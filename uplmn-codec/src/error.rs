//! Error types for the PLMN table codec

use thiserror::Error;

/// Errors raised while splitting and decoding PLMN table data.
///
/// Encoding never fails; every variant here belongs to the decode path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Payload length is not a positive multiple of the record size, or the
    /// payload holds non-hex characters
    #[error("Malformed PLMNS data: {0}")]
    Malformed(String),

    /// A single record is shorter than a packed PLMN entry
    #[error("Record too short: expected at least {expected} characters, got {actual}")]
    ShortRecord {
        /// Required record length
        expected: usize,
        /// Length of the supplied record
        actual: usize,
    },

    /// Access technology characters are not valid hex
    #[error("Invalid access technology bytes: {0}")]
    InvalidRat(String),
}

/// Result type for table decoding
pub type TableResult<T> = Result<T, TableError>;
