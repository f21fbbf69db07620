//! Error taxonomy and warning values.

use thiserror::Error;

/// Errors that can occur when reading or writing ascii PLY documents.
#[derive(Debug, Error)]
pub enum PlyError {
    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The input handed to a read entry point was not text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A header declaration could not be interpreted.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
    /// A body line carried a value that could not be interpreted.
    #[error("Malformed body: {0}")]
    MalformedBody(String),
    /// The body ended before the schema's declared counts were satisfied.
    #[error("Truncated record: {0}")]
    TruncatedRecord(String),
    /// Schema and model disagree; the document cannot be written as-is.
    #[error("Inconsistent document: {0}")]
    Inconsistent(String),
}

/// A specialized `Result` type for PLY operations.
pub type PlyResult<T> = Result<T, PlyError>;

/// Non-fatal diagnostics collected while parsing a header.
///
/// Warnings never abort a read. They are returned as values so the parser
/// stays a pure function of its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// The `format` line declared something other than `ascii 1.0`.
    ///
    /// Only ascii 1.0 payloads are supported; the header is still parsed.
    #[error("format line '{line}' does not declare 'ascii 1.0'")]
    FormatMismatch {
        /// The offending format line, surrounding whitespace trimmed.
        line: String,
    },
}
