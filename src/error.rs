//! Error types for the head gesture detection library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A landmark coordinate was NaN or infinite
    #[error("Invalid landmark: {0}")]
    InvalidLandmark(String),

    /// The nod and shake windows fell out of lockstep
    #[error("Window mismatch: nod window holds {nod} samples, shake window holds {shake}")]
    WindowMismatch {
        /// Samples in the nod window
        nod: usize,
        /// Samples in the shake window
        shake: usize,
    },

    /// Landmark input line could not be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based input line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
