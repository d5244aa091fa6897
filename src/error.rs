//! Error types for the countvec library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CountVecError`] enum. The only error the vectorizer core raises on its own
//! is [`CountVecError::NotFitted`]; the remaining variants come from the
//! surrounding plumbing (token patterns, model files, the CLI).
//!
//! # Examples
//!
//! ```
//! use countvec::error::{CountVecError, Result};
//! use countvec::vectorizer::CountVectorizer;
//!
//! fn vectorize(text: &str) -> Result<usize> {
//!     let vectorizer = CountVectorizer::new();
//!     Ok(vectorizer.transform(text)?.len())
//! }
//!
//! match vectorize("some text") {
//!     Err(e) if e.is_not_fitted() => println!("fit first: {e}"),
//!     Err(e) => eprintln!("Error: {e}"),
//!     Ok(n) => println!("{n} features"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for countvec operations.
#[derive(Error, Debug)]
pub enum CountVecError {
    /// `transform` was called before the vectorizer learned a vocabulary.
    #[error("Object is not fitted")]
    NotFitted,

    /// I/O errors (reading corpora, model files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid token patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CountVecError.
pub type Result<T> = std::result::Result<T, CountVecError>;

impl CountVecError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CountVecError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CountVecError::InvalidArgument(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        CountVecError::InvalidOperation(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CountVecError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CountVecError::Other(msg.into())
    }

    /// Whether this error signals a transform before fit.
    pub fn is_not_fitted(&self) -> bool {
        matches!(self, CountVecError::NotFitted)
    }
}
