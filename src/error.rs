//! Error types for document rendering.
//!
//! The engine itself can only fail in one way: the destination refuses bytes.
//! That failure is recorded once as a sticky error (see [`crate::TextWriter`])
//! and every later emission call turns into a no-op. The remaining variants
//! belong to producers, which reject value trees before any byte is written.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::{to_string, Error, Value};
//!
//! // A document root has to be an object.
//! let result = to_string(&Value::from(42));
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The destination could not accept bytes (closed pipe, full disk, permissions).
    #[error("IO error: {0}")]
    Io(String),

    /// A value tree that cannot be described as a document.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for a failed sink write.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramdoc::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert_eq!(err.to_string(), "IO error: broken pipe");
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an unsupported type error for trees that cannot become documents.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if the destination failed to accept bytes.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
