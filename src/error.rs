//! Error types for CTON encoding and decoding.
//!
//! Decoding compact text never fails structurally — the parser truncates
//! unfinished containers at end of input instead of raising (see
//! [`crate::decode`]). The failure surface is therefore concentrated on the
//! encoding side:
//!
//! - **Invalid input**: `encode` called with a non-container top-level value
//! - **Circular reference**: a container reachable from itself along the
//!   current encoding path
//! - **Max depth exceeded**: nesting deeper than the configured limit
//!
//! Typed deserialization via [`crate::from_str`] can additionally fail with
//! serde type mismatches, surfaced as [`Error::Message`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_cton::{encode, Value, Error};
//!
//! // Top-level scalars are rejected.
//! let result = encode(&Value::from(42));
//! assert!(matches!(result, Err(Error::InvalidTopLevel(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during CTON encoding/decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// `encode` was called with a non-container top-level value
    #[error("invalid top-level value: expected object or array, found {0}")]
    InvalidTopLevel(String),

    /// A container was reached again along the current encoding path
    #[error("circular reference detected while encoding")]
    CircularReference,

    /// Recursion depth during encoding exceeded the configured limit
    #[error("maximum encoding depth of {max_depth} exceeded")]
    MaxDepthExceeded {
        /// The limit that was in effect (see [`crate::CtonOptions::with_max_depth`]).
        max_depth: usize,
    },

    /// Unsupported type for serialization
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid top-level error naming the rejected value's kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cton::Error;
    ///
    /// let err = Error::invalid_top_level("string");
    /// assert!(err.to_string().contains("expected object or array"));
    /// ```
    pub fn invalid_top_level(found: &str) -> Self {
        Error::InvalidTopLevel(found.to_string())
    }

    /// Creates a max-depth error carrying the limit that was exceeded.
    pub fn max_depth_exceeded(max_depth: usize) -> Self {
        Error::MaxDepthExceeded { max_depth }
    }

    /// Creates an unsupported type error for types that cannot be represented as CTON.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cton::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for read/write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
