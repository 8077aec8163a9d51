//! Core error types for uniqset
//!
//! This module defines the main error type used throughout the library.

use core::fmt;

use crate::error::ParseError;

/// Main error type for set operations
///
/// Only the serialization codec can fail; membership and mutation
/// operations never return an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// Input bytes are not a well-formed array of the element type
    Parse(ParseError),
    /// An element could not be encoded
    Encode,
}

impl SetError {
    /// Returns true if this is a recoverable error
    ///
    /// Truncated input is recoverable; malformed input and encoder failures
    /// will fail the same way on every attempt.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(error) => error.is_eof(),
            Self::Encode => false,
        }
    }

    /// Returns true if this error was raised while decoding
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns the parse error, if this is one
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Encode => None,
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse",
            Self::Encode => "Encode",
        }
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "failed to decode set: {error}"),
            Self::Encode => f.write_str("failed to encode set"),
        }
    }
}

impl core::error::Error for SetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Encode => None,
        }
    }
}

impl From<ParseError> for SetError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

/// Result type for set codec operations
pub type SetResult<T> = Result<T, SetError>;
