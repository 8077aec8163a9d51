//! Error handling module for uniqset
//!
//! Every set operation except the JSON codec is total. This module holds the
//! error types the codec reports.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::{ParseError, ParseErrorKind};
pub use types::{SetError, SetResult};
