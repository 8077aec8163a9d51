//! Parse error types
//!
//! A [`ParseError`] locates a decoding failure in the input bytes and says
//! what went wrong there.

use core::fmt;

/// Kind of decoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is not syntactically valid JSON
    Syntax,
    /// The input is valid JSON but not an array of the expected element type
    Data,
    /// The input ended before a complete JSON value was read
    Eof,
    /// The underlying reader failed
    Io,
}

impl ParseErrorKind {
    /// Returns the kind as a lowercase string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Data => "data",
            Self::Eof => "eof",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to decode a set from its serialized form
///
/// `line` and `column` are one-based; both are zero when the position is
/// unknown (for example an I/O failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// Line of the input at which decoding stopped
    pub line: usize,
    /// Column of the input at which decoding stopped
    pub column: usize,
}

impl ParseError {
    /// Creates a parse error at the given position
    pub const fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Returns true if the input was cut short rather than malformed
    ///
    /// Truncated input may decode once the rest of it arrives.
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Eof)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{} error", self.kind)
        } else {
            write!(
                f,
                "{} error at line {} column {}",
                self.kind, self.line, self.column
            )
        }
    }
}

impl core::error::Error for ParseError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match error.classify() {
            Category::Syntax => ParseErrorKind::Syntax,
            Category::Data => ParseErrorKind::Data,
            Category::Eof => ParseErrorKind::Eof,
            Category::Io => ParseErrorKind::Io,
        };
        Self::new(kind, error.line(), error.column())
    }
}
