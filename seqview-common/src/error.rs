use std::fmt;
use thiserror::Error;

/// Where a bounded traversal ran out of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndOfInput {
    /// A throwing bounded view reached the end before its designated size.
    BeforeSize,
    /// A line view that requires a terminator reached the end before one.
    BeforeEndOfLine,
}

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndOfInput::BeforeSize => f.write_str("reached end of input before designated size"),
            EndOfInput::BeforeEndOfLine => f.write_str("reached end of input before end-of-line"),
        }
    }
}

/// Errors raised while constructing or traversing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A throwing bounded view was requested past a known sequence length.
    #[error("requested {requested} elements from a sequence of length {available}")]
    Length { requested: usize, available: usize },

    #[error("unexpected end of input: {0}")]
    UnexpectedEndOfInput(EndOfInput),

    #[error("materialized bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ViewError {
    /// Returns true for construction-time length errors.
    pub fn is_length(&self) -> bool {
        matches!(self, ViewError::Length { .. })
    }

    /// Returns true for traversal-time end-of-input errors.
    pub fn is_unexpected_end(&self) -> bool {
        matches!(self, ViewError::UnexpectedEndOfInput(_))
    }
}

pub type Result<T, E = ViewError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_message() {
        let err = ViewError::Length {
            requested: 5,
            available: 3,
        };
        assert!(err.is_length());
        assert!(!err.is_unexpected_end());
        assert_eq!(
            err.to_string(),
            "requested 5 elements from a sequence of length 3"
        );
    }

    #[test]
    fn test_end_of_input_message() {
        let err = ViewError::UnexpectedEndOfInput(EndOfInput::BeforeEndOfLine);
        assert!(err.is_unexpected_end());
        assert_eq!(
            err.to_string(),
            "unexpected end of input: reached end of input before end-of-line"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: ViewError = io.into();
        assert!(matches!(err, ViewError::Io(_)));
        assert_eq!(err.to_string(), "truncated");
    }
}
