use thiserror::Error;

/// Result type used by the conversion lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur while reading a conversion sentence.
///
/// Every variant carries the byte offset in the source where the problem was
/// detected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Found a character sequence the lexer does not recognize, or a token in a
    /// place where it does not belong.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending source slice.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The sentence ended before a complete conversion was read.
    #[error("Error at position {position}: Unexpected end of input. Example: 10 km to miles")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of the input.
        position: usize,
    },
    /// A keyword was expected but something else was found.
    #[error("Error at position {position}: Expected '{keyword}' but found '{found}'.")]
    ExpectedKeyword {
        /// The keyword that was expected.
        keyword:  &'static str,
        /// The source slice found instead.
        found:    String,
        /// Byte offset of the found token.
        position: usize,
    },
    /// A unit name is not one of the known units.
    #[error("Error at position {position}: Unknown unit '{name}'. Known units: km, miles.")]
    UnknownUnit {
        /// The unit name as written.
        name:     String,
        /// Byte offset of the unit name.
        position: usize,
    },
    /// Extra tokens remained after the target unit.
    #[error("Error at position {position}: Extra tokens after conversion: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source at which the error was detected.
    ///
    /// # Example
    /// ```
    /// use interpreta::error::ParseError;
    ///
    /// let err = ParseError::UnexpectedEndOfInput { position: 5 };
    /// assert_eq!(err.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedKeyword { position, .. }
            | Self::UnknownUnit { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}
