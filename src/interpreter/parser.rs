use logos::Logos;
use tracing::debug;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::{
        conversion::ConversionExpression,
        lexer::{Spanned, Token},
        unit::Unit,
    },
};

/// Tokenizes a conversion sentence.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for the first character sequence
/// the lexer does not recognize, or for a token that follows the previous one
/// without whitespace in between, as in `10km`.
///
/// # Example
/// ```
/// use interpreta::interpreter::{lexer::Token, parser::tokenize};
///
/// let tokens = tokenize("10 km to miles").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|t| t.token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number(10.0),
///                 Token::Word("km".into()),
///                 Token::To,
///                 Token::Word("miles".into())]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut previous_end = None;

    while let Some(token) = lexer.next() {
        let slice = lexer.slice().to_string();
        let span = lexer.span();
        if previous_end == Some(span.start) {
            return Err(ParseError::UnexpectedToken { token:    slice,
                                                     position: span.start, });
        }
        match token {
            Ok(token) => tokens.push(Spanned { token,
                                               slice,
                                               position: span.start }),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token:    slice,
                                                         position: span.start, });
            },
        }
        previous_end = Some(span.end);
    }

    Ok(tokens)
}

/// Parses a sentence of the form `<number> <unit> to <unit>`.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found: an unknown
/// character, a missing or misplaced token, an unknown unit, or tokens left
/// over after the target unit.
///
/// # Example
/// ```
/// use interpreta::interpreter::{parser::parse_conversion, unit::Unit};
///
/// let expr = parse_conversion("10 km to miles").unwrap();
///
/// assert_eq!(expr.value, 10.0);
/// assert_eq!(expr.from, Unit::Kilometer);
/// assert_eq!(expr.to, Unit::Mile);
/// ```
pub fn parse_conversion(source: &str) -> ParseResult<ConversionExpression> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter();
    let end = source.len();

    let value = expect_number(iter.next(), end)?;
    let from = expect_unit(iter.next(), end)?;
    expect_keyword(iter.next(), end)?;
    let to = expect_unit(iter.next(), end)?;

    if let Some(extra) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    extra.slice.clone(),
                                                          position: extra.position, });
    }

    let expr = ConversionExpression::new(value, from, to);
    debug!(value, %from, %to, "parsed conversion");
    Ok(expr)
}

fn expect_number(token: Option<&Spanned>, end: usize) -> ParseResult<f64> {
    match token {
        Some(Spanned { token: Token::Number(value), .. }) => Ok(*value),
        Some(other) => Err(ParseError::UnexpectedToken { token:    other.slice.clone(),
                                                         position: other.position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: end }),
    }
}

fn expect_unit(token: Option<&Spanned>, end: usize) -> ParseResult<Unit> {
    match token {
        Some(Spanned { token: Token::Word(name), position, .. }) => {
            Unit::from_name(name).ok_or_else(|| ParseError::UnknownUnit { name:     name.clone(),
                                                                          position: *position, })
        },
        Some(other) => Err(ParseError::UnexpectedToken { token:    other.slice.clone(),
                                                         position: other.position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: end }),
    }
}

fn expect_keyword(token: Option<&Spanned>, end: usize) -> ParseResult<()> {
    match token {
        Some(Spanned { token: Token::To, .. }) => Ok(()),
        Some(other) => Err(ParseError::ExpectedKeyword { keyword:  "to",
                                                         found:    other.slice.clone(),
                                                         position: other.position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: end }),
    }
}
