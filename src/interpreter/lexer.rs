use logos::Logos;

/// A lexical token of a conversion sentence.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f]+")]
pub enum Token {
    /// Numeric literals such as `10`, `2.5` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `to`
    #[token("to")]
    To,
    /// Unit names and any other word, such as `km` or `miles`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
}

/// A token together with the source slice it was read from and its byte
/// offset.
#[derive(Debug, PartialEq, Clone)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// The source text of the token.
    pub slice:    String,
    /// Byte offset of the token in the source.
    pub position: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number or overflows to infinity.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}
