/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing a
/// conversion sentence. The Roman symbol scan has no failure mode and never
/// produces one of these.
pub mod parse_error;

pub use parse_error::{ParseError, ParseResult};
