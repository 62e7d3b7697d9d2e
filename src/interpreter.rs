/// Evaluates a conversion expression.
///
/// A conversion takes a magnitude from one unit to another by passing through
/// the base unit (metres).
pub mod conversion;
/// The lexer module tokenizes conversion sentences such as `10 km to miles`.
pub mod lexer;
/// The parser module turns the token stream into a
/// [`conversion::ConversionExpression`].
///
/// # Responsibilities
/// - Enforces the `<number> <unit> to <unit>` shape.
/// - Resolves unit names, reporting unknown ones with their position.
/// - Rejects anything left over after the target unit.
pub mod parser;
/// Symbol rules and the ordered scan that selects the first matching rule.
///
/// This is the Roman numeral half of the crate: three fixed `(token, value)`
/// pairs and a short-circuiting search over them.
pub mod rule;
/// Units of length known to the conversion interpreter.
pub mod unit;
