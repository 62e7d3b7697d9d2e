//! # interpreta
//!
//! interpreta is a pair of small interpreters built around the Interpreter
//! design pattern.
//! The first scores a string against three Roman numeral symbols. The second
//! evaluates unit conversion sentences such as `10 km to miles`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseResult,
    interpreter::{
        parser::parse_conversion,
        rule::{ROMAN_RULES, scan},
    },
};

/// Provides the error type for reading conversion sentences.
///
/// The Roman symbol scan cannot fail; only the conversion parser reports
/// errors, each carrying the byte offset where it was detected.
pub mod error;
/// Holds both interpreters.
///
/// # Responsibilities
/// - Defines the Roman symbol rules and the ordered scan over them.
/// - Tokenizes and parses conversion sentences.
/// - Evaluates conversions through a common base unit.
pub mod interpreter;
/// Installs the `tracing` subscriber used by the command line binary.
pub mod logger;

/// Input evaluated by the Roman interpreter when none is given.
pub const DEFAULT_ROMAN_INPUT: &str = "IV";
/// Sentence evaluated by the conversion interpreter when none is given.
pub const DEFAULT_CONVERSION_INPUT: &str = "10 km to miles";

/// Scores `input` against the Roman symbols `I`, `IV` and `V`.
///
/// Returns the value of the first symbol equal to `input`, or `0` when there is
/// none.
///
/// # Examples
/// ```
/// use interpreta::roman_result;
///
/// assert_eq!(roman_result("IV"), 4);
/// assert_eq!(roman_result("iv"), 0);
/// ```
#[must_use]
pub fn roman_result(input: &str) -> u32 {
    scan(input, &ROMAN_RULES)
}

/// Parses and evaluates a conversion sentence.
///
/// # Errors
/// Returns an error if the sentence is not of the form
/// `<number> <unit> to <unit>` or names an unknown unit.
///
/// # Examples
/// ```
/// use interpreta::conversion_result;
///
/// let miles = conversion_result("10 km to miles").unwrap();
/// assert_eq!(format!("{miles:.4}"), "6.2137");
///
/// assert!(conversion_result("10 km to parsecs").is_err());
/// ```
pub fn conversion_result(source: &str) -> ParseResult<f64> {
    parse_conversion(source).map(|expr| expr.interpret())
}

/// Formats a Roman result as the line printed by the binary.
///
/// # Examples
/// ```
/// use interpreta::render_roman;
///
/// assert_eq!(render_roman(4), "Resultado: 4");
/// ```
#[must_use]
pub fn render_roman(result: u32) -> String {
    format!("Resultado: {result}")
}

/// Formats a conversion result as the line printed by the binary, rounded to
/// four decimal places.
///
/// # Examples
/// ```
/// use interpreta::render_conversion;
///
/// assert_eq!(render_conversion(1.609_34), "Resultado: 1.6093");
/// ```
#[must_use]
pub fn render_conversion(result: f64) -> String {
    format!("Resultado: {result:.4}")
}
