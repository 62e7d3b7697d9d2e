use tracing::{debug, trace};

/// An immutable `(token, value)` pair used to score an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The literal the input must equal.
    pub token: &'static str,
    /// The value produced on a match.
    pub value: u32,
}

/// The Roman symbols understood by [`scan`], in declaration order.
pub const ROMAN_RULES: [Rule; 3] = [Rule::new("I", 1), Rule::new("IV", 4), Rule::new("V", 5)];

impl Rule {
    /// Creates a rule matching `token` exactly and yielding `value`.
    #[must_use]
    pub const fn new(token: &'static str, value: u32) -> Self {
        Self { token, value }
    }

    /// Returns the rule's value if `input` equals its token, otherwise `0`.
    ///
    /// The comparison is exact: case-sensitive and without trimming.
    ///
    /// # Example
    /// ```
    /// use interpreta::interpreter::rule::Rule;
    ///
    /// let four = Rule::new("IV", 4);
    ///
    /// assert_eq!(four.interpret("IV"), 4);
    /// assert_eq!(four.interpret("iv"), 0);
    /// assert_eq!(four.interpret(" IV"), 0);
    /// ```
    #[must_use]
    pub fn interpret(&self, input: &str) -> u32 {
        if input == self.token { self.value } else { 0 }
    }
}

/// Evaluates `input` against `rules` in order and returns the first nonzero
/// result, or `0` when no rule matches.
///
/// A missing match is not an error; zero is the defined result for it.
///
/// # Parameters
/// - `input`: The string to score.
/// - `rules`: Rules in priority order. The first match wins.
///
/// # Example
/// ```
/// use interpreta::interpreter::rule::{ROMAN_RULES, scan};
///
/// assert_eq!(scan("IV", &ROMAN_RULES), 4);
/// assert_eq!(scan("X", &ROMAN_RULES), 0);
/// ```
#[must_use]
pub fn scan(input: &str, rules: &[Rule]) -> u32 {
    let result = rules.iter()
                      .map(|rule| {
                          let value = rule.interpret(input);
                          trace!(token = rule.token, value, "evaluated rule");
                          value
                      })
                      .find(|&value| value != 0)
                      .unwrap_or(0);

    debug!(input, result, "scan finished");
    result
}

/// Returns every rule in `rules` that matches `input`.
///
/// The scan only ever uses the first of these. The full list is useful for
/// checking that a rule set is mutually exclusive.
///
/// # Example
/// ```
/// use interpreta::interpreter::rule::{ROMAN_RULES, matching_rules};
///
/// assert_eq!(matching_rules("V", &ROMAN_RULES).len(), 1);
/// assert!(matching_rules("VI", &ROMAN_RULES).is_empty());
/// ```
#[must_use]
pub fn matching_rules<'a>(input: &str, rules: &'a [Rule]) -> Vec<&'a Rule> {
    rules.iter().filter(|rule| rule.interpret(input) != 0).collect()
}
