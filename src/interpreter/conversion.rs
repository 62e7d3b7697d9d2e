use crate::interpreter::unit::Unit;

/// A magnitude together with the unit it is written in and the unit it should
/// be expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionExpression {
    /// The magnitude in `from` units.
    pub value: f64,
    /// The unit `value` is written in.
    pub from:  Unit,
    /// The unit to convert into.
    pub to:    Unit,
}

impl ConversionExpression {
    /// Creates a conversion of `value` from `from` into `to`.
    #[must_use]
    pub const fn new(value: f64, from: Unit, to: Unit) -> Self {
        Self { value, from, to }
    }

    /// Converts the magnitude into the target unit by way of metres.
    ///
    /// # Example
    /// ```
    /// use interpreta::interpreter::{conversion::ConversionExpression, unit::Unit};
    ///
    /// let expr = ConversionExpression::new(10.0, Unit::Kilometer, Unit::Mile);
    ///
    /// assert_eq!(format!("{:.4}", expr.interpret()), "6.2137");
    /// ```
    #[must_use]
    pub fn interpret(&self) -> f64 {
        let base = self.from.to_base(self.value);
        self.to.from_base(base)
    }
}
