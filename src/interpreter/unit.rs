use std::fmt;

/// Metres in one kilometre.
pub const METRES_PER_KILOMETRE: f64 = 1000.0;
/// Metres in one statute mile.
pub const METRES_PER_MILE: f64 = 1609.34;

/// A unit of length, converted through metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `km`
    Kilometer,
    /// `miles`
    Mile,
}

impl Unit {
    /// Resolves a unit from the name used in conversion sentences.
    ///
    /// Names are case-sensitive.
    ///
    /// # Example
    /// ```
    /// use interpreta::interpreter::unit::Unit;
    ///
    /// assert_eq!(Unit::from_name("km"), Some(Unit::Kilometer));
    /// assert_eq!(Unit::from_name("miles"), Some(Unit::Mile));
    /// assert_eq!(Unit::from_name("KM"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "km" => Some(Self::Kilometer),
            "miles" => Some(Self::Mile),
            _ => None,
        }
    }

    /// The name this unit is written as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Mile => "miles",
        }
    }

    const fn metres_per_unit(self) -> f64 {
        match self {
            Self::Kilometer => METRES_PER_KILOMETRE,
            Self::Mile => METRES_PER_MILE,
        }
    }

    /// Converts `value` in this unit to metres.
    #[must_use]
    pub fn to_base(self, value: f64) -> f64 {
        value * self.metres_per_unit()
    }

    /// Converts `value` in metres to this unit.
    #[must_use]
    pub fn from_base(self, value: f64) -> f64 {
        value / self.metres_per_unit()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
