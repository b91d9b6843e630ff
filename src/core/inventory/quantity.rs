// Stock quantities.
//
// A quantity is either a whole number or a floating point amount (think
// "3 crates" vs "2.5 kg"). Integer arithmetic stays integer so a snapshot
// written after integer-only updates still reads back as integers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Amount of an item on hand.
///
/// Equality and ordering are numeric: `Int(2) == Float(2.0)`. Use
/// [`Quantity::is_integer`] when the representation itself matters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity::Int(0);

    #[allow(dead_code)]
    pub fn is_integer(&self) -> bool {
        matches!(self, Quantity::Int(_))
    }

    /// NaN and the infinities cannot be stored or compared meaningfully.
    pub fn is_finite(&self) -> bool {
        match self {
            Quantity::Int(_) => true,
            Quantity::Float(f) => f.is_finite(),
        }
    }

    /// Strictly greater than zero. Only positive quantities are ever stored.
    pub fn is_positive(&self) -> bool {
        match self {
            Quantity::Int(n) => *n > 0,
            Quantity::Float(f) => *f > 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Quantity::Int(n) => *n as f64,
            Quantity::Float(f) => *f,
        }
    }

    /// Returns `None` on integer overflow or a non-finite float result.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        match (self, other) {
            (Quantity::Int(a), Quantity::Int(b)) => a.checked_add(b).map(Quantity::Int),
            (a, b) => finite(a.as_f64() + b.as_f64()),
        }
    }

    /// Returns `None` on integer overflow or a non-finite float result.
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        match (self, other) {
            (Quantity::Int(a), Quantity::Int(b)) => a.checked_sub(b).map(Quantity::Int),
            (a, b) => finite(a.as_f64() - b.as_f64()),
        }
    }
}

fn finite(value: f64) -> Option<Quantity> {
    value.is_finite().then_some(Quantity::Float(value))
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ZERO
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Quantity::Int(n)
    }
}

impl From<i32> for Quantity {
    fn from(n: i32) -> Self {
        Quantity::Int(n.into())
    }
}

impl From<u32> for Quantity {
    fn from(n: u32) -> Self {
        Quantity::Int(n.into())
    }
}

impl From<f64> for Quantity {
    fn from(f: f64) -> Self {
        Quantity::Float(f)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Quantity::Int(a), Quantity::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(n) => write!(f, "{n}"),
            // Keep the trailing ".0" so floats stay recognisable in reports.
            Quantity::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Quantity::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a number")]
pub struct ParseQuantityError(String);

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Quantity::Int(n));
        }
        s.parse::<f64>()
            .map(Quantity::Float)
            .map_err(|_| ParseQuantityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        let sum = Quantity::Int(7).checked_add(Quantity::Int(3)).unwrap();
        assert!(sum.is_integer());
        assert_eq!(sum, Quantity::Int(10));

        let diff = Quantity::Int(2).checked_sub(Quantity::Int(5)).unwrap();
        assert_eq!(diff, Quantity::Int(-3));
        assert!(!diff.is_positive());
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        let sum = Quantity::Int(1).checked_add(Quantity::Float(0.5)).unwrap();
        assert!(!sum.is_integer());
        assert_eq!(sum, Quantity::Float(1.5));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(Quantity::Int(i64::MAX).checked_add(Quantity::Int(1)).is_none());
        assert!(Quantity::Int(i64::MIN).checked_sub(Quantity::Int(1)).is_none());
        assert!(Quantity::Float(f64::MAX)
            .checked_add(Quantity::Float(f64::MAX))
            .is_none());
    }

    #[test]
    fn test_numeric_comparison_across_kinds() {
        assert_eq!(Quantity::Int(2), Quantity::Float(2.0));
        assert!(Quantity::Float(4.5) < Quantity::Int(5));
        assert!(Quantity::Int(5) >= Quantity::Int(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::Int(7).to_string(), "7");
        assert_eq!(Quantity::Float(3.0).to_string(), "3.0");
        assert_eq!(Quantity::Float(2.25).to_string(), "2.25");
    }

    #[test]
    fn test_parse() {
        assert!("5".parse::<Quantity>().unwrap().is_integer());
        assert_eq!(" 2.5 ".parse::<Quantity>().unwrap(), Quantity::Float(2.5));
        assert!("ten".parse::<Quantity>().is_err());
    }
}
