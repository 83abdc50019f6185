//! Exact decimal quantities.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Largest decimal scale (in either direction) accepted from text.
///
/// Summing values whose scales are far apart materializes an integer with
/// that many digits, so `1e4000000000` must never get into an inventory.
pub const MAX_SCALE: i64 = 1000;

/// Amount of a product in one batch.
///
/// Backed by an arbitrary-precision decimal so that `0.1 + 0.2` is exactly
/// `0.3`. No unit and no sign check: negative amounts are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(BigDecimal);

impl Quantity {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Exact zero, the total of an empty selection.
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_decimal(self) -> BigDecimal {
        self.0
    }
}

impl ValueObject for Quantity {}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = InventoryError;

    /// Accepts plain or exponent notation with a scale within
    /// `±MAX_SCALE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigDecimal::from_str(s).map_err(|_| InventoryError::quantity_format(s))?;
        let (_, scale) = value.as_bigint_and_exponent();
        if scale.unsigned_abs() > MAX_SCALE.unsigned_abs() {
            return Err(InventoryError::quantity_format(s));
        }
        Ok(Self(value))
    }
}

impl From<BigDecimal> for Quantity {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Quantity> for &'a Quantity {
    type Output = Quantity;

    fn add(self, rhs: &'a Quantity) -> Self::Output {
        Quantity(&self.0 + &rhs.0)
    }
}

impl<'a> AddAssign<&'a Quantity> for Quantity {
    fn add_assign(&mut self, rhs: &'a Quantity) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a Quantity> for Quantity {
    fn sum<I: Iterator<Item = &'a Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |mut acc, q| {
            acc += q;
            acc
        })
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), Add::add)
    }
}

/// Serialized as its decimal string so no precision is lost on the wire.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    #[test]
    fn fractional_sums_are_exact() {
        let total: Quantity = [q("0.1"), q("0.2")].iter().sum();
        assert_eq!(total, q("0.3"));
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        assert_eq!(q("4"), q("4.0"));
        assert_eq!(q("4"), Quantity::from(4));
    }

    #[test]
    fn empty_sum_is_exact_zero() {
        let total: Quantity = Vec::<Quantity>::new().into_iter().sum();
        assert_eq!(total, Quantity::zero());
        assert_eq!(total, q("0"));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        for bad in ["abc", "4kg", "NaN", "1,5"] {
            let err = bad.parse::<Quantity>().unwrap_err();
            match err {
                InventoryError::QuantityFormat { input } => assert_eq!(input, bad),
                _ => panic!("Expected QuantityFormat error for {bad:?}"),
            }
        }
    }

    #[test]
    fn exponent_notation_within_bounds_is_accepted() {
        assert_eq!(q("1e3"), Quantity::from(1000));
        assert_eq!(q("25e-1"), q("2.5"));
        assert!("1e1000".parse::<Quantity>().is_ok());
        assert!("1e-1000".parse::<Quantity>().is_ok());
    }

    #[test]
    fn out_of_range_scale_is_rejected() {
        for bad in ["1e4000000000", "1e9223372036854775807", "1e-1001", "1e1001"] {
            let err = bad.parse::<Quantity>().unwrap_err();
            assert_eq!(err, InventoryError::quantity_format(bad));
        }
    }

    #[test]
    fn serializes_as_exact_string() {
        let json = serde_json::to_string(&q("0.3")).unwrap();
        assert_eq!(json, "\"0.3\"");
    }
}
