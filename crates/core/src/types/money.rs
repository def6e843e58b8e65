//! Euro amounts on decimal arithmetic.
//!
//! The platform sells in a single currency (EUR), so `Money` is a thin
//! wrapper over [`rust_decimal::Decimal`] rather than an amount/currency
//! pair. Arithmetic is exact; float rounding never touches a price.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A euro amount.
///
/// Displays in the amount's natural scale (`4.5`, `12.00`); use
/// [`Money::display_fixed`] for the two-decimal form totals are shown in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format with exactly two decimal places, without the currency sign.
    #[must_use]
    pub fn display_fixed(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Money {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Money {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Money {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn eur(s: &str) -> Money {
        Money::new(s.parse().unwrap())
    }

    #[test]
    fn test_display_natural_scale() {
        assert_eq!(eur("4.5").to_string(), "4.5");
        assert_eq!(eur("12.00").to_string(), "12.00");
    }

    #[test]
    fn test_display_fixed_two_decimals() {
        assert_eq!(eur("4.5").display_fixed(), "4.50");
        assert_eq!(eur("14.8").display_fixed(), "14.80");
        assert_eq!(eur("3").display_fixed(), "3.00");
    }

    #[test]
    fn test_mul_by_quantity() {
        assert_eq!(eur("3.2") * 3, eur("9.6"));
        assert_eq!(eur("4.5") * 0, Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [eur("3.2"), eur("11.6")].into_iter().sum();
        assert_eq!(total, eur("14.8"));
        assert_eq!(total.display_fixed(), "14.80");
    }
}
