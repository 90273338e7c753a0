//! Euro prices using decimal arithmetic.

use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::language::Language;

/// A price in euros.
///
/// The store only sells in EUR, so the currency is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// ISO 4217 code of the store currency.
    pub const CURRENCY_CODE: &'static str = "EUR";

    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from euro cents (`1290` is €12.90).
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    /// The amount in euros.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount with exactly two decimals and a `.` separator, as used in
    /// payment gateway query strings.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }

    /// Format for display in the given language.
    ///
    /// English uses `€1,234.50`; Italian uses `€1.234,50`.
    #[must_use]
    pub fn display(&self, language: Language) -> String {
        let (group, decimal) = match language {
            Language::En => (',', '.'),
            Language::It => ('.', ','),
        };

        let plain = self.to_plain_string();
        let (sign, unsigned) = plain
            .strip_prefix('-')
            .map_or(("", plain.as_str()), |rest| ("-", rest));
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(group);
            }
            grouped.push(ch);
        }

        format!("{sign}€{grouped}{decimal}{frac_part}")
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Percentage saved against an original price, rounded to the nearest unit.
///
/// Returns `None` unless `original` is higher than `price`.
#[must_use]
pub fn discount_percent(original: Price, price: Price) -> Option<u32> {
    if original.0 <= price.0 || original.0.is_zero() {
        return None;
    }
    let saved = (original.0 - price.0) / original.0 * Decimal::ONE_HUNDRED;
    saved.round().to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1290).amount(), Decimal::new(1290, 2));
    }

    #[test]
    fn test_display_english() {
        assert_eq!(Price::from_cents(1290).display(Language::En), "€12.90");
        assert_eq!(Price::from_cents(123_450).display(Language::En), "€1,234.50");
        assert_eq!(Price::ZERO.display(Language::En), "€0.00");
    }

    #[test]
    fn test_display_italian() {
        assert_eq!(Price::from_cents(1290).display(Language::It), "€12,90");
        assert_eq!(
            Price::from_cents(100_000_000).display(Language::It),
            "€1.000.000,00"
        );
    }

    #[test]
    fn test_display_pads_decimals() {
        let price = Price::new(Decimal::new(15, 0));
        assert_eq!(price.display(Language::En), "€15.00");
        assert_eq!(price.to_plain_string(), "15.00");
    }

    #[test]
    fn test_arithmetic() {
        let total: Price = [Price::from_cents(1000) * 2, Price::from_cents(550)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(2550));
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(
            discount_percent(Price::from_cents(2000), Price::from_cents(1500)),
            Some(25)
        );
        assert_eq!(
            discount_percent(Price::from_cents(1500), Price::from_cents(1500)),
            None
        );
        assert_eq!(
            discount_percent(Price::from_cents(1000), Price::from_cents(1500)),
            None
        );
    }
}
