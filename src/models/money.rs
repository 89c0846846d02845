//! Money type for representing currency amounts
//!
//! Amounts wrap a `rust_decimal::Decimal`, so any decimal text a person or
//! another tool writes into the store reads back as the same value and sums
//! stay exact in any order. Provides the decimal text form used by the
//! transaction store. Currency symbols are a display concern and live in
//! `display::money`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest magnitude accepted by `Money::parse`, in whole currency units
pub const MAX_UNITS: i64 = 1_000_000_000_000_000;

/// Longest digit run the parser will expand an exponent into
const MAX_DIGITS: usize = 40;

/// A currency-agnostic monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_ledger::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// The amount rounded half away from zero to whole cents, for display
    pub fn round_to_cents(&self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Self(rounded)
    }

    /// Parse a money amount from decimal text
    ///
    /// Accepts an optional sign, digits with any number of fractional digits,
    /// and an optional exponent: "10", "10.555", "-10.50", "+3", ".75",
    /// "1e3", "2.5E-1". Currency symbols, thousands separators and
    /// non-finite values are rejected, as is anything above `MAX_UNITS`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = s.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match s.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let exponent: i64 = exponent.parse().map_err(|_| out_of_range())?;
                (mantissa, exponent)
            }
            None => (s, 0),
        };

        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let canonical = shift_point(whole, frac, exponent).ok_or_else(out_of_range)?;
        let value = Decimal::from_str(&canonical).map_err(|_| out_of_range())?;
        if value.abs() > Decimal::from(MAX_UNITS) {
            return Err(out_of_range());
        }

        Ok(Self(if negative { -value } else { value }))
    }
}

/// Move the decimal point of `whole.frac` by `exponent` places, as text
fn shift_point(whole: &str, frac: &str, exponent: i64) -> Option<String> {
    let digits = format!("{}{}", whole, frac);
    let leading = digits.len() - digits.trim_start_matches('0').len();
    let digits = &digits[leading..];
    if digits.is_empty() {
        return Some("0".to_string());
    }

    let point = whole.len() as i64 - leading as i64 + exponent;
    let len = digits.len() as i64;
    if point > MAX_DIGITS as i64 {
        return None;
    }
    if point < -(MAX_DIGITS as i64) {
        return Some("0".to_string());
    }

    let text = if point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else if point >= len {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else {
        let (int, fraction) = digits.split_at(point as usize);
        format!("{}.{}", int, fraction)
    };
    Some(text)
}

/// Plain decimal text with at least two fractional digits: `10.50`,
/// `12.345`, `-0.05`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        if value.scale() < 2 {
            value.rescale(2);
        }
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        write!(f, "{}", value)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Parsed amounts are bounded by MAX_UNITS, far below the Decimal limit
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::OutOfRange(s) => write!(f, "'{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.value(), dec("10.50"));
        assert_eq!(Money::from_cents(1050), Money::parse("10.5").unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::parse("1000").unwrap().to_string(), "1000.00");
        assert_eq!(Money::parse("1000.0").unwrap().to_string(), "1000.00");
    }

    #[test]
    fn test_display_keeps_extra_precision() {
        assert_eq!(Money::parse("12.345").unwrap().to_string(), "12.345");
        assert_eq!(Money::parse("0.0015").unwrap().to_string(), "0.0015");

        let stored = Money::parse("12.345").unwrap().to_string();
        assert_eq!(Money::parse(&stored).unwrap(), Money::parse("12.345").unwrap());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(b - a, Money::from_cents(-500));
        assert_eq!(-a, Money::from_cents(-1000));
        assert_eq!(
            Money::parse("12.345").unwrap() + Money::parse("0.005").unwrap(),
            Money::parse("12.35").unwrap()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("+3").unwrap(), Money::from_cents(300));
        assert_eq!(Money::parse("10").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse("10.").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse(".75").unwrap(), Money::from_cents(75));
        assert_eq!(Money::parse(" 0.05 ").unwrap(), Money::from_cents(5));
        assert_eq!(Money::parse("007.5").unwrap(), Money::from_cents(750));
        assert_eq!(Money::parse("10.555").unwrap().value(), dec("10.555"));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e3").unwrap(), Money::from_cents(100000));
        assert_eq!(Money::parse("1E3").unwrap(), Money::from_cents(100000));
        assert_eq!(Money::parse("2.5e-1").unwrap(), Money::from_cents(25));
        assert_eq!(Money::parse("1.5e+2").unwrap(), Money::from_cents(15000));
        assert_eq!(Money::parse("125e-2").unwrap(), Money::from_cents(125));
        assert_eq!(Money::parse("0e5").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["abc", "", ".", "e3", "1e", "1e+", "$5", "1,000", "1_000", "inf", "NaN", "1.2.3", "--1"] {
            assert!(
                matches!(Money::parse(bad), Err(MoneyParseError::InvalidFormat(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(Money::parse("1e300"), Err(MoneyParseError::OutOfRange(_))));
        assert!(Money::parse("1000000000000000").is_ok());
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(Money::parse("10.555").unwrap().round_to_cents().to_string(), "10.56");
        assert_eq!(Money::parse("10.554").unwrap().round_to_cents().to_string(), "10.55");
        assert_eq!(Money::parse("-0.005").unwrap().round_to_cents().to_string(), "-0.01");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_sum_at_the_limit_does_not_overflow() {
        let max = Money::parse(&MAX_UNITS.to_string()).unwrap();
        let total: Money = vec![max, max, max].into_iter().sum();
        assert_eq!(total.value(), Decimal::from(MAX_UNITS) * Decimal::from(3));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
