use crate::CURRENCY_PRECISION;
use log::warn;
use rust_decimal::Decimal;
use std::{
    convert::TryFrom,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};
use thiserror::Error;

// Anything closer than 10^-FLOAT_TOLERANCE_SCALE to a whole cent is float noise from the
// conversion, not a genuine third decimal place.
const FLOAT_TOLERANCE_SCALE: u32 = 9;

// The largest single amount accepted, 10^15. Decimal tops out near 7.9 * 10^28, so
// billions of amounts at this cap still sum without overflowing.
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// A non-negative amount of money, currency agnostic.
///
/// Amounts are fixed point so that summing a month of expenses never drifts the way
/// float sums do. The currency symbol is a display concern and is not stored here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("amounts cannot be negative")]
    Negative,
    #[error("amounts must be finite numbers")]
    NonFinite,
    #[error("amounts cannot have more than 2 decimal places")]
    CurrencyPrecision,
    #[error("the amount is too large to represent")]
    OutOfRange,
    #[error("'{0}' is not a valid amount")]
    Unparseable(String),
}

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            warn!("rejecting negative amount {}", value);
            return Err(AmountError::Negative);
        }

        if value > Decimal::from(MAX_AMOUNT) {
            warn!("rejecting amount {} above the maximum", value);
            return Err(AmountError::OutOfRange);
        }

        // Trailing zeros don't count against precision, i.e. 1.500 is fine
        let value = value.normalize();
        if value.scale() > CURRENCY_PRECISION {
            warn!("rejecting amount {} with excess precision", value);
            return Err(AmountError::CurrencyPrecision);
        }

        Ok(Amount(value))
    }

    /// The largest amount `new` accepts.
    pub fn max_value() -> Amount {
        Amount(Decimal::from(MAX_AMOUNT))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite);
        }

        let exact = Decimal::try_from(value).map_err(|_| AmountError::OutOfRange)?;
        let rounded = exact.round_dp(CURRENCY_PRECISION);
        if (exact - rounded).abs() > Decimal::new(1, FLOAT_TOLERANCE_SCALE) {
            return Err(AmountError::CurrencyPrecision);
        }

        Amount::new(rounded)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

/// Parses the raw text of an amount field, e.g. `" 12.50 "`.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value =
            Decimal::from_str(trimmed).map_err(|_| AmountError::Unparseable(trimmed.into()))?;
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    // Both sides are non-negative with at most 2dp, so the sum is too. Saturates at
    // Decimal::MAX rather than panicking.
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
