use std::fmt;
use std::iter::Sum;

use crate::model::ModelError;

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
///
/// `Display` prints all 4 decimals unless a precision is requested
/// (`{:.2}`), in which case the value is rounded half away from zero.
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(i64);

impl Amount {
    const DECIMALS: usize = 4;
    const SCALE: i64 = 10_000;

    pub const ZERO: Amount = Amount(0);

    /// Largest amount a price or line total may hold: one trillion units.
    pub const MAX: Amount = Amount(1_000_000_000_000 * Self::SCALE);

    /// Out of range and non-finite values saturate; use
    /// [`try_from_float`](Self::try_from_float) for untrusted input.
    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    /// `None` if `value` is not finite or its magnitude exceeds [`Amount::MAX`].
    pub fn try_from_float(value: f64) -> Option<Self> {
        let scaled = (value * Self::SCALE as f64).round();
        if !scaled.is_finite() || scaled.abs() > Self::MAX.0 as f64 {
            return None;
        }
        Some(Amount(scaled as i64))
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(quantity)).map(Amount)
    }

    /// `percent` of this amount, rounded to the nearest scaled unit.
    pub fn percent(self, percent: Percent) -> Self {
        Amount((self.0 as f64 * percent.value() / 100.0).round() as i64)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(Self::DECIMALS);
        let kept = precision.min(Self::DECIMALS);
        // i128 so rounding near i64::MIN/MAX cannot overflow
        let divisor = 10_i128.pow((Self::DECIMALS - kept) as u32);
        let rounded = (i128::from(self.0).abs() + divisor / 2) / divisor;
        let unit = 10_i128.pow(kept as u32);

        let sign = if self.0 < 0 && rounded != 0 { "-" } else { "" };
        let whole = rounded / unit;
        let frac = rounded % unit;
        if precision == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let padding = "0".repeat(precision - kept);
            write!(f, "{sign}{whole}.{frac:0kept$}{padding}")
        }
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Amount(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

/// A percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub fn new(value: f64) -> Result<Self, ModelError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ModelError::InvalidPercent(value));
        }
        Ok(Percent(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Percent {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
