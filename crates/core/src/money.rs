//! Money amounts in the smallest currency unit.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Signed amount in the smallest currency unit (e.g. cents).
///
/// Negative amounts are valid: an adjustment may be a discount.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Percentage expressed in basis points (`10_000` = 100%).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisPoints(i64);

const BASIS_POINTS_PER_WHOLE: i128 = 10_000;

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant(format!("money overflow: {self} + {other}")))
    }

    /// Apply a percentage, rounding half away from zero.
    pub fn percentage(self, rate: BasisPoints) -> DomainResult<Money> {
        let product = i128::from(self.0) * i128::from(rate.0);
        let half = BASIS_POINTS_PER_WHOLE / 2;
        let rounded = if product >= 0 {
            (product + half) / BASIS_POINTS_PER_WHOLE
        } else {
            (product - half) / BASIS_POINTS_PER_WHOLE
        };

        i64::try_from(rounded)
            .map(Money)
            .map_err(|_| DomainError::invariant(format!("money overflow: {self} * {rate}")))
    }

    /// Sum an iterator of amounts, failing on overflow.
    pub fn try_sum<I>(amounts: I) -> DomainResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl BasisPoints {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole percent (e.g. `10` for 10%).
    pub const fn from_percent(percent: i64) -> Self {
        Self(percent * 100)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for BasisPoints {}

impl core::fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}%", abs / 100, abs % 100)
    }
}
