//! Money in the smallest currency unit.
//!
//! Prices and totals are carried as whole paise so that splitting an amount into
//! rupees and paise is exact. Conversion from a decimal rupee figure happens once,
//! at the boundary, and rounds to the nearest paisa.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const PAISE_PER_RUPEE: u64 = 100;

/// Non-negative amount of Indian rupees, stored in paise.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    /// Convert a decimal rupee figure, rounding to the nearest paisa.
    ///
    /// A fraction that rounds up to a whole rupee is carried into the rupee part
    /// (`10.999` becomes `11.00`).
    pub fn from_rupees(rupees: f64) -> DomainResult<Self> {
        if !rupees.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if rupees < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }

        let paise = (rupees * PAISE_PER_RUPEE as f64).round();
        if paise >= u64::MAX as f64 {
            return Err(DomainError::invariant("amount overflow"));
        }

        Ok(Self(paise as u64))
    }

    pub const fn paise(self) -> u64 {
        self.0
    }

    /// Whole rupees (the integer part).
    pub const fn rupee_part(self) -> u64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Remaining paise, always in `0..100`.
    pub const fn paise_part(self) -> u64 {
        self.0 % PAISE_PER_RUPEE
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }

    /// Sum a sequence of amounts, `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, next| acc.checked_add(next))
    }
}

impl ValueObject for Amount {}

/// Two decimal places, no currency symbol (`150.00`).
impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.rupee_part(), self.paise_part())
    }
}
