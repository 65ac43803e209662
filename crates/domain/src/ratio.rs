// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point transfer ratios.
//!
//! A ratio of `1.3` means one card point yields 1.3 program miles. Ratios
//! are kept as an integer count of ten-thousandths so that point
//! calculations are exact. `ceil(75000 / 1.3)` must be `57693`, and a
//! binary float cannot promise that for every chart price.

use crate::error::DomainError;
use std::str::FromStr;

/// Number of fractional decimal digits a ratio may carry.
const FRACTION_DIGITS: usize = 4;

/// Ten-thousandths per whole unit.
const SCALE: u64 = 10_000;

/// Conversion rate from credit card points to program miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransferRatio {
    ten_thousandths: u32,
}

impl TransferRatio {
    /// The 1:1 ratio, used when a partnership does not specify one.
    pub const ONE: Self = Self {
        ten_thousandths: 10_000,
    };

    /// Creates a ratio from a count of ten-thousandths.
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is zero.
    pub fn from_ten_thousandths(ten_thousandths: u32) -> Result<Self, DomainError> {
        if ten_thousandths == 0 {
            return Err(DomainError::InvalidTransferRatio {
                value: String::from("0"),
                reason: "ratio must be greater than zero",
            });
        }
        Ok(Self { ten_thousandths })
    }

    /// Returns the ratio as a count of ten-thousandths.
    #[must_use]
    pub const fn ten_thousandths(&self) -> u32 {
        self.ten_thousandths
    }

    /// Returns the ratio as a float, for display only.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.ten_thousandths) / 10_000.0
    }

    /// Card points needed to obtain `miles` program miles.
    ///
    /// Computes `ceil(miles / ratio)` in integer arithmetic.
    #[must_use]
    pub fn points_for(&self, miles: u32) -> u64 {
        let scaled_miles: u64 = u64::from(miles) * SCALE;
        scaled_miles.div_ceil(u64::from(self.ten_thousandths))
    }
}

impl Default for TransferRatio {
    fn default() -> Self {
        Self::ONE
    }
}

impl FromStr for TransferRatio {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let invalid = |reason: &'static str| DomainError::InvalidTransferRatio {
            value: s.to_string(),
            reason,
        };

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a non-negative decimal number"));
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a non-negative decimal number"));
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(invalid("at most four decimal places are supported"));
        }

        let whole_value: u64 = whole
            .parse::<u64>()
            .map_err(|_| invalid("ratio is too large"))?;
        let mut fraction_value: u64 = 0;
        for digit in fraction.chars().chain(std::iter::repeat('0')).take(FRACTION_DIGITS) {
            fraction_value = fraction_value * 10 + u64::from(digit.to_digit(10).unwrap_or(0));
        }

        let total: u64 = whole_value
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(fraction_value))
            .ok_or_else(|| invalid("ratio is too large"))?;
        let ten_thousandths: u32 =
            u32::try_from(total).map_err(|_| invalid("ratio is too large"))?;

        if ten_thousandths == 0 {
            return Err(invalid("ratio must be greater than zero"));
        }

        Ok(Self { ten_thousandths })
    }
}

impl std::fmt::Display for TransferRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u32 = self.ten_thousandths / 10_000;
        let fraction: String = format!("{:04}", self.ten_thousandths % 10_000);
        let trimmed: &str = fraction.trim_end_matches('0');
        if trimmed.is_empty() {
            write!(f, "{whole}.0")
        } else {
            write!(f, "{whole}.{trimmed}")
        }
    }
}
