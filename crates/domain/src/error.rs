// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or validating reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Airport code is empty or not a three character identifier.
    InvalidAirportCode(String),
    /// Cabin class string is not one of the known classes.
    InvalidCabinClass(String),
    /// Partner type string is not one of the known policies.
    InvalidPartnerType(String),
    /// Pricing model string is not one of the known models.
    InvalidPricingModel(String),
    /// Transfer ratio could not be parsed or is out of range.
    InvalidTransferRatio {
        /// The rejected input.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A mileage or hour count was negative or too large.
    InvalidCount {
        /// The field that carried the value.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAirportCode(code) => write!(f, "Invalid airport code: '{code}'"),
            Self::InvalidCabinClass(value) => write!(
                f,
                "Invalid cabin class: '{value}'. Must be one of economy, premium_economy, business, first"
            ),
            Self::InvalidPartnerType(value) => write!(
                f,
                "Invalid partner type: '{value}'. Must be one of own_metal, partner, any"
            ),
            Self::InvalidPricingModel(value) => write!(
                f,
                "Invalid pricing model: '{value}'. Must be one of region, distance"
            ),
            Self::InvalidTransferRatio { value, reason } => {
                write!(f, "Invalid transfer ratio '{value}': {reason}")
            }
            Self::InvalidCount { field, value } => {
                write!(f, "Invalid value for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
