// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a numeric record identifier newtype.
///
/// Identifiers are assigned by the data store and are only meaningful
/// within the table they belong to.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw store identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of an [`Alliance`](crate::Alliance).
    AllianceId
);
record_id!(
    /// Identifier of an [`AirlineProgram`](crate::AirlineProgram).
    ProgramId
);
record_id!(
    /// Identifier of a program-private [`Region`](crate::Region).
    RegionId
);
record_id!(
    /// Identifier of an [`AwardChart`](crate::AwardChart) row.
    ChartId
);
record_id!(
    /// Identifier of a [`CreditCardProgram`](crate::CreditCardProgram).
    CardProgramId
);
record_id!(
    /// Identifier of a [`TransferPartnership`](crate::TransferPartnership).
    PartnershipId
);

/// An airport or metro identifier such as `JFK` or `NYC`.
///
/// Codes are normalized to uppercase with surrounding whitespace removed,
/// so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Creates a normalized code without validating its shape.
    ///
    /// Used for user-supplied lookups, where an unknown code simply
    /// resolves to nothing.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    /// Creates a normalized code, requiring exactly three ASCII
    /// alphanumeric characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the code does not have that shape.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let normalized: Self = Self::new(code);
        let valid: bool =
            normalized.0.len() == 3 && normalized.0.chars().all(|c| c.is_ascii_alphanumeric());
        if valid {
            Ok(normalized)
        } else {
            Err(DomainError::InvalidAirportCode(code.to_string()))
        }
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cabin class of an award redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// All cabin classes, lowest to highest.
    pub const ALL: [Self; 4] = [
        Self::Economy,
        Self::PremiumEconomy,
        Self::Business,
        Self::First,
    ];

    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium_economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

impl FromStr for CabinClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "premium_economy" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(DomainError::InvalidCabinClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for CabinClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operating carriers count toward an award chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    /// Only flights on the chart owner's own network.
    OwnMetal,
    /// Alliance partner flights. The owner's network also counts.
    Partner,
    /// Owner or alliance partner flights.
    #[default]
    Any,
}

impl PartnerType {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OwnMetal => "own_metal",
            Self::Partner => "partner",
            Self::Any => "any",
        }
    }

    /// Returns whether alliance partners may operate the itinerary.
    #[must_use]
    pub const fn allows_alliance_partners(&self) -> bool {
        matches!(self, Self::Partner | Self::Any)
    }
}

impl FromStr for PartnerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "own_metal" => Ok(Self::OwnMetal),
            "partner" => Ok(Self::Partner),
            "any" => Ok(Self::Any),
            _ => Err(DomainError::InvalidPartnerType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PartnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a loyalty program prices its awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    #[default]
    Region,
    Distance,
}

impl PricingModel {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Distance => "distance",
        }
    }
}

impl FromStr for PricingModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(Self::Region),
            "distance" => Ok(Self::Distance),
            _ => Err(DomainError::InvalidPricingModel(s.to_string())),
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
