// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use award_finder_domain::{Airport, AirportCode};
use std::collections::HashSet;

/// Maximum number of entries returned by an airport search.
pub const AIRPORT_SEARCH_LIMIT: usize = 15;

/// Shortest query, in characters, that an airport search will run.
pub const MIN_AIRPORT_QUERY_CHARS: usize = 2;

/// Airports that share a metro code.
///
/// Derived from the airport table. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetroGroup {
    pub code: AirportCode,
    /// Display name, or the code itself when no name is registered.
    pub name: String,
    /// Country of the first member airport.
    pub country: String,
    /// Member airports in airport enumeration order.
    pub airport_codes: Vec<AirportCode>,
}

/// One entry of an airport search.
#[derive(Debug, Clone, PartialEq)]
pub enum AirportSearchResult {
    /// A pseudo-entry standing for every airport of a metro.
    Metro {
        code: AirportCode,
        /// `"All {metro name} Airports"`.
        name: String,
        city: String,
        country: String,
        airport_codes: Vec<AirportCode>,
    },
    /// A single airport.
    Airport {
        code: AirportCode,
        name: String,
        city: String,
        country: String,
    },
}

impl AirportSearchResult {
    fn from_metro(metro: &MetroGroup, country: &str) -> Self {
        Self::Metro {
            code: metro.code.clone(),
            name: format!("All {} Airports", metro.name),
            city: metro.name.clone(),
            country: country.to_string(),
            airport_codes: metro.airport_codes.clone(),
        }
    }

    fn from_airport(airport: &Airport) -> Self {
        Self::Airport {
            code: airport.code.clone(),
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
        }
    }

    /// The code a caller should submit to search this entry.
    #[must_use]
    pub const fn code(&self) -> &AirportCode {
        match self {
            Self::Metro { code, .. } | Self::Airport { code, .. } => code,
        }
    }

    #[must_use]
    pub const fn is_metro(&self) -> bool {
        matches!(self, Self::Metro { .. })
    }
}

/// Result of resolving a user-supplied code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCode {
    /// The code as supplied.
    pub code: String,
    /// Airports the code stands for. Empty when the code is unknown.
    pub airport_codes: Vec<AirportCode>,
    pub is_metro: bool,
    /// Metro display name, present only for metro codes.
    pub metro_name: Option<String>,
}

impl Catalog {
    /// Expands a metro or airport code into airport codes.
    ///
    /// A metro code yields all of its member airports in enumeration order.
    /// An airport code yields itself. Anything else yields nothing. A code
    /// that names both a metro and an airport resolves as the metro.
    #[must_use]
    pub fn resolve_codes(&self, code: &str) -> Vec<AirportCode> {
        let code: AirportCode = AirportCode::new(code);
        if let Some(metro) = self.metro(&code) {
            return metro.airport_codes.clone();
        }
        if self.airport_index.contains_key(&code) {
            return vec![code];
        }
        Vec::new()
    }

    /// Resolves a code and reports whether it was a metro.
    #[must_use]
    pub fn resolve(&self, code: &str) -> ResolvedCode {
        let metro: Option<&MetroGroup> = self.metro(&AirportCode::new(code));
        ResolvedCode {
            code: code.to_string(),
            airport_codes: self.resolve_codes(code),
            is_metro: metro.is_some(),
            metro_name: metro.map(|m| m.name.clone()),
        }
    }

    /// Looks up a metro group by code.
    #[must_use]
    pub fn metro(&self, code: &AirportCode) -> Option<&MetroGroup> {
        self.metro_index.get(code).map(|&i| &self.metros[i])
    }

    /// Finds airports and metros matching a free-text query.
    ///
    /// Matching is a case-insensitive substring test against airport code,
    /// city and name, and against metro code and display name. Metros whose
    /// own code or name matches come first. Metros of matching airports
    /// follow, then the matching airports themselves. At most
    /// [`AIRPORT_SEARCH_LIMIT`] entries are returned. Queries shorter than
    /// [`MIN_AIRPORT_QUERY_CHARS`] return nothing.
    #[must_use]
    pub fn search_airports(&self, query: &str) -> Vec<AirportSearchResult> {
        if query.chars().count() < MIN_AIRPORT_QUERY_CHARS {
            return Vec::new();
        }

        let upper: String = query.to_uppercase();
        let lower: String = query.to_lowercase();

        let mut results: Vec<AirportSearchResult> = Vec::new();
        let mut added_metros: HashSet<&AirportCode> = HashSet::new();

        for metro in &self.metros {
            let matches: bool = metro.code.as_str().contains(&upper)
                || metro.name.to_lowercase().contains(&lower);
            if matches && added_metros.insert(&metro.code) {
                results.push(AirportSearchResult::from_metro(metro, &metro.country));
            }
        }

        let matching: Vec<&Airport> = self
            .airports
            .iter()
            .filter(|a| {
                a.code.as_str().contains(&upper)
                    || a.city.to_lowercase().contains(&lower)
                    || a.name.to_lowercase().contains(&lower)
            })
            .collect();

        // A metro surfaced through one of its airports takes that airport's
        // country.
        for airport in &matching {
            let Some(metro) = airport.metro.as_ref().and_then(|code| self.metro(code)) else {
                continue;
            };
            if added_metros.insert(&metro.code) {
                results.push(AirportSearchResult::from_metro(metro, &airport.country));
            }
        }

        results.extend(matching.into_iter().map(AirportSearchResult::from_airport));
        results.truncate(AIRPORT_SEARCH_LIMIT);
        results
    }
}
