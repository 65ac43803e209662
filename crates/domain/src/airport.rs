// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AirportCode;
use serde::{Deserialize, Serialize};

/// Display names for metro groupings that serve one city from several
/// airports.
const METRO_NAMES: &[(&str, &str)] = &[
    ("NYC", "New York"),
    ("CHI", "Chicago"),
    ("WAS", "Washington D.C."),
    ("DFW", "Dallas/Fort Worth"),
    ("MIA", "Miami"),
    ("SFO", "San Francisco Bay Area"),
    ("LON", "London"),
    ("PAR", "Paris"),
    ("TYO", "Tokyo"),
    ("SEL", "Seoul"),
    ("BJS", "Beijing"),
    ("SHA", "Shanghai"),
    ("OSA", "Osaka"),
    ("BKK", "Bangkok"),
    ("IST", "Istanbul"),
    ("ROM", "Rome"),
    ("MIL", "Milan"),
    ("SAO", "São Paulo"),
    ("RIO", "Rio de Janeiro"),
    ("BUE", "Buenos Aires"),
];

/// Canonical airport reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Three letter airport identifier.
    pub code: AirportCode,
    pub name: String,
    pub city: String,
    pub country: String,
    /// ISO 3166 alpha-2 country code, when known.
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Metro grouping code shared by airports serving the same city.
    pub metro: Option<AirportCode>,
}

/// Returns the display name for a metro code.
///
/// Metro codes without a registered name display as the code itself.
#[must_use]
pub fn metro_display_name(metro_code: &str) -> &str {
    METRO_NAMES
        .iter()
        .find(|(code, _)| *code == metro_code)
        .map_or(metro_code, |(_, name)| *name)
}
