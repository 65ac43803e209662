// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AirportCode, AllianceId, PricingModel, ProgramId, RegionId};
use serde::{Deserialize, Serialize};

/// An airline alliance grouping several loyalty programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alliance {
    pub id: AllianceId,
    pub name: String,
    /// Short code such as `STAR`, `OW` or `ST`.
    pub code: String,
}

/// An airline loyalty program.
///
/// Programs own their regions, award charts and routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineProgram {
    pub id: ProgramId,
    pub name: String,
    /// Short code such as `ANA` or `AEROPLAN`.
    pub code: String,
    pub alliance_id: Option<AllianceId>,
    pub has_dynamic_pricing: bool,
    pub pricing_model: PricingModel,
    /// Booking deep link with `{origin}`, `{destination}` and `{date}`
    /// placeholders.
    pub search_url_template: Option<String>,
}

/// A named zone in one program's private region taxonomy.
///
/// Regions are never shared between programs, even when two programs
/// draw identical boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub program_id: ProgramId,
    pub name: String,
    pub code: Option<String>,
}

/// Places an airport in one region of one program.
///
/// An airport has at most one region per program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRegionMapping {
    pub airport_code: AirportCode,
    pub region_id: RegionId,
    pub program_id: ProgramId,
}

/// A directed airport pair operated or codeshared by a program.
///
/// The reverse direction is a separate route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRoute {
    pub program_id: ProgramId,
    pub origin: AirportCode,
    pub destination: AirportCode,
}
