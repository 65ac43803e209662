// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CabinClass, ChartId, PartnerType, ProgramId, RegionId};
use serde::{Deserialize, Serialize};

/// Price band for a directed region pair and cabin within one program.
///
/// Nothing prevents two rows from sharing the same program, region pair
/// and cabin. Consumers must not assume a chart key is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardChart {
    pub id: ChartId,
    pub program_id: ProgramId,
    pub origin_region_id: RegionId,
    pub destination_region_id: RegionId,
    pub cabin_class: CabinClass,
    pub partner_type: PartnerType,
    pub min_miles: u32,
    pub max_miles: u32,
    /// Commonly observed price for dynamically priced programs.
    pub typical_miles: Option<u32>,
    /// `false` when the band is only bookable as a round trip.
    pub is_one_way: bool,
    pub notes: Option<String>,
}
