// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use award_finder_domain::{AirportCode, ProgramId, Region, RegionId};
use std::collections::HashMap;

impl Catalog {
    /// Returns the region `program_id` assigns to any of `airport_codes`.
    ///
    /// Codes are tried in the order given and the first mapped one decides.
    /// Members of a metro are not required to agree on a region.
    ///
    /// # Arguments
    ///
    /// * `program_id` - The program whose taxonomy is consulted
    /// * `airport_codes` - Candidate airports, usually a resolved metro
    #[must_use]
    pub fn region_for(
        &self,
        program_id: ProgramId,
        airport_codes: &[AirportCode],
    ) -> Option<&Region> {
        let mappings: &HashMap<AirportCode, RegionId> =
            self.region_mappings.get(&program_id)?;
        airport_codes
            .iter()
            .find_map(|code| mappings.get(code))
            .and_then(|region_id| self.regions.get(region_id))
    }

    /// Regions owned by a program, in enumeration order.
    #[must_use]
    pub fn program_regions(&self, program_id: ProgramId) -> Vec<&Region> {
        self.program_regions
            .get(&program_id)
            .map(|ids| ids.iter().filter_map(|id| self.regions.get(id)).collect())
            .unwrap_or_default()
    }
}
