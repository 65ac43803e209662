// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{Catalog, ChartKey};
use award_finder_domain::{AwardChart, CabinClass, ProgramId, RegionId};

impl Catalog {
    /// Returns the award chart row for a directed region pair and cabin.
    ///
    /// When several rows share the key, the first one in source
    /// enumeration order is returned. The data model does not forbid such
    /// duplicates, so which row is "first" depends on the store.
    #[must_use]
    pub fn chart_for(
        &self,
        program_id: ProgramId,
        origin_region_id: RegionId,
        destination_region_id: RegionId,
        cabin_class: CabinClass,
    ) -> Option<&AwardChart> {
        let key: ChartKey = ChartKey {
            program_id,
            origin_region_id,
            destination_region_id,
            cabin_class,
        };
        self.chart_index.get(&key).map(|&i| &self.charts[i])
    }

    /// Every chart row of a program, duplicates included, in enumeration
    /// order.
    #[must_use]
    pub fn program_charts(&self, program_id: ProgramId) -> Vec<&AwardChart> {
        self.charts
            .iter()
            .filter(|c| c.program_id == program_id)
            .collect()
    }
}
