// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{Catalog, RouteTable};
use award_finder_domain::{AirportCode, AllianceId, PartnerType, ProgramId};

impl Catalog {
    /// Programs whose flights count toward a chart entry of `program_id`.
    ///
    /// `own_metal` entries count only the program itself. `partner` and
    /// `any` entries count every member of the program's alliance, the
    /// program included.
    #[must_use]
    pub fn candidate_operators(
        &self,
        program_id: ProgramId,
        alliance_id: Option<AllianceId>,
        partner_type: PartnerType,
    ) -> Vec<ProgramId> {
        let mut operators: Vec<ProgramId> = vec![program_id];
        if !partner_type.allows_alliance_partners() {
            return operators;
        }
        if let Some(members) = alliance_id.and_then(|id| self.alliance_members.get(&id)) {
            operators.extend(members.iter().copied().filter(|&m| m != program_id));
        }
        operators
    }

    /// Whether any candidate operator flies from one of `origin_codes` to
    /// one of `destination_codes`.
    ///
    /// Routes are directed. A route in the reverse direction does not
    /// count.
    #[must_use]
    pub fn is_route_available(
        &self,
        program_id: ProgramId,
        alliance_id: Option<AllianceId>,
        partner_type: PartnerType,
        origin_codes: &[AirportCode],
        destination_codes: &[AirportCode],
    ) -> bool {
        self.candidate_operators(program_id, alliance_id, partner_type)
            .iter()
            .filter_map(|operator| self.routes.get(operator))
            .any(|table| serves(table, origin_codes, destination_codes))
    }
}

fn serves(
    table: &RouteTable,
    origin_codes: &[AirportCode],
    destination_codes: &[AirportCode],
) -> bool {
    origin_codes
        .iter()
        .filter_map(|origin| table.get(origin))
        .any(|destinations| destination_codes.iter().any(|d| destinations.contains(d)))
}
