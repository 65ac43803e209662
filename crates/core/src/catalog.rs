// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::directory::MetroGroup;
use crate::error::CoreError;
use crate::source::{ReferenceSnapshot, ReferenceSource};
use award_finder_domain::{
    AirlineProgram, Airport, AirportCode, Alliance, AllianceId, AwardChart, CabinClass,
    CardProgramId, CreditCardProgram, ProgramId, Region, RegionId, TransferPartnership,
    metro_display_name,
};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Lookup key of an award chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub program_id: ProgramId,
    pub origin_region_id: RegionId,
    pub destination_region_id: RegionId,
    pub cabin_class: CabinClass,
}

impl ChartKey {
    const fn of(chart: &AwardChart) -> Self {
        Self {
            program_id: chart.program_id,
            origin_region_id: chart.origin_region_id,
            destination_region_id: chart.destination_region_id,
            cabin_class: chart.cabin_class,
        }
    }
}

/// Origin airport to reachable destination airports.
pub type RouteTable = HashMap<AirportCode, HashSet<AirportCode>>;

/// An immutable, indexed view of all reference data.
///
/// A catalog is built once from a [`ReferenceSource`] and then shared by
/// any number of concurrent searches. It never changes after
/// construction. Refreshing reference data means building a new catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Airports in source enumeration order.
    pub(crate) airports: Vec<Airport>,
    pub(crate) airport_index: HashMap<AirportCode, usize>,
    /// Metro groups in order of first appearance among `airports`.
    pub(crate) metros: Vec<MetroGroup>,
    pub(crate) metro_index: HashMap<AirportCode, usize>,
    pub(crate) alliances: HashMap<AllianceId, Alliance>,
    /// Programs ordered by name, then id. This is the search iteration
    /// order and the tie-break order of equally priced results.
    pub(crate) programs: Vec<AirlineProgram>,
    pub(crate) program_code_index: HashMap<String, usize>,
    pub(crate) alliance_members: HashMap<AllianceId, Vec<ProgramId>>,
    pub(crate) regions: HashMap<RegionId, Region>,
    /// Region ids per program in source enumeration order.
    pub(crate) program_regions: HashMap<ProgramId, Vec<RegionId>>,
    pub(crate) region_mappings: HashMap<ProgramId, HashMap<AirportCode, RegionId>>,
    /// Chart rows in source enumeration order.
    pub(crate) charts: Vec<AwardChart>,
    /// Index into `charts` of the first row carrying each key.
    pub(crate) chart_index: HashMap<ChartKey, usize>,
    pub(crate) routes: HashMap<ProgramId, RouteTable>,
    pub(crate) card_programs: HashMap<CardProgramId, CreditCardProgram>,
    pub(crate) card_code_index: HashMap<String, CardProgramId>,
    /// Partnerships per airline program in source enumeration order.
    pub(crate) partnerships: HashMap<ProgramId, Vec<TransferPartnership>>,
}

impl Catalog {
    /// Reads all reference data from `source` and indexes it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Infrastructure` if any table cannot be read.
    pub fn load<S: ReferenceSource + ?Sized>(source: &mut S) -> Result<Self, CoreError> {
        let snapshot: ReferenceSnapshot = ReferenceSnapshot::load(source)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Indexes an already loaded snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: ReferenceSnapshot) -> Self {
        let ReferenceSnapshot {
            airports,
            alliances,
            mut programs,
            regions,
            region_mappings,
            award_charts,
            routes,
            card_programs,
            partnerships,
        } = snapshot;

        let mut catalog: Self = Self::default();

        catalog.index_airports(airports);

        catalog.alliances = alliances.into_iter().map(|a| (a.id, a)).collect();

        programs.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        for (position, program) in programs.iter().enumerate() {
            catalog
                .program_code_index
                .insert(program.code.to_ascii_uppercase(), position);
            if let Some(alliance_id) = program.alliance_id {
                catalog
                    .alliance_members
                    .entry(alliance_id)
                    .or_default()
                    .push(program.id);
            }
        }
        catalog.programs = programs;

        for region in regions {
            catalog
                .program_regions
                .entry(region.program_id)
                .or_default()
                .push(region.id);
            catalog.regions.insert(region.id, region);
        }

        for mapping in region_mappings {
            if !catalog.regions.contains_key(&mapping.region_id) {
                warn!(
                    airport = %mapping.airport_code,
                    region_id = %mapping.region_id,
                    "Ignoring mapping to unknown region"
                );
                continue;
            }
            let by_airport: &mut HashMap<AirportCode, RegionId> = catalog
                .region_mappings
                .entry(mapping.program_id)
                .or_default();
            match by_airport.entry(mapping.airport_code) {
                Entry::Occupied(existing) => warn!(
                    airport = %existing.key(),
                    program_id = %mapping.program_id,
                    "Ignoring duplicate region mapping"
                ),
                Entry::Vacant(slot) => {
                    slot.insert(mapping.region_id);
                }
            }
        }

        // Chart keys are not unique in the data model. The first row in
        // enumeration order wins and later duplicates are never priced.
        for (position, chart) in award_charts.iter().enumerate() {
            match catalog.chart_index.entry(ChartKey::of(chart)) {
                Entry::Occupied(kept) => debug!(
                    chart_id = %chart.id,
                    kept_chart_id = %award_charts[*kept.get()].id,
                    "Duplicate award chart key, keeping first row"
                ),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        catalog.charts = award_charts;

        for route in routes {
            catalog
                .routes
                .entry(route.program_id)
                .or_default()
                .entry(route.origin)
                .or_default()
                .insert(route.destination);
        }

        for card in card_programs {
            catalog.card_code_index.insert(card.code.clone(), card.id);
            catalog.card_programs.insert(card.id, card);
        }

        for partnership in partnerships {
            catalog
                .partnerships
                .entry(partnership.program_id)
                .or_default()
                .push(partnership);
        }

        info!(
            airports = catalog.airports.len(),
            metros = catalog.metros.len(),
            programs = catalog.programs.len(),
            regions = catalog.regions.len(),
            charts = catalog.charts.len(),
            cards = catalog.card_programs.len(),
            "Built reference catalog"
        );

        catalog
    }

    fn index_airports(&mut self, airports: Vec<Airport>) {
        for (position, airport) in airports.iter().enumerate() {
            self.airport_index.insert(airport.code.clone(), position);

            let Some(metro) = &airport.metro else {
                continue;
            };
            if let Some(&group) = self.metro_index.get(metro) {
                self.metros[group].airport_codes.push(airport.code.clone());
            } else {
                self.metro_index.insert(metro.clone(), self.metros.len());
                self.metros.push(MetroGroup {
                    code: metro.clone(),
                    name: metro_display_name(metro.as_str()).to_string(),
                    country: airport.country.clone(),
                    airport_codes: vec![airport.code.clone()],
                });
            }
        }
        self.airports = airports;
    }

    /// All airports in source enumeration order.
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Looks up an airport by code.
    #[must_use]
    pub fn airport(&self, code: &AirportCode) -> Option<&Airport> {
        self.airport_index.get(code).map(|&i| &self.airports[i])
    }

    /// All metro groups in order of first appearance.
    #[must_use]
    pub fn metros(&self) -> &[MetroGroup] {
        &self.metros
    }

    /// All programs in search order.
    #[must_use]
    pub fn programs(&self) -> &[AirlineProgram] {
        &self.programs
    }

    /// Looks up an alliance by id.
    #[must_use]
    pub fn alliance(&self, id: AllianceId) -> Option<&Alliance> {
        self.alliances.get(&id)
    }

    /// Looks up a region by id.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// Looks up a credit card program by its exact code.
    #[must_use]
    pub fn card_program_by_code(&self, code: &str) -> Option<&CreditCardProgram> {
        self.card_code_index
            .get(code)
            .and_then(|id| self.card_programs.get(id))
    }
}
