// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use award_finder_domain::{
    AirlineProgram, Alliance, AwardChart, CreditCardProgram, Region, TransferPartnership,
};

/// A program with its alliance and reference data counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSummary {
    pub program: AirlineProgram,
    pub alliance: Option<Alliance>,
    pub transfer_partner_count: usize,
    pub award_chart_count: usize,
}

/// A card program that transfers into an airline program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPartner {
    pub card_program: CreditCardProgram,
    pub partnership: TransferPartnership,
}

/// A chart row with its regions resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDetail {
    pub chart: AwardChart,
    pub origin_region: Option<Region>,
    pub destination_region: Option<Region>,
}

/// Everything known about one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDetail {
    pub program: AirlineProgram,
    pub alliance: Option<Alliance>,
    /// Ordered by card program name.
    pub transfer_partners: Vec<TransferPartner>,
    /// Ordered by cabin class name, then `min_miles`.
    pub award_charts: Vec<ChartDetail>,
    pub regions: Vec<Region>,
    /// Other members of the program's alliance, ordered by name.
    pub alliance_partners: Vec<AirlineProgram>,
}

impl Catalog {
    fn program_alliance(&self, program: &AirlineProgram) -> Option<Alliance> {
        program
            .alliance_id
            .and_then(|id| self.alliance(id))
            .cloned()
    }

    /// Summaries of every program, ordered by name.
    #[must_use]
    pub fn list_programs(&self) -> Vec<ProgramSummary> {
        self.programs
            .iter()
            .map(|program| ProgramSummary {
                program: program.clone(),
                alliance: self.program_alliance(program),
                transfer_partner_count: self.program_partnerships(program.id).len(),
                award_chart_count: self.program_charts(program.id).len(),
            })
            .collect()
    }

    /// Looks up a program by code, ignoring case.
    #[must_use]
    pub fn program_by_code(&self, code: &str) -> Option<&AirlineProgram> {
        self.program_code_index
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.programs[i])
    }

    /// Full detail of the program with `code`, ignoring case.
    #[must_use]
    pub fn program_detail(&self, code: &str) -> Option<ProgramDetail> {
        let program: &AirlineProgram = self.program_by_code(code)?;

        let mut transfer_partners: Vec<TransferPartner> = self
            .program_partnerships(program.id)
            .iter()
            .filter_map(|partnership| {
                self.card_programs
                    .get(&partnership.card_program_id)
                    .map(|card| TransferPartner {
                        card_program: card.clone(),
                        partnership: partnership.clone(),
                    })
            })
            .collect();
        transfer_partners.sort_by(|a, b| a.card_program.name.cmp(&b.card_program.name));

        let mut award_charts: Vec<ChartDetail> = self
            .program_charts(program.id)
            .into_iter()
            .map(|chart| ChartDetail {
                chart: chart.clone(),
                origin_region: self.region(chart.origin_region_id).cloned(),
                destination_region: self.region(chart.destination_region_id).cloned(),
            })
            .collect();
        award_charts.sort_by(|a, b| {
            a.chart
                .cabin_class
                .as_str()
                .cmp(b.chart.cabin_class.as_str())
                .then(a.chart.min_miles.cmp(&b.chart.min_miles))
        });

        let alliance_partners: Vec<AirlineProgram> = program.alliance_id.map_or_else(
            Vec::new,
            |alliance_id| {
                self.programs
                    .iter()
                    .filter(|p| p.alliance_id == Some(alliance_id) && p.id != program.id)
                    .cloned()
                    .collect()
            },
        );

        Some(ProgramDetail {
            program: program.clone(),
            alliance: self.program_alliance(program),
            transfer_partners,
            award_charts,
            regions: self
                .program_regions(program.id)
                .into_iter()
                .cloned()
                .collect(),
            alliance_partners,
        })
    }

    /// All credit card programs, ordered by name.
    #[must_use]
    pub fn list_card_programs(&self) -> Vec<CreditCardProgram> {
        let mut cards: Vec<CreditCardProgram> = self.card_programs.values().cloned().collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        cards
    }
}
