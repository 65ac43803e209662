// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_catalog;
use crate::{Catalog, ProgramDetail, ProgramSummary};
use award_finder_domain::{CabinClass, CreditCardProgram};

#[test]
fn test_list_programs_with_counts() {
    let catalog: Catalog = create_test_catalog();
    let programs: Vec<ProgramSummary> = catalog.list_programs();

    let codes: Vec<&str> = programs.iter().map(|p| p.program.code.as_str()).collect();
    assert_eq!(codes, vec!["NH", "AA", "UA", "VS"]);

    let united: &ProgramSummary = &programs[2];
    assert_eq!(united.alliance.as_ref().unwrap().code, "STAR");
    assert_eq!(united.transfer_partner_count, 2);
    assert_eq!(united.award_chart_count, 5);

    let virgin: &ProgramSummary = &programs[3];
    assert!(virgin.alliance.is_none());
    assert_eq!(virgin.transfer_partner_count, 1);
    assert_eq!(virgin.award_chart_count, 1);
}

#[test]
fn test_program_detail_lookup_ignores_case() {
    let catalog: Catalog = create_test_catalog();
    let detail: ProgramDetail = catalog.program_detail("ua").unwrap();
    assert_eq!(detail.program.name, "United MileagePlus");
    assert_eq!(detail.alliance.unwrap().name, "Star Alliance");
}

#[test]
fn test_program_detail_unknown_code() {
    let catalog: Catalog = create_test_catalog();
    assert!(catalog.program_detail("ZZ").is_none());
}

#[test]
fn test_program_detail_transfer_partners_ordered_by_card_name() {
    let catalog: Catalog = create_test_catalog();
    let detail: ProgramDetail = catalog.program_detail("UA").unwrap();
    let cards: Vec<&str> = detail
        .transfer_partners
        .iter()
        .map(|t| t.card_program.name.as_str())
        .collect();
    assert_eq!(cards, vec!["Capital One Miles", "Chase Ultimate Rewards"]);
}

#[test]
fn test_program_detail_charts_ordered_by_cabin_then_miles() {
    let catalog: Catalog = create_test_catalog();
    let detail: ProgramDetail = catalog.program_detail("UA").unwrap();
    let charts: Vec<(CabinClass, u32)> = detail
        .award_charts
        .iter()
        .map(|c| (c.chart.cabin_class, c.chart.min_miles))
        .collect();
    assert_eq!(
        charts,
        vec![
            (CabinClass::Business, 88_000),
            (CabinClass::Business, 99_000),
            (CabinClass::Economy, 30_000),
            (CabinClass::Economy, 35_000),
            (CabinClass::First, 75_000),
        ]
    );

    let first = &detail.award_charts[0];
    assert_eq!(first.origin_region.as_ref().unwrap().name, "North America");
    assert_eq!(first.destination_region.as_ref().unwrap().name, "Japan");
}

#[test]
fn test_program_detail_regions_and_alliance_partners() {
    let catalog: Catalog = create_test_catalog();
    let detail: ProgramDetail = catalog.program_detail("UA").unwrap();
    assert_eq!(detail.regions.len(), 3);

    let partners: Vec<&str> = detail
        .alliance_partners
        .iter()
        .map(|p| p.code.as_str())
        .collect();
    assert_eq!(partners, vec!["NH"]);
}

#[test]
fn test_program_detail_without_alliance_has_no_partners() {
    let catalog: Catalog = create_test_catalog();
    let detail: ProgramDetail = catalog.program_detail("vs").unwrap();
    assert!(detail.alliance.is_none());
    assert!(detail.alliance_partners.is_empty());
}

#[test]
fn test_list_card_programs_ordered_by_name() {
    let catalog: Catalog = create_test_catalog();
    let cards: Vec<CreditCardProgram> = catalog.list_card_programs();
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Amex Membership Rewards",
            "Capital One Miles",
            "Chase Ultimate Rewards",
        ]
    );
}
