// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use award_finder::{Catalog, ReferenceSnapshot, ReferenceSource, SourceError};
use award_finder_domain::{
    AirlineProgram, AirlineRoute, Airport, AirportCode, AirportRegionMapping, Alliance,
    AllianceId, AwardChart, CabinClass, CardProgramId, ChartId, CreditCardProgram, PartnerType,
    PartnershipId, PricingModel, ProgramId, Region, RegionId, TransferPartnership, TransferRatio,
};
use std::str::FromStr;
use time::{Date, Month};

use crate::SearchRequest;

const STAR: AllianceId = AllianceId::new(1);
const UNITED: ProgramId = ProgramId::new(1);
const ANA: ProgramId = ProgramId::new(2);
const CHASE: CardProgramId = CardProgramId::new(1);
const AMEX: CardProgramId = CardProgramId::new(2);

pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::October, 14).unwrap()
}

fn create_test_airport(code: &str, name: &str, city: &str, metro: &str, country: &str) -> Airport {
    Airport {
        code: AirportCode::new(code),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        country_code: None,
        lat: None,
        lng: None,
        metro: Some(AirportCode::new(metro)),
    }
}

fn create_test_region(id: i64, program_id: ProgramId, name: &str, code: Option<&str>) -> Region {
    Region {
        id: RegionId::new(id),
        program_id,
        name: name.to_string(),
        code: code.map(str::to_string),
    }
}

fn create_test_mapping(code: &str, region_id: i64, program_id: ProgramId) -> AirportRegionMapping {
    AirportRegionMapping {
        airport_code: AirportCode::new(code),
        region_id: RegionId::new(region_id),
        program_id,
    }
}

fn create_test_chart(
    id: i64,
    program_id: ProgramId,
    regions: (i64, i64),
    cabin_class: CabinClass,
    partner_type: PartnerType,
    min_miles: u32,
) -> AwardChart {
    AwardChart {
        id: ChartId::new(id),
        program_id,
        origin_region_id: RegionId::new(regions.0),
        destination_region_id: RegionId::new(regions.1),
        cabin_class,
        partner_type,
        min_miles,
        max_miles: min_miles,
        typical_miles: None,
        is_one_way: true,
        notes: None,
    }
}

fn create_test_partnership(
    id: i64,
    card_program_id: CardProgramId,
    program_id: ProgramId,
    hours: u32,
) -> TransferPartnership {
    TransferPartnership {
        id: PartnershipId::new(id),
        card_program_id,
        program_id,
        transfer_ratio: TransferRatio::ONE,
        transfer_time_hours: hours,
        is_bonus_active: false,
        bonus_ratio: None,
        bonus_expires_at: None,
    }
}

/// United and ANA between New York and Tokyo.
///
/// United maps both New York airports and flies EWR-NRT. ANA maps only JFK
/// and flies JFK-NRT on its own metal. Amex runs a 30% bonus into ANA.
pub fn create_test_snapshot() -> ReferenceSnapshot {
    use CabinClass::{Business, Economy};
    use PartnerType::{Any, OwnMetal};

    let mut saver: AwardChart = create_test_chart(2, UNITED, (10, 11), Business, Any, 88_000);
    saver.notes = Some(String::from("Saver"));
    let mut ana_economy: AwardChart =
        create_test_chart(3, ANA, (20, 21), Economy, OwnMetal, 55_000);
    ana_economy.max_miles = 65_000;
    ana_economy.typical_miles = Some(60_000);

    let mut amex_bonus: TransferPartnership = create_test_partnership(2, AMEX, ANA, 48);
    amex_bonus.is_bonus_active = true;
    amex_bonus.bonus_ratio = Some(TransferRatio::from_str("1.3").unwrap());
    amex_bonus.bonus_expires_at = Some(String::from("2026-12-31"));

    ReferenceSnapshot {
        airports: vec![
            create_test_airport(
                "EWR",
                "Newark Liberty International Airport",
                "Newark",
                "NYC",
                "United States",
            ),
            create_test_airport(
                "JFK",
                "John F. Kennedy International Airport",
                "New York",
                "NYC",
                "United States",
            ),
            create_test_airport("NRT", "Narita International Airport", "Tokyo", "TYO", "Japan"),
        ],
        alliances: vec![Alliance {
            id: STAR,
            name: String::from("Star Alliance"),
            code: String::from("STAR"),
        }],
        programs: vec![
            AirlineProgram {
                id: UNITED,
                name: String::from("United MileagePlus"),
                code: String::from("UA"),
                alliance_id: Some(STAR),
                has_dynamic_pricing: true,
                pricing_model: PricingModel::Region,
                search_url_template: Some(String::from(
                    "https://www.united.com/en/us/fsr/choose-flights?f={origin}&t={destination}&d={date}",
                )),
            },
            AirlineProgram {
                id: ANA,
                name: String::from("ANA Mileage Club"),
                code: String::from("NH"),
                alliance_id: Some(STAR),
                has_dynamic_pricing: false,
                pricing_model: PricingModel::Distance,
                search_url_template: None,
            },
        ],
        regions: vec![
            create_test_region(10, UNITED, "North America", None),
            create_test_region(11, UNITED, "Japan", Some("JP")),
            create_test_region(20, ANA, "North America", None),
            create_test_region(21, ANA, "Asia 2", None),
        ],
        region_mappings: vec![
            create_test_mapping("EWR", 10, UNITED),
            create_test_mapping("JFK", 10, UNITED),
            create_test_mapping("NRT", 11, UNITED),
            create_test_mapping("JFK", 20, ANA),
            create_test_mapping("NRT", 21, ANA),
        ],
        award_charts: vec![
            create_test_chart(1, UNITED, (10, 11), Economy, Any, 35_000),
            saver,
            ana_economy,
            create_test_chart(4, UNITED, (11, 10), Economy, Any, 35_000),
        ],
        routes: vec![
            AirlineRoute {
                program_id: UNITED,
                origin: AirportCode::new("EWR"),
                destination: AirportCode::new("NRT"),
            },
            AirlineRoute {
                program_id: ANA,
                origin: AirportCode::new("JFK"),
                destination: AirportCode::new("NRT"),
            },
        ],
        card_programs: vec![
            CreditCardProgram {
                id: CHASE,
                name: String::from("Chase Ultimate Rewards"),
                code: String::from("UR"),
            },
            CreditCardProgram {
                id: AMEX,
                name: String::from("Amex Membership Rewards"),
                code: String::from("MR"),
            },
        ],
        partnerships: vec![
            create_test_partnership(1, CHASE, UNITED, 0),
            amex_bonus,
            create_test_partnership(3, CHASE, ANA, 24),
        ],
    }
}

pub fn create_test_catalog() -> Catalog {
    Catalog::from_snapshot(create_test_snapshot())
}

pub fn create_test_search_request(
    origin: Option<&str>,
    destination: Option<&str>,
    cabin: Option<&str>,
    programs: Option<&str>,
) -> SearchRequest {
    SearchRequest {
        origin: origin.map(str::to_string),
        destination: destination.map(str::to_string),
        cabin: cabin.map(str::to_string),
        programs: programs.map(str::to_string),
    }
}

/// A source whose store is unreachable.
pub struct UnreachableSource;

fn store_unreachable<T>() -> Result<Vec<T>, SourceError> {
    Err(SourceError::Unavailable(String::from("database is locked")))
}

impl ReferenceSource for UnreachableSource {
    fn list_airports(&mut self) -> Result<Vec<Airport>, SourceError> {
        store_unreachable()
    }

    fn list_alliances(&mut self) -> Result<Vec<Alliance>, SourceError> {
        store_unreachable()
    }

    fn list_airline_programs(&mut self) -> Result<Vec<AirlineProgram>, SourceError> {
        store_unreachable()
    }

    fn list_regions(&mut self) -> Result<Vec<Region>, SourceError> {
        store_unreachable()
    }

    fn list_region_mappings(&mut self) -> Result<Vec<AirportRegionMapping>, SourceError> {
        store_unreachable()
    }

    fn list_award_charts(&mut self) -> Result<Vec<AwardChart>, SourceError> {
        store_unreachable()
    }

    fn list_routes(&mut self) -> Result<Vec<AirlineRoute>, SourceError> {
        store_unreachable()
    }

    fn list_card_programs(&mut self) -> Result<Vec<CreditCardProgram>, SourceError> {
        store_unreachable()
    }

    fn list_partnerships(&mut self) -> Result<Vec<TransferPartnership>, SourceError> {
        store_unreachable()
    }
}
