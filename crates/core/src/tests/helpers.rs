// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, ReferenceSnapshot, ReferenceSource, SearchQuery, SourceError};
use award_finder_domain::{
    AirlineProgram, AirlineRoute, Airport, AirportCode, AirportRegionMapping, Alliance,
    AllianceId, AwardChart, CabinClass, CardProgramId, ChartId, CreditCardProgram, PartnerType,
    PartnershipId, PricingModel, ProgramId, Region, RegionId, TransferPartnership, TransferRatio,
};
use std::str::FromStr;
use time::{Date, Month};

pub const STAR: AllianceId = AllianceId::new(1);
pub const ONEWORLD: AllianceId = AllianceId::new(2);

pub const UNITED: ProgramId = ProgramId::new(1);
pub const ANA: ProgramId = ProgramId::new(2);
pub const AMERICAN: ProgramId = ProgramId::new(3);
pub const VIRGIN: ProgramId = ProgramId::new(4);

pub const CHASE: CardProgramId = CardProgramId::new(1);
pub const AMEX: CardProgramId = CardProgramId::new(2);
pub const CAPITAL_ONE: CardProgramId = CardProgramId::new(3);

pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::October, 14).unwrap()
}

pub fn create_test_airport(code: &str, name: &str, city: &str, metro: Option<&str>) -> Airport {
    let country: &str = match code {
        "NRT" | "HND" => "Japan",
        "LHR" => "United Kingdom",
        _ => "United States",
    };
    Airport {
        code: AirportCode::new(code),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        country_code: None,
        lat: None,
        lng: None,
        metro: metro.map(AirportCode::new),
    }
}

pub fn create_test_program(
    id: ProgramId,
    name: &str,
    code: &str,
    alliance_id: Option<AllianceId>,
    template: Option<&str>,
) -> AirlineProgram {
    AirlineProgram {
        id,
        name: name.to_string(),
        code: code.to_string(),
        alliance_id,
        has_dynamic_pricing: false,
        pricing_model: PricingModel::Region,
        search_url_template: template.map(str::to_string),
    }
}

pub fn create_test_region(id: i64, program_id: ProgramId, name: &str) -> Region {
    Region {
        id: RegionId::new(id),
        program_id,
        name: name.to_string(),
        code: None,
    }
}

pub fn create_test_mapping(
    code: &str,
    region_id: i64,
    program_id: ProgramId,
) -> AirportRegionMapping {
    AirportRegionMapping {
        airport_code: AirportCode::new(code),
        region_id: RegionId::new(region_id),
        program_id,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_test_chart(
    id: i64,
    program_id: ProgramId,
    origin_region: i64,
    destination_region: i64,
    cabin_class: CabinClass,
    partner_type: PartnerType,
    min_miles: u32,
    max_miles: u32,
) -> AwardChart {
    AwardChart {
        id: ChartId::new(id),
        program_id,
        origin_region_id: RegionId::new(origin_region),
        destination_region_id: RegionId::new(destination_region),
        cabin_class,
        partner_type,
        min_miles,
        max_miles,
        typical_miles: None,
        is_one_way: true,
        notes: None,
    }
}

pub fn create_test_route(program_id: ProgramId, origin: &str, destination: &str) -> AirlineRoute {
    AirlineRoute {
        program_id,
        origin: AirportCode::new(origin),
        destination: AirportCode::new(destination),
    }
}

pub fn create_test_partnership(
    id: i64,
    card_program_id: CardProgramId,
    program_id: ProgramId,
    hours: u32,
    bonus: Option<(bool, &str)>,
) -> TransferPartnership {
    TransferPartnership {
        id: PartnershipId::new(id),
        card_program_id,
        program_id,
        transfer_ratio: TransferRatio::ONE,
        transfer_time_hours: hours,
        is_bonus_active: bonus.is_some_and(|(active, _)| active),
        bonus_ratio: bonus.map(|(_, ratio)| TransferRatio::from_str(ratio).unwrap()),
        bonus_expires_at: bonus.map(|_| String::from("2026-12-31")),
    }
}

/// Reference data for four programs serving New York, Tokyo and London.
///
/// ANA maps only EWR of the New York airports. Virgin Atlantic has an
/// own-metal chart but no routes.
pub fn create_test_snapshot() -> ReferenceSnapshot {
    use CabinClass::{Business, Economy, First};
    use PartnerType::{Any, OwnMetal, Partner};

    ReferenceSnapshot {
        airports: vec![
            create_test_airport(
                "EWR",
                "Newark Liberty International Airport",
                "Newark",
                Some("NYC"),
            ),
            create_test_airport("HND", "Tokyo Haneda Airport", "Tokyo", Some("TYO")),
            create_test_airport(
                "JFK",
                "John F. Kennedy International Airport",
                "New York",
                Some("NYC"),
            ),
            create_test_airport("LAX", "Los Angeles International Airport", "Los Angeles", None),
            create_test_airport("LGA", "LaGuardia Airport", "New York", Some("NYC")),
            create_test_airport("LHR", "London Heathrow Airport", "London", Some("LON")),
            create_test_airport("NRT", "Narita International Airport", "Tokyo", Some("TYO")),
        ],
        alliances: vec![
            Alliance {
                id: STAR,
                name: String::from("Star Alliance"),
                code: String::from("STAR"),
            },
            Alliance {
                id: ONEWORLD,
                name: String::from("oneworld"),
                code: String::from("OW"),
            },
        ],
        programs: vec![
            create_test_program(
                UNITED,
                "United MileagePlus",
                "UA",
                Some(STAR),
                Some("https://www.united.com/en/us/fsr/choose-flights?f={origin}&t={destination}&d={date}"),
            ),
            create_test_program(ANA, "ANA Mileage Club", "NH", Some(STAR), None),
            create_test_program(AMERICAN, "American AAdvantage", "AA", Some(ONEWORLD), None),
            create_test_program(VIRGIN, "Virgin Atlantic Flying Club", "VS", None, None),
        ],
        regions: vec![
            create_test_region(10, UNITED, "North America"),
            create_test_region(11, UNITED, "Japan"),
            create_test_region(12, UNITED, "Europe"),
            create_test_region(20, ANA, "North America"),
            create_test_region(21, ANA, "Asia 2"),
            create_test_region(22, ANA, "Europe"),
            create_test_region(30, AMERICAN, "Continental US"),
            create_test_region(31, AMERICAN, "Asia Region 1"),
            create_test_region(40, VIRGIN, "USA"),
            create_test_region(41, VIRGIN, "Japan"),
        ],
        region_mappings: vec![
            create_test_mapping("JFK", 10, UNITED),
            create_test_mapping("EWR", 10, UNITED),
            create_test_mapping("LGA", 10, UNITED),
            create_test_mapping("LAX", 10, UNITED),
            create_test_mapping("NRT", 11, UNITED),
            create_test_mapping("HND", 11, UNITED),
            create_test_mapping("LHR", 12, UNITED),
            create_test_mapping("EWR", 20, ANA),
            create_test_mapping("NRT", 21, ANA),
            create_test_mapping("LHR", 22, ANA),
            create_test_mapping("JFK", 30, AMERICAN),
            create_test_mapping("LAX", 30, AMERICAN),
            create_test_mapping("NRT", 31, AMERICAN),
            create_test_mapping("JFK", 40, VIRGIN),
            create_test_mapping("NRT", 41, VIRGIN),
        ],
        award_charts: vec![
            create_test_chart(1, UNITED, 10, 11, Economy, Any, 35_000, 35_000),
            create_test_chart(2, UNITED, 10, 11, Business, Partner, 88_000, 88_000),
            create_test_chart(3, UNITED, 10, 11, Business, Partner, 99_000, 99_000),
            create_test_chart(4, UNITED, 10, 11, First, Any, 75_000, 75_000),
            create_test_chart(5, UNITED, 10, 12, Economy, OwnMetal, 30_000, 30_000),
            create_test_chart(6, ANA, 20, 21, Economy, Partner, 60_000, 60_000),
            create_test_chart(7, ANA, 20, 22, Economy, Any, 55_000, 55_000),
            create_test_chart(8, AMERICAN, 30, 31, Economy, Any, 60_000, 80_000),
            create_test_chart(9, VIRGIN, 40, 41, Economy, OwnMetal, 40_000, 40_000),
        ],
        routes: vec![
            create_test_route(UNITED, "JFK", "NRT"),
            create_test_route(ANA, "EWR", "NRT"),
            create_test_route(ANA, "JFK", "LHR"),
            create_test_route(AMERICAN, "JFK", "NRT"),
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
            CreditCardProgram {
                id: CAPITAL_ONE,
                name: String::from("Capital One Miles"),
                code: String::from("C1"),
            },
        ],
        partnerships: vec![
            create_test_partnership(1, CHASE, UNITED, 0, None),
            create_test_partnership(2, AMEX, ANA, 48, None),
            create_test_partnership(3, CAPITAL_ONE, UNITED, 24, Some((true, "1.3"))),
            create_test_partnership(4, CHASE, VIRGIN, 24, Some((false, "1.3"))),
            create_test_partnership(5, AMEX, AMERICAN, 72, None),
        ],
    }
}

pub fn create_test_catalog() -> Catalog {
    Catalog::from_snapshot(create_test_snapshot())
}

pub fn create_test_query(
    origin: &str,
    destination: &str,
    cabin_class: CabinClass,
    cards: &[&str],
) -> SearchQuery {
    SearchQuery {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cabin_class,
        enabled_card_codes: cards.iter().map(|c| (*c).to_string()).collect(),
    }
}

/// A source whose airport table cannot be read.
pub struct FailingSource;

impl ReferenceSource for FailingSource {
    fn list_airports(&mut self) -> Result<Vec<Airport>, SourceError> {
        Err(SourceError::Unavailable(String::from("connection refused")))
    }

    fn list_alliances(&mut self) -> Result<Vec<Alliance>, SourceError> {
        Ok(Vec::new())
    }

    fn list_airline_programs(&mut self) -> Result<Vec<AirlineProgram>, SourceError> {
        Ok(Vec::new())
    }

    fn list_regions(&mut self) -> Result<Vec<Region>, SourceError> {
        Ok(Vec::new())
    }

    fn list_region_mappings(&mut self) -> Result<Vec<AirportRegionMapping>, SourceError> {
        Ok(Vec::new())
    }

    fn list_award_charts(&mut self) -> Result<Vec<AwardChart>, SourceError> {
        Ok(Vec::new())
    }

    fn list_routes(&mut self) -> Result<Vec<AirlineRoute>, SourceError> {
        Ok(Vec::new())
    }

    fn list_card_programs(&mut self) -> Result<Vec<CreditCardProgram>, SourceError> {
        Ok(Vec::new())
    }

    fn list_partnerships(&mut self) -> Result<Vec<TransferPartnership>, SourceError> {
        Ok(Vec::new())
    }
}
