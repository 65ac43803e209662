// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alliances, airline programs and the program-owned region taxonomy and
//! route tables.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::str::FromStr;

use crate::diesel_schema::{
    airline_programs, airline_routes, airport_region_mappings, alliances, regions,
};
use crate::error::PersistenceError;
use award_finder_domain::{
    AirlineProgram, AirlineRoute, AirportCode, AirportRegionMapping, Alliance, AllianceId,
    PricingModel, ProgramId, Region, RegionId,
};

#[derive(Queryable, Selectable)]
#[diesel(table_name = alliances)]
struct AllianceRow {
    alliance_id: i64,
    name: String,
    code: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = airline_programs)]
struct ProgramRow {
    program_id: i64,
    name: String,
    code: String,
    alliance_id: Option<i64>,
    has_dynamic_pricing: i32,
    pricing_model: String,
    search_url_template: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = regions)]
struct RegionRow {
    region_id: i64,
    program_id: i64,
    name: String,
    code: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = airport_region_mappings)]
struct MappingRow {
    airport_code: String,
    region_id: i64,
    program_id: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = airline_routes)]
struct RouteRow {
    program_id: i64,
    origin_airport_code: String,
    destination_airport_code: String,
}

/// Lists all alliances ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_alliances(conn: &mut SqliteConnection) -> Result<Vec<Alliance>, PersistenceError> {
    let rows: Vec<AllianceRow> = alliances::table
        .order(alliances::alliance_id.asc())
        .select(AllianceRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| Alliance {
            id: AllianceId::new(row.alliance_id),
            name: row.name,
            code: row.code,
        })
        .collect())
}

/// Lists all airline programs ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails or a row carries an unknown pricing
/// model.
pub fn list_airline_programs(
    conn: &mut SqliteConnection,
) -> Result<Vec<AirlineProgram>, PersistenceError> {
    let rows: Vec<ProgramRow> = airline_programs::table
        .order(airline_programs::program_id.asc())
        .select(ProgramRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let pricing_model: PricingModel = PricingModel::from_str(&row.pricing_model)
                .map_err(|e| PersistenceError::malformed("airline_programs", &e))?;
            Ok(AirlineProgram {
                id: ProgramId::new(row.program_id),
                name: row.name,
                code: row.code,
                alliance_id: row.alliance_id.map(AllianceId::new),
                has_dynamic_pricing: row.has_dynamic_pricing != 0,
                pricing_model,
                search_url_template: row.search_url_template.filter(|t| !t.is_empty()),
            })
        })
        .collect()
}

/// Lists all regions ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_regions(conn: &mut SqliteConnection) -> Result<Vec<Region>, PersistenceError> {
    let rows: Vec<RegionRow> = regions::table
        .order(regions::region_id.asc())
        .select(RegionRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| Region {
            id: RegionId::new(row.region_id),
            program_id: ProgramId::new(row.program_id),
            name: row.name,
            code: row.code,
        })
        .collect())
}

/// Lists all airport to region mappings ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_region_mappings(
    conn: &mut SqliteConnection,
) -> Result<Vec<AirportRegionMapping>, PersistenceError> {
    let rows: Vec<MappingRow> = airport_region_mappings::table
        .order(airport_region_mappings::mapping_id.asc())
        .select(MappingRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| AirportRegionMapping {
            airport_code: AirportCode::new(&row.airport_code),
            region_id: RegionId::new(row.region_id),
            program_id: ProgramId::new(row.program_id),
        })
        .collect())
}

/// Lists all directed routes ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_routes(conn: &mut SqliteConnection) -> Result<Vec<AirlineRoute>, PersistenceError> {
    let rows: Vec<RouteRow> = airline_routes::table
        .order(airline_routes::route_id.asc())
        .select(RouteRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| AirlineRoute {
            program_id: ProgramId::new(row.program_id),
            origin: AirportCode::new(&row.origin_airport_code),
            destination: AirportCode::new(&row.destination_airport_code),
        })
        .collect())
}
