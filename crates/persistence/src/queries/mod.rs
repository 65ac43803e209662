// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data queries.
//!
//! Every query reads a whole table in a fixed order so that repeated loads
//! of unchanged data index identically. Airports are ordered by code and
//! every other table by primary key.

pub mod airports;
pub mod charts;
pub mod programs;
pub mod transfers;

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;

use crate::diesel_schema::{
    airline_programs, airline_routes, airport_region_mappings, airports as airports_table,
    alliances, award_charts, credit_card_programs, regions, transfer_partnerships,
};
use crate::error::PersistenceError;
use award_finder_domain::DomainError;

/// Converts a stored count column to `u32`.
pub fn to_count(
    table: &'static str,
    field: &'static str,
    value: i32,
) -> Result<u32, PersistenceError> {
    value.to_u32().ok_or_else(|| {
        PersistenceError::malformed(
            table,
            &DomainError::InvalidCount {
                field,
                value: i64::from(value),
            },
        )
    })
}

/// Row counts of every reference table.
///
/// # Errors
///
/// Returns an error if a count query fails.
pub fn table_counts(
    conn: &mut SqliteConnection,
) -> Result<Vec<(&'static str, i64)>, PersistenceError> {
    Ok(vec![
        ("alliances", alliances::table.count().get_result::<i64>(conn)?),
        (
            "airline_programs",
            airline_programs::table.count().get_result::<i64>(conn)?,
        ),
        (
            "credit_card_programs",
            credit_card_programs::table.count().get_result::<i64>(conn)?,
        ),
        (
            "transfer_partnerships",
            transfer_partnerships::table.count().get_result::<i64>(conn)?,
        ),
        ("regions", regions::table.count().get_result::<i64>(conn)?),
        ("airports", airports_table::table.count().get_result::<i64>(conn)?),
        (
            "airport_region_mappings",
            airport_region_mappings::table.count().get_result::<i64>(conn)?,
        ),
        ("airline_routes", airline_routes::table.count().get_result::<i64>(conn)?),
        ("award_charts", award_charts::table.count().get_result::<i64>(conn)?),
    ])
}
