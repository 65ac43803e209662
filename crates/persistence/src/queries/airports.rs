// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::airports;
use crate::error::PersistenceError;
use award_finder_domain::{Airport, AirportCode};

const TABLE: &str = "airports";

#[derive(Queryable, Selectable)]
#[diesel(table_name = airports)]
struct AirportRow {
    code: String,
    name: String,
    city: String,
    country: String,
    country_code: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    metro: Option<String>,
}

impl TryFrom<AirportRow> for Airport {
    type Error = PersistenceError;

    fn try_from(row: AirportRow) -> Result<Self, Self::Error> {
        let code: AirportCode =
            AirportCode::parse(&row.code).map_err(|e| PersistenceError::malformed(TABLE, &e))?;
        let metro: Option<AirportCode> = row
            .metro
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .map(AirportCode::parse)
            .transpose()
            .map_err(|e| PersistenceError::malformed(TABLE, &e))?;

        Ok(Self {
            code,
            name: row.name,
            city: row.city,
            country: row.country,
            country_code: row.country_code,
            lat: row.lat,
            lng: row.lng,
            metro,
        })
    }
}

/// Lists all airports ordered by code.
///
/// # Errors
///
/// Returns an error if the query fails or a row carries an invalid code.
pub fn list_airports(conn: &mut SqliteConnection) -> Result<Vec<Airport>, PersistenceError> {
    let rows: Vec<AirportRow> = airports::table
        .order(airports::code.asc())
        .select(AirportRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded airports");
    rows.into_iter().map(Airport::try_from).collect()
}
