// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::str::FromStr;

use crate::diesel_schema::award_charts;
use crate::error::PersistenceError;
use crate::queries::to_count;
use award_finder_domain::{AwardChart, CabinClass, ChartId, PartnerType, ProgramId, RegionId};

const TABLE: &str = "award_charts";

#[derive(Queryable, Selectable)]
#[diesel(table_name = award_charts)]
struct ChartRow {
    chart_id: i64,
    program_id: i64,
    origin_region_id: i64,
    destination_region_id: i64,
    cabin_class: String,
    partner_type: String,
    min_miles: i32,
    max_miles: i32,
    typical_miles: Option<i32>,
    is_one_way: i32,
    notes: Option<String>,
}

impl TryFrom<ChartRow> for AwardChart {
    type Error = PersistenceError;

    fn try_from(row: ChartRow) -> Result<Self, Self::Error> {
        let cabin_class: CabinClass = CabinClass::from_str(&row.cabin_class)
            .map_err(|e| PersistenceError::malformed(TABLE, &e))?;
        let partner_type: PartnerType = PartnerType::from_str(&row.partner_type)
            .map_err(|e| PersistenceError::malformed(TABLE, &e))?;

        Ok(Self {
            id: ChartId::new(row.chart_id),
            program_id: ProgramId::new(row.program_id),
            origin_region_id: RegionId::new(row.origin_region_id),
            destination_region_id: RegionId::new(row.destination_region_id),
            cabin_class,
            partner_type,
            min_miles: to_count(TABLE, "min_miles", row.min_miles)?,
            max_miles: to_count(TABLE, "max_miles", row.max_miles)?,
            typical_miles: row
                .typical_miles
                .map(|v| to_count(TABLE, "typical_miles", v))
                .transpose()?,
            is_one_way: row.is_one_way != 0,
            notes: row.notes,
        })
    }
}

/// Lists all award chart rows ordered by id.
///
/// Chart keys are not unique, so this order decides which duplicate row
/// prices a search.
///
/// # Errors
///
/// Returns an error if the query fails or a row carries an unknown cabin
/// class, an unknown partner type or a negative mileage.
pub fn list_award_charts(conn: &mut SqliteConnection) -> Result<Vec<AwardChart>, PersistenceError> {
    let rows: Vec<ChartRow> = award_charts::table
        .order(award_charts::chart_id.asc())
        .select(ChartRow::as_select())
        .load(conn)?;

    rows.into_iter().map(AwardChart::try_from).collect()
}
