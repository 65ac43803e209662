// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::str::FromStr;

use crate::diesel_schema::{credit_card_programs, transfer_partnerships};
use crate::error::PersistenceError;
use crate::queries::to_count;
use award_finder_domain::{
    CardProgramId, CreditCardProgram, PartnershipId, ProgramId, TransferPartnership,
    TransferRatio,
};

const TABLE: &str = "transfer_partnerships";

#[derive(Queryable, Selectable)]
#[diesel(table_name = credit_card_programs)]
struct CardProgramRow {
    card_program_id: i64,
    name: String,
    code: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = transfer_partnerships)]
struct PartnershipRow {
    partnership_id: i64,
    card_program_id: i64,
    program_id: i64,
    transfer_ratio: String,
    transfer_time_hours: i32,
    is_bonus_active: i32,
    bonus_ratio: Option<String>,
    bonus_expires_at: Option<String>,
}

fn parse_ratio(value: &str) -> Result<TransferRatio, PersistenceError> {
    TransferRatio::from_str(value).map_err(|e| PersistenceError::malformed(TABLE, &e))
}

impl TryFrom<PartnershipRow> for TransferPartnership {
    type Error = PersistenceError;

    fn try_from(row: PartnershipRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PartnershipId::new(row.partnership_id),
            card_program_id: CardProgramId::new(row.card_program_id),
            program_id: ProgramId::new(row.program_id),
            transfer_ratio: parse_ratio(&row.transfer_ratio)?,
            transfer_time_hours: to_count(TABLE, "transfer_time_hours", row.transfer_time_hours)?,
            is_bonus_active: row.is_bonus_active != 0,
            bonus_ratio: row.bonus_ratio.as_deref().map(parse_ratio).transpose()?,
            bonus_expires_at: row.bonus_expires_at,
        })
    }
}

/// Lists all credit card programs ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_card_programs(
    conn: &mut SqliteConnection,
) -> Result<Vec<CreditCardProgram>, PersistenceError> {
    let rows: Vec<CardProgramRow> = credit_card_programs::table
        .order(credit_card_programs::card_program_id.asc())
        .select(CardProgramRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| CreditCardProgram {
            id: CardProgramId::new(row.card_program_id),
            name: row.name,
            code: row.code,
        })
        .collect())
}

/// Lists all transfer partnerships ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails or a row carries an unparseable
/// ratio or a negative transfer time.
pub fn list_partnerships(
    conn: &mut SqliteConnection,
) -> Result<Vec<TransferPartnership>, PersistenceError> {
    let rows: Vec<PartnershipRow> = transfer_partnerships::table
        .order(transfer_partnerships::partnership_id.asc())
        .select(PartnershipRow::as_select())
        .load(conn)?;

    rows.into_iter().map(TransferPartnership::try_from).collect()
}
