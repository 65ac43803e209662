// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Every connection gets foreign key enforcement and the embedded schema
//! before any reference data is read. PRAGMA statements are raw SQL since
//! Diesel has no DSL for them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Reference table migrations, embedded at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct ForeignKeysRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModeRow {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Arguments
///
/// * `conn` - The database connection to check
///
/// # Errors
///
/// Returns an error if the PRAGMA cannot be read or enforcement is off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: ForeignKeysRow = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if row.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Returns the connection's journal mode, lowercased.
///
/// # Errors
///
/// Returns an error if the PRAGMA cannot be read.
pub fn journal_mode(conn: &mut SqliteConnection) -> Result<String, PersistenceError> {
    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode").get_result(conn)?;
    Ok(row.journal_mode.to_ascii_lowercase())
}

/// Opens `database_url`, enables foreign keys and applies pending
/// migrations.
///
/// # Arguments
///
/// * `database_url` - A file path or `SQLite` URI
///
/// # Errors
///
/// Returns an error if the connection, the PRAGMA or a migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening SQLite reference database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "Applied reference schema migrations");
    }

    Ok(conn)
}

/// Switches a file-backed database to write-ahead logging.
///
/// Seeding tools may write to the file while the server reads it.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
