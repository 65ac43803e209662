// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the award finder.
//!
//! This crate reads the seeded reference tables from `SQLite` through
//! Diesel and exposes them as a [`ReferenceSource`]. There is no write path.
//! Reference data is populated out-of-band by seeding tools that share the
//! embedded schema.
//!
//! ## Testing
//!
//! Tests run against isolated in-memory databases and insert fixture rows
//! with raw SQL. Every call to [`Persistence::new_in_memory`] gets its own
//! database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use award_finder::{ReferenceSource, SourceError};
use award_finder_domain::{
    AirlineProgram, AirlineRoute, Airport, AirportRegionMapping, Alliance, AwardChart,
    CreditCardProgram, Region, TransferPartnership,
};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod diesel_schema;
mod error;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Read-only adapter over the reference database.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over a new, empty in-memory database.
    ///
    /// The schema is applied but no reference rows exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_award_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a seeded `SQLite` file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    /// Returns the database journal mode, such as `wal` or `memory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the PRAGMA cannot be read.
    pub fn journal_mode(&mut self) -> Result<String, PersistenceError> {
        backend::sqlite::journal_mode(&mut self.conn)
    }

    /// Row counts of every reference table, for startup diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if a count query fails.
    pub fn table_counts(&mut self) -> Result<Vec<(&'static str, i64)>, PersistenceError> {
        self.conn.reference_table_counts()
    }
}

/// Reads run in primary key order, except airports which are ordered by
/// code. Failures surface to the engine as infrastructure errors.
impl ReferenceSource for Persistence {
    fn list_airports(&mut self) -> Result<Vec<Airport>, SourceError> {
        Ok(queries::airports::list_airports(&mut self.conn)?)
    }

    fn list_alliances(&mut self) -> Result<Vec<Alliance>, SourceError> {
        Ok(queries::programs::list_alliances(&mut self.conn)?)
    }

    fn list_airline_programs(&mut self) -> Result<Vec<AirlineProgram>, SourceError> {
        Ok(queries::programs::list_airline_programs(&mut self.conn)?)
    }

    fn list_regions(&mut self) -> Result<Vec<Region>, SourceError> {
        Ok(queries::programs::list_regions(&mut self.conn)?)
    }

    fn list_region_mappings(&mut self) -> Result<Vec<AirportRegionMapping>, SourceError> {
        Ok(queries::programs::list_region_mappings(&mut self.conn)?)
    }

    fn list_award_charts(&mut self) -> Result<Vec<AwardChart>, SourceError> {
        Ok(queries::charts::list_award_charts(&mut self.conn)?)
    }

    fn list_routes(&mut self) -> Result<Vec<AirlineRoute>, SourceError> {
        Ok(queries::programs::list_routes(&mut self.conn)?)
    }

    fn list_card_programs(&mut self) -> Result<Vec<CreditCardProgram>, SourceError> {
        Ok(queries::transfers::list_card_programs(&mut self.conn)?)
    }

    fn list_partnerships(&mut self) -> Result<Vec<TransferPartnership>, SourceError> {
        Ok(queries::transfers::list_partnerships(&mut self.conn)?)
    }
}
