// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations and PRAGMA handling cannot be expressed in
//! Diesel DSL and are isolated here.

pub mod sqlite;

use diesel::{Connection, SqliteConnection};

use crate::error::PersistenceError;

/// Backend-specific checks that run against an open connection.
pub trait PersistenceBackend: Connection {
    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Counts the rows of every reference table, in a fixed table order.
    ///
    /// # Errors
    ///
    /// Returns an error if a count query fails.
    fn reference_table_counts(&mut self) -> Result<Vec<(&'static str, i64)>, PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn reference_table_counts(&mut self) -> Result<Vec<(&'static str, i64)>, PersistenceError> {
        crate::queries::table_counts(self)
    }
}
