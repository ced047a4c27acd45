//! Schema bootstrap for the employees table.
//!
//! # Responsibility
//! - Create the employees table before any read or write.
//! - Track the applied schema via `PRAGMA user_version` so a database
//!   written by a newer binary is refused instead of misread.
//!
//! # Invariants
//! - `user_version` equals [`latest_version`] after a successful apply.
//! - The table creation and version bump commit in one transaction.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const EMPLOYEES_SCHEMA_SQL: &str = include_str!("0001_employees.sql");

/// Returns the schema version this binary writes and expects.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Brings the connection's schema up to [`latest_version`].
///
/// A fresh database gets the employees table; an up-to-date database
/// is left untouched.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the database was
///   written by a newer binary.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(EMPLOYEES_SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
