//! Record store abstraction and persistence implementations.
//!
//! # Responsibility
//! - Define the keyed employee store contract shared by the tabular
//!   file backend and the relational backend.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - Store writes must pass `EmployeeRecord::validate()` before any
//!   backend mutation.
//! - Key lookups with a non-positive id are answered without touching
//!   the backend.
//! - At most one row per `employee_id`; upsert replaces in place or
//!   appends, never duplicates.

use crate::db::DbError;
use crate::model::employee::{EmployeeRecord, EmployeeValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod employee_repo;
pub mod file_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Result tag for a keyed save, so callers can surface the right
/// confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A fresh key: the record was appended.
    Inserted,
    /// An existing key: all attributes were replaced in place.
    Updated,
}

/// Store error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Record failed validation before any backend work.
    Validation(EmployeeValidationError),
    /// Relational backend transport or bootstrap failure.
    Db(DbError),
    /// File backend I/O failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted data could not be decoded into employee rows.
    Corrupt(String),
    /// Connection handed to the repository has no applied schema.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "table file I/O error at `{}`: {source}", path.display())
            }
            Self::Corrupt(message) => write!(f, "corrupt employee table: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via skillbook_core::db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Corrupt(_) => None,
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Keyed employee store contract shared by both backends.
///
/// Both backends expose the same logical shape: an ordered collection
/// of equal-width rows keyed by `employee_id`.
pub trait EmployeeRepository {
    /// Reads all rows in stable order. A missing backing store (no
    /// file yet, freshly created table) yields an empty collection.
    fn load(&self) -> RepoResult<Vec<EmployeeRecord>>;

    /// Exact key lookup. Non-positive ids resolve to `Ok(None)` before
    /// any backend query.
    fn find_by_id(&self, employee_id: i64) -> RepoResult<Option<EmployeeRecord>>;

    /// Key existence probe. Non-positive ids resolve to `Ok(false)`
    /// before any backend query.
    fn exists(&self, employee_id: i64) -> RepoResult<bool>;

    /// Insert-or-update keyed by `employee_id`. The write is flushed
    /// to the backend before this returns; on error no change is
    /// applied.
    fn upsert(&mut self, record: &EmployeeRecord) -> RepoResult<UpsertOutcome>;
}
