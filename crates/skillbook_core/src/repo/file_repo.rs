//! Flat-file employee store implementation.
//!
//! # Responsibility
//! - Map the store contract onto a single JSON table file: one array,
//!   one object per row, every attribute column written out.
//! - Rewrite the whole file on every save.
//!
//! # Invariants
//! - A missing file is first-run empty state, never an error.
//! - Saves land in a sibling temp file first and are renamed over the
//!   table, so a failed write never exposes a partial table.
//! - Rows keep their append order across rewrites.

use crate::model::employee::EmployeeRecord;
use crate::repo::{EmployeeRepository, RepoError, RepoResult, UpsertOutcome};
use log::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// JSON-table-file employee store.
///
/// The store is stateless over its path: every operation reads the
/// current table from disk, matching the single-user read-then-write
/// model of the relational backend.
pub struct JsonTableEmployeeRepository {
    path: PathBuf,
}

impl JsonTableEmployeeRepository {
    /// Creates a store over the given table file path.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing table file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(RepoError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        // A zero-length file is an empty table, not corruption.
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|err| {
            RepoError::Corrupt(format!(
                "cannot decode `{}` as an employee table: {err}",
                self.path.display()
            ))
        })
    }

    fn rewrite(&self, rows: &[EmployeeRecord]) -> RepoResult<()> {
        let started_at = Instant::now();
        let json = serde_json::to_string_pretty(rows)
            .map_err(|err| RepoError::Corrupt(format!("cannot encode employee table: {err}")))?;

        let temp_path = self.path.with_extension("tmp");
        let io_err = |source: std::io::Error| RepoError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&temp_path).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);
        fs::rename(&temp_path, &self.path).map_err(io_err)?;

        info!(
            "event=table_rewrite module=repo status=ok rows={} duration_ms={}",
            rows.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

impl EmployeeRepository for JsonTableEmployeeRepository {
    fn load(&self) -> RepoResult<Vec<EmployeeRecord>> {
        self.read_rows()
    }

    fn find_by_id(&self, employee_id: i64) -> RepoResult<Option<EmployeeRecord>> {
        if employee_id <= 0 {
            return Ok(None);
        }

        let rows = self.read_rows()?;
        Ok(rows.into_iter().find(|row| row.employee_id == employee_id))
    }

    fn exists(&self, employee_id: i64) -> RepoResult<bool> {
        if employee_id <= 0 {
            return Ok(false);
        }

        let rows = self.read_rows()?;
        Ok(rows.iter().any(|row| row.employee_id == employee_id))
    }

    fn upsert(&mut self, record: &EmployeeRecord) -> RepoResult<UpsertOutcome> {
        record.validate()?;

        let mut rows = self.read_rows()?;
        let outcome = match rows
            .iter_mut()
            .find(|row| row.employee_id == record.employee_id)
        {
            Some(existing) => {
                *existing = record.clone();
                UpsertOutcome::Updated
            }
            None => {
                rows.push(record.clone());
                UpsertOutcome::Inserted
            }
        };

        self.rewrite(&rows)?;
        Ok(outcome)
    }
}
