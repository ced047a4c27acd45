//! Employee directory use-case service.
//!
//! # Responsibility
//! - Provide stable search/save/load entry points over any store.
//! - Degrade read failures into an empty view plus a user-visible
//!   notice instead of propagating a fatal error.
//!
//! # Invariants
//! - Service APIs never bypass store validation contracts.
//! - A failed save applies no change; the error reaches the caller.
//! - `load_or_empty` never returns an error.

use crate::model::employee::EmployeeRecord;
use crate::repo::{EmployeeRepository, RepoResult, UpsertOutcome};
use log::{error, info};

/// User-visible message produced when the backing store misbehaves.
///
/// Carries the text an interactive front end would display in place of
/// the failed operation's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNotice {
    pub message: String,
}

/// Use-case service wrapper over an employee store.
pub struct EmployeeDirectoryService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeDirectoryService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Exact key search. Non-positive ids resolve to `Ok(None)`
    /// without touching the backend.
    pub fn search(&self, employee_id: i64) -> RepoResult<Option<EmployeeRecord>> {
        self.repo.find_by_id(employee_id)
    }

    /// Key existence probe, same guard semantics as [`Self::search`].
    pub fn exists(&self, employee_id: i64) -> RepoResult<bool> {
        self.repo.exists(employee_id)
    }

    /// Saves a record, inserting or replacing by key.
    ///
    /// The returned outcome distinguishes a fresh insert from an
    /// in-place update so the caller can confirm accordingly.
    pub fn save(&mut self, record: &EmployeeRecord) -> RepoResult<UpsertOutcome> {
        match self.repo.upsert(record) {
            Ok(outcome) => {
                info!(
                    "event=employee_save module=service status=ok outcome={} employee_id={}",
                    match outcome {
                        UpsertOutcome::Inserted => "inserted",
                        UpsertOutcome::Updated => "updated",
                    },
                    record.employee_id
                );
                Ok(outcome)
            }
            Err(err) => {
                error!(
                    "event=employee_save module=service status=error employee_id={} error={}",
                    record.employee_id, err
                );
                Err(err)
            }
        }
    }

    /// Loads the full table, strict variant.
    pub fn load(&self) -> RepoResult<Vec<EmployeeRecord>> {
        self.repo.load()
    }

    /// Loads the full table, degrading any store error to an empty
    /// collection plus a notice for the user.
    ///
    /// The worst outcome of a broken backend is a stale or empty view
    /// until the backend is fixed externally; the process never dies
    /// over it.
    pub fn load_or_empty(&self) -> (Vec<EmployeeRecord>, Option<StoreNotice>) {
        match self.repo.load() {
            Ok(records) => (records, None),
            Err(err) => {
                error!(
                    "event=employee_load module=service status=error error={}",
                    err
                );
                let notice = StoreNotice {
                    message: format!("Error loading data: {err}"),
                };
                (Vec::new(), Some(notice))
            }
        }
    }
}
