//! Core domain logic for the skillbook employee directory.
//! This crate is the single source of truth for the record store
//! contract shared by the file and relational backends.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{EmployeeRecord, EmployeeValidationError, SKILL_SLOTS};
pub use repo::employee_repo::SqliteEmployeeRepository;
pub use repo::file_repo::JsonTableEmployeeRepository;
pub use repo::{EmployeeRepository, RepoError, RepoResult, UpsertOutcome};
pub use service::directory_service::{EmployeeDirectoryService, StoreNotice};
pub use service::edit_session::EditSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
