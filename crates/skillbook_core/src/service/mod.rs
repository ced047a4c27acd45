//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs for search,
//!   save and full-table load.
//! - Keep callers decoupled from which backend holds the table.

pub mod directory_service;
pub mod edit_session;
