//! Domain model for the employee skill directory.
//!
//! # Responsibility
//! - Define the canonical employee record shared by every backend.
//! - Keep one tabular shape so file and relational storage stay
//!   interchangeable.
//!
//! # Invariants
//! - Every record is keyed by an integer `employee_id`.
//! - Records are never deleted; an upsert with an existing key replaces
//!   the row in place.

pub mod employee;
