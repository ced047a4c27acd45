//! Employee record model.
//!
//! # Responsibility
//! - Define the canonical row stored by both persistence backends.
//! - Provide the single validation rule gating search and save.
//!
//! # Invariants
//! - `employee_id > 0` is required for a record to be searchable or
//!   saveable; zero is the coerced placeholder for a missing key.
//! - All text attributes default to empty, never to null.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of free-text skill slots per employee.
pub const SKILL_SLOTS: usize = 10;

/// Canonical employee row: identity attributes plus ten skill slots.
///
/// The shape mirrors the tabular stores one-to-one: one field per
/// column, text columns defaulting to empty so rows written by an older
/// table layout still load. A missing or unparsable `employee_id`
/// column is coerced to `0` on load; such rows stay visible in a full
/// load but fail [`EmployeeRecord::validate`] and are unreachable by
/// key lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique key. Must be positive to be valid for search/save.
    #[serde(default)]
    pub employee_id: i64,
    /// Global career band label.
    #[serde(default)]
    pub career_band: String,
    #[serde(default)]
    pub bf_level_1: String,
    #[serde(default)]
    pub bf_level_2: String,
    #[serde(default)]
    pub bf_level_3: String,
    #[serde(default)]
    pub bf_level_4: String,
    #[serde(default)]
    pub bf_level_5: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub work_location: String,
    #[serde(default)]
    pub skill_1: String,
    #[serde(default)]
    pub skill_2: String,
    #[serde(default)]
    pub skill_3: String,
    #[serde(default)]
    pub skill_4: String,
    #[serde(default)]
    pub skill_5: String,
    #[serde(default)]
    pub skill_6: String,
    #[serde(default)]
    pub skill_7: String,
    #[serde(default)]
    pub skill_8: String,
    #[serde(default)]
    pub skill_9: String,
    #[serde(default)]
    pub skill_10: String,
}

impl EmployeeRecord {
    /// Creates a record with the given key and empty text attributes.
    pub fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            ..Self::default()
        }
    }

    /// Checks that this record is valid for search and save.
    ///
    /// # Errors
    /// - [`EmployeeValidationError::NonPositiveId`] when the key is not
    ///   a positive integer.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.employee_id <= 0 {
            return Err(EmployeeValidationError::NonPositiveId {
                employee_id: self.employee_id,
            });
        }
        Ok(())
    }

    /// Returns the ten skill slots in declaration order.
    pub fn skill_slots(&self) -> [&str; SKILL_SLOTS] {
        [
            &self.skill_1,
            &self.skill_2,
            &self.skill_3,
            &self.skill_4,
            &self.skill_5,
            &self.skill_6,
            &self.skill_7,
            &self.skill_8,
            &self.skill_9,
            &self.skill_10,
        ]
    }
}

/// Validation failure for an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// The key must be a positive integer to identify one row.
    NonPositiveId { employee_id: i64 },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId { employee_id } => write!(
                f,
                "employee_id must be a positive integer, got {employee_id}"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}
