//! Request-scoped form editing context.
//!
//! # Responsibility
//! - Hold in-progress form values and the last search hit for one
//!   interactive session.
//! - Replace ambient process-wide session state with an explicit value
//!   the caller owns and passes into each handler.
//!
//! # Invariants
//! - Clearing the form resets the draft to empty defaults and drops
//!   the remembered search hit.
//! - `begin_edit` only changes the draft when a search hit exists.

use crate::model::employee::EmployeeRecord;

/// One user's in-flight editing state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    draft: EmployeeRecord,
    last_search: Option<EmployeeRecord>,
}

impl EditSession {
    /// Starts a session with an empty draft and no search hit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form values.
    pub fn draft(&self) -> &EmployeeRecord {
        &self.draft
    }

    /// Mutable access for field-by-field form edits.
    pub fn draft_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.draft
    }

    /// Last successful search result, if any.
    pub fn last_search(&self) -> Option<&EmployeeRecord> {
        self.last_search.as_ref()
    }

    /// Remembers a search outcome. `None` forgets the previous hit,
    /// matching a search that found nothing.
    pub fn record_search(&mut self, result: Option<EmployeeRecord>) {
        self.last_search = result;
    }

    /// Copies the last search hit into the draft for editing.
    ///
    /// Returns `false` and leaves the draft untouched when there is no
    /// hit to edit.
    pub fn begin_edit(&mut self) -> bool {
        match &self.last_search {
            Some(record) => {
                self.draft = record.clone();
                true
            }
            None => false,
        }
    }

    /// Resets the form to empty defaults and forgets the search hit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
