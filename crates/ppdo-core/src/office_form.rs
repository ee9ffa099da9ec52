//! The "add office" form.
//!
//! ```text
//! Empty ──input──▶ Editing ──submit──▶ Validating ─┬─▶ Error   (stays open)
//!                     ▲                             └─▶ Success (closed)
//!                     └───────────input─────────────────┘ (from Error)
//! ```

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::models::Office;
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Editing,
    Validating,
    Error(String),
    Success,
}

#[derive(Debug, Clone)]
pub struct OfficeForm {
    code: String,
    name: String,
    state: FormState,
}

impl Default for OfficeForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            state: FormState::Empty,
        }
    }
}

impl OfficeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Success
    }

    /// The code is upper-cased as it is typed.
    pub fn set_code(&mut self, input: &str) {
        self.code = input.to_uppercase();
        self.state = FormState::Editing;
    }

    pub fn set_name(&mut self, input: &str) {
        self.name = input.to_string();
        self.state = FormState::Editing;
    }

    /// Validate and, on success, append the office to `store`.
    ///
    /// On failure the form stays open in [`FormState::Error`] with the
    /// message of the returned error.
    ///
    /// A form that already succeeded is closed; submitting it again is a
    /// no-op.
    pub fn submit(&mut self, store: &mut RecordStore<Office>, now: DateTime<Utc>) -> CoreResult<()> {
        if !self.is_open() {
            return Ok(());
        }
        self.state = FormState::Validating;
        match self.validate(store) {
            Ok(office) => {
                let office = Office {
                    created_at: Some(now),
                    ..office
                };
                info!(code = %office.code, "office added");
                store.insert(office)?;
                self.state = FormState::Success;
                Ok(())
            }
            Err(e) => {
                self.state = FormState::Error(e.to_string());
                Err(e)
            }
        }
    }

    fn validate(&self, store: &RecordStore<Office>) -> CoreResult<Office> {
        if self.code.trim().is_empty() || self.name.trim().is_empty() {
            return Err(CoreError::IncompleteOffice);
        }
        let office = Office::new(&self.code, &self.name);
        if store.get(&office.code).is_some() {
            return Err(CoreError::DuplicateId(office.code));
        }
        Ok(office)
    }
}
