//! Field change history with undo
//!
//! Every edit applied to the form - typed by the user or accepted from the
//! suggestion engine - is recorded here, so an accepted suggestion is never
//! a one-way door. Undo restores values last-in-first-out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AssistError;
use crate::suggestion::types::{FormContext, Suggestion};

/// Where a field change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    User,
    Ai,
}

/// One applied change to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
    pub timestamp: DateTime<Utc>,
    pub source: ChangeSource,
}

/// The support-ticket form the demos edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub subject: String,
    pub description: String,
}

impl ProfileForm {
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "subject" => Some(&self.subject),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: &str) -> bool {
        match field {
            "subject" => self.subject = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return false,
        }
        true
    }

    /// Sibling-field snapshot for the suggestion engine
    ///
    /// Empty fields are absent, matching how the engine distinguishes "no
    /// description yet" from "blank description".
    pub fn context(&self) -> FormContext {
        FormContext {
            subject: (!self.subject.trim().is_empty()).then(|| self.subject.clone()),
            description: (!self.description.trim().is_empty()).then(|| self.description.clone()),
        }
    }
}

/// Undo log for form edits
#[derive(Debug, Clone, Default)]
pub struct ChangeHistory {
    entries: Vec<FieldChange>,
}

impl ChangeHistory {
    pub fn new() -> Self {
        ChangeHistory::default()
    }

    /// Apply a new value to a form field, recording the change
    pub fn apply(
        &mut self,
        form: &mut ProfileForm,
        field: &str,
        new_value: &str,
        source: ChangeSource,
    ) -> Result<(), AssistError> {
        let old_value = form
            .get(field)
            .ok_or_else(|| AssistError::InvalidInput(format!("unknown form field: {field}")))?
            .to_string();

        form.set(field, new_value);
        self.entries.push(FieldChange {
            field: field.to_string(),
            old_value,
            new_value: new_value.to_string(),
            timestamp: Utc::now(),
            source,
        });
        Ok(())
    }

    /// Apply an accepted suggestion, recorded as an AI change
    pub fn apply_suggestion(
        &mut self,
        form: &mut ProfileForm,
        suggestion: &Suggestion,
    ) -> Result<(), AssistError> {
        self.apply(
            form,
            &suggestion.field,
            &suggestion.suggested_text,
            ChangeSource::Ai,
        )
    }

    /// Undo the most recent change, restoring the previous value
    ///
    /// Returns the undone change, or `None` when the history is empty.
    pub fn undo(&mut self, form: &mut ProfileForm) -> Option<FieldChange> {
        let change = self.entries.pop()?;
        form.set(&change.field, &change.old_value);
        log::debug!("undid {} change to {}", change.source_label(), change.field);
        Some(change)
    }

    pub fn entries(&self) -> &[FieldChange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FieldChange {
    fn source_label(&self) -> &'static str {
        match self.source {
            ChangeSource::User => "user",
            ChangeSource::Ai => "ai",
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
