//! Core types for the suggestion engine

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Confidence tier attached to a generated suggestion
///
/// A coarse label reflecting rule certainty, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Get the display label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// A single generated suggestion for a form field
///
/// Immutable once produced. A re-request yields a fresh record with a new id;
/// existing suggestions are superseded, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Opaque token identifying this suggestion
    pub id: String,
    /// Field the suggestion applies to ("subject" or "description")
    pub field: String,
    /// The rewritten text
    pub suggested_text: String,
    pub confidence: Confidence,
    /// Why the rewrite was made, in user-facing language
    pub explanation: String,
    /// The text the user had entered when the suggestion was generated
    pub original_text: String,
}

/// Read-only snapshot of sibling form fields
///
/// Owned by the caller; the engine never stores or mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    pub subject: Option<String>,
    pub description: Option<String>,
}

impl FormContext {
    pub fn with_subject(subject: impl Into<String>) -> Self {
        FormContext {
            subject: Some(subject.into()),
            ..Default::default()
        }
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        FormContext {
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

/// Generate an opaque suggestion id
///
/// Timestamp plus a process-local counter, so concurrent requests in the same
/// millisecond still get distinct ids.
pub(crate) fn next_suggestion_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("suggestion_{}_{}", chrono::Utc::now().timestamp_millis(), seq)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
