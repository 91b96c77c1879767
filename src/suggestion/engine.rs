//! Suggestion engine entry point
//!
//! `suggest` is a pure, total function: it reads nothing but its arguments,
//! never fails, and degrades to a low-confidence passthrough when no rule
//! matches the field.

use super::rules::{self, DescriptionInput, RuleOutcome, SubjectInput};
use super::types::{next_suggestion_id, Confidence, FormContext, Suggestion};

/// Generate a suggestion for a form field
///
/// `field` is the field name as the form knows it; unknown names fall through
/// to a passthrough suggestion at low confidence. Empty values are the
/// caller's responsibility to filter — the engine still handles them, but the
/// result is a generic inquiry rather than anything useful.
pub fn suggest(field: &str, current_value: &str, context: &FormContext) -> Suggestion {
    let (rule, outcome) = match field {
        "subject" => {
            let input = SubjectInput::new(current_value, context.description.as_deref());
            rules::evaluate_subject(&input)
        }
        "description" => {
            let input = DescriptionInput::new(current_value, context.subject.as_deref());
            rules::evaluate_description(&input)
        }
        _ => (
            "unknown-field",
            RuleOutcome {
                text: current_value.to_string(),
                confidence: Confidence::Low,
                explanation: "No specific suggestion available for this field.".to_string(),
            },
        ),
    };

    log::debug!("suggestion rule matched for {field}: {rule}");

    Suggestion {
        id: next_suggestion_id(),
        field: field.to_string(),
        suggested_text: outcome.text,
        confidence: outcome.confidence,
        explanation: outcome.explanation,
        original_text: current_value.to_string(),
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
