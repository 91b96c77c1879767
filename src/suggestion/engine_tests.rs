//! Tests for the suggestion engine entry point

use super::*;
use crate::suggestion::types::{Confidence, FormContext};

fn ctx(subject: Option<&str>, description: Option<&str>) -> FormContext {
    FormContext {
        subject: subject.map(String::from),
        description: description.map(String::from),
    }
}

#[test]
fn test_vague_subject_infers_login_issue_from_description() {
    let suggestion = suggest("subject", "help", &ctx(None, Some("I forgot my password")));

    assert_eq!(suggestion.suggested_text, "Unable to access account");
    assert_eq!(suggestion.confidence, Confidence::High);
    assert_eq!(suggestion.original_text, "help");
    assert_eq!(suggestion.field, "subject");
}

#[test]
fn test_vague_subject_infers_billing_issue_from_description() {
    let suggestion = suggest(
        "subject",
        "problem",
        &ctx(None, Some("There is an unexpected charge on my card")),
    );

    assert_eq!(suggestion.suggested_text, "Billing inquiry - unexpected charge");
    assert_eq!(suggestion.confidence, Confidence::High);
}

#[test]
fn test_vague_subject_infers_technical_issue_at_medium_confidence() {
    let suggestion = suggest(
        "subject",
        "issue",
        &ctx(None, Some("the app shows a weird bug on startup")),
    );

    assert_eq!(
        suggestion.suggested_text,
        "Technical error - application malfunction"
    );
    assert_eq!(suggestion.confidence, Confidence::Medium);
}

#[test]
fn test_vague_subject_without_description_is_general_inquiry() {
    let suggestion = suggest("subject", "help", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "General inquiry");
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_short_but_specific_subject_without_description() {
    let suggestion = suggest("subject", "slow app", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "Support request: slow app");
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_vague_subject_with_unmatched_description_keeps_value() {
    let suggestion = suggest(
        "subject",
        "slow app",
        &ctx(None, Some("everything takes forever to load these days")),
    );

    assert_eq!(suggestion.suggested_text, "Support needed: slow app");
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_vague_word_with_unmatched_description_is_general_support_inquiry() {
    let suggestion = suggest(
        "subject",
        "help",
        &ctx(None, Some("something is off but I am not sure what")),
    );

    assert_eq!(suggestion.suggested_text, "General support inquiry");
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_informal_negations_are_formalized() {
    let suggestion = suggest("subject", "Cant log into my account", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "cannot log into my account");
    assert_eq!(suggestion.confidence, Confidence::High);
}

#[test]
fn test_wont_becomes_will_not() {
    let suggestion = suggest("subject", "App wont start after update", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "App will not start after update");
    assert_eq!(suggestion.confidence, Confidence::High);
}

#[test]
fn test_uncapitalized_subject_is_capitalized() {
    let suggestion = suggest("subject", "missing invoice for march", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "Missing invoice for march");
    assert_eq!(suggestion.confidence, Confidence::High);
}

#[test]
fn test_clean_subject_passes_through_at_medium_confidence() {
    let suggestion = suggest("subject", "Order arrived damaged", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "Order arrived damaged");
    assert_eq!(suggestion.confidence, Confidence::Medium);
    assert!(suggestion.explanation.contains("clarity"));
}

#[test]
fn test_short_description_gets_prompt_block() {
    let suggestion = suggest("description", "crash", &ctx(Some("app crashing"), None));

    assert_eq!(suggestion.confidence, Confidence::Low);
    assert!(suggestion.suggested_text.starts_with("crash"));
    assert!(suggestion.suggested_text.contains("more details"));
}

#[test]
fn test_short_description_with_login_subject_gets_login_checklist() {
    let suggestion = suggest("description", "it broke", &ctx(Some("Login problems"), None));

    assert!(suggestion.suggested_text.contains("What error message appears?"));
    assert!(suggestion.suggested_text.contains("Which browser are you using?"));
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_short_description_with_billing_subject_gets_billing_checklist() {
    let suggestion = suggest(
        "description",
        "wrong amount",
        &ctx(Some("billing question"), None),
    );

    assert!(suggestion.suggested_text.contains("Transaction date and amount"));
}

#[test]
fn test_short_description_without_subject_gets_no_checklist() {
    let suggestion = suggest("description", "it broke", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "it broke");
    assert_eq!(suggestion.confidence, Confidence::Low);
}

#[test]
fn test_long_description_missing_details_gets_consolidated_prompt() {
    let suggestion = suggest(
        "description",
        "The app crashes every time I open the settings page",
        &ctx(None, None),
    );

    assert_eq!(suggestion.confidence, Confidence::Medium);
    assert!(suggestion.suggested_text.contains("please also mention"));
    assert!(suggestion.suggested_text.contains("when the issue started"));
    assert!(suggestion.suggested_text.contains("any error messages you see"));
    assert!(suggestion
        .suggested_text
        .contains("what steps you've already tried"));
}

#[test]
fn test_complete_description_only_gets_reformatted() {
    let text = "The app started crashing since Tuesday.\n\n\nI tried reinstalling.\n  I see error code 500.  ";
    let suggestion = suggest("description", text, &ctx(None, None));

    assert_eq!(suggestion.confidence, Confidence::High);
    assert_eq!(
        suggestion.suggested_text,
        "The app started crashing since Tuesday.\n\nI tried reinstalling.\n\nI see error code 500."
    );
    assert!(suggestion.explanation.contains("formatting"));
}

#[test]
fn test_unknown_field_falls_through_to_passthrough() {
    let suggestion = suggest("email", "user@example.com", &ctx(None, None));

    assert_eq!(suggestion.suggested_text, "user@example.com");
    assert_eq!(suggestion.confidence, Confidence::Low);
    assert_eq!(suggestion.field, "email");
    assert!(suggestion.explanation.contains("No specific suggestion"));
}

#[test]
fn test_suggest_is_pure_apart_from_id() {
    let context = ctx(None, Some("I forgot my password"));
    let a = suggest("subject", "help", &context);
    let b = suggest("subject", "help", &context);

    assert_ne!(a.id, b.id);
    assert_eq!(a.suggested_text, b.suggested_text);
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.explanation, b.explanation);
    assert_eq!(a.original_text, b.original_text);
}

mod purity_properties {
    use super::*;
    use proptest::prelude::*;

    // For any field name, value, and context, two calls with identical inputs
    // must yield identical suggestions apart from the opaque id.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_suggest_is_deterministic(
            field in prop::sample::select(vec!["subject", "description", "email"]),
            value in ".{0,60}",
            subject in proptest::option::of(".{0,30}"),
            description in proptest::option::of(".{0,60}"),
        ) {
            let context = FormContext { subject, description };
            let a = suggest(field, &value, &context);
            let b = suggest(field, &value, &context);

            prop_assert_eq!(a.suggested_text, b.suggested_text);
            prop_assert_eq!(a.confidence, b.confidence);
            prop_assert_eq!(a.explanation, b.explanation);
            prop_assert_eq!(a.original_text, b.original_text);
        }

        // The engine is total: whatever the input, it produces a suggestion
        // that echoes the original text back.
        #[test]
        fn prop_suggest_never_loses_original(
            field in prop::sample::select(vec!["subject", "description"]),
            value in ".{0,60}",
        ) {
            let suggestion = suggest(field, &value, &FormContext::default());
            prop_assert_eq!(suggestion.original_text, value);
            prop_assert_eq!(suggestion.field, field);
        }
    }
}
