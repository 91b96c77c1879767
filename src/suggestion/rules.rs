//! Rule tables for the suggestion heuristic
//!
//! Each field has an ordered list of `(name, rule_fn)` pairs evaluated
//! first-match-wins. The last rule in each table always matches, so
//! evaluation is total and the engine never fails.

use super::types::Confidence;

// =========================================================================
// Keyword sets
// =========================================================================

/// Subjects that carry no routable information on their own
const VAGUE_WORDS: &[&str] = &["help", "problem", "issue"];

const LOGIN_KEYWORDS: &[&str] = &["login", "password"];
const BILLING_KEYWORDS: &[&str] = &["payment", "billing", "charge"];
const TECHNICAL_KEYWORDS: &[&str] = &["error", "crash", "bug"];

const TEMPORAL_MARKERS: &[&str] = &["when", "started", "began", "since"];
const ERROR_MENTIONS: &[&str] = &["error", "message", "code"];
const FAILURE_LANGUAGE: &[&str] = &["crash", "fail"];
const REMEDIATION_LANGUAGE: &[&str] = &["tried", "attempted", "tested"];

/// Minimum subject length before it is considered specific enough
const MIN_SUBJECT_LEN: usize = 10;
/// Minimum description length before detail analysis kicks in
const MIN_DESCRIPTION_LEN: usize = 20;

// =========================================================================
// Rule inputs and outcomes
// =========================================================================

/// Pre-lowercased view of the subject field and its sibling description
pub(crate) struct SubjectInput<'a> {
    pub trimmed: &'a str,
    /// Lowercased full value
    pub lower: String,
    /// Lowercased sibling description, if the form has one
    pub description: Option<String>,
}

impl<'a> SubjectInput<'a> {
    pub fn new(value: &'a str, description: Option<&str>) -> Self {
        SubjectInput {
            trimmed: value.trim(),
            lower: value.to_lowercase(),
            description: description.map(|d| d.to_lowercase()),
        }
    }

    fn is_vague(&self) -> bool {
        self.trimmed.len() < MIN_SUBJECT_LEN || VAGUE_WORDS.contains(&self.lower.trim())
    }

    /// True when the value itself carries nothing worth echoing back
    fn is_contentless(&self) -> bool {
        self.trimmed.is_empty() || VAGUE_WORDS.contains(&self.lower.trim())
    }
}

/// Pre-lowercased view of the description field and its sibling subject
pub(crate) struct DescriptionInput<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    pub lower: String,
    /// Lowercased sibling subject, if the form has one
    pub subject: Option<String>,
}

impl<'a> DescriptionInput<'a> {
    pub fn new(value: &'a str, subject: Option<&str>) -> Self {
        DescriptionInput {
            raw: value,
            trimmed: value.trim(),
            lower: value.to_lowercase(),
            subject: subject.map(|s| s.to_lowercase()),
        }
    }
}

/// What a matched rule produces: the rewritten text plus its rationale
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleOutcome {
    pub text: String,
    pub confidence: Confidence,
    pub explanation: String,
}

type SubjectRule = fn(&SubjectInput<'_>) -> Option<RuleOutcome>;
type DescriptionRule = fn(&DescriptionInput<'_>) -> Option<RuleOutcome>;

// =========================================================================
// Subject rules
// =========================================================================

pub(crate) const SUBJECT_RULES: &[(&str, SubjectRule)] = &[
    ("vague-infer-login", vague_infer_login),
    ("vague-infer-billing", vague_infer_billing),
    ("vague-infer-technical", vague_infer_technical),
    ("vague-with-description", vague_with_description),
    ("vague-without-description", vague_without_description),
    ("informal-negation", informal_negation),
    ("capitalize-first", capitalize_first),
    ("passthrough", subject_passthrough),
];

/// Evaluate an ordered rule table, returning the first match
///
/// The caller guarantees the final rule is total, so this never returns
/// without an outcome.
pub(crate) fn evaluate_subject(input: &SubjectInput<'_>) -> (&'static str, RuleOutcome) {
    for &(name, rule) in SUBJECT_RULES {
        if let Some(outcome) = rule(input) {
            return (name, outcome);
        }
    }
    unreachable!("subject rule table ends with a total rule")
}

fn vague_infer_login(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    let desc = input.description.as_deref()?;
    if input.is_vague() && contains_any(desc, LOGIN_KEYWORDS) {
        return Some(RuleOutcome {
            text: "Unable to access account".to_string(),
            confidence: Confidence::High,
            explanation: "Detected login issue from description. Subject line clarified for \
                          faster support routing."
                .to_string(),
        });
    }
    None
}

fn vague_infer_billing(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    let desc = input.description.as_deref()?;
    if input.is_vague() && contains_any(desc, BILLING_KEYWORDS) {
        return Some(RuleOutcome {
            text: "Billing inquiry - unexpected charge".to_string(),
            confidence: Confidence::High,
            explanation: "Identified billing concern. Clear subject helps route to correct \
                          department."
                .to_string(),
        });
    }
    None
}

fn vague_infer_technical(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    let desc = input.description.as_deref()?;
    if input.is_vague() && contains_any(desc, TECHNICAL_KEYWORDS) {
        return Some(RuleOutcome {
            text: "Technical error - application malfunction".to_string(),
            confidence: Confidence::Medium,
            explanation: "Technical issue detected. Descriptive subject aids troubleshooting."
                .to_string(),
        });
    }
    None
}

/// Vague subject, description present but no keyword hit
fn vague_with_description(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    if input.description.is_none() || !input.is_vague() {
        return None;
    }
    let text = if input.is_contentless() {
        "General support inquiry".to_string()
    } else {
        format!("Support needed: {}", input.trimmed)
    };
    Some(RuleOutcome {
        text,
        confidence: Confidence::Low,
        explanation: "Subject was too vague. Added context, but please refine for better \
                      assistance."
            .to_string(),
    })
}

/// Vague subject and nothing else to infer from
fn vague_without_description(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    if !input.is_vague() {
        return None;
    }
    let text = if input.is_contentless() {
        "General inquiry".to_string()
    } else {
        format!("Support request: {}", input.trimmed)
    };
    Some(RuleOutcome {
        text,
        confidence: Confidence::Low,
        explanation: "Vague subject detected. Consider adding more details about your issue."
            .to_string(),
    })
}

fn informal_negation(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    if !input.lower.contains("cant") && !input.lower.contains("wont") {
        return None;
    }
    let text = replace_ignore_ascii_case(input.trimmed, "cant", "cannot");
    let text = replace_ignore_ascii_case(&text, "wont", "will not");
    Some(RuleOutcome {
        text,
        confidence: Confidence::High,
        explanation: "Formalized language for professional ticket.".to_string(),
    })
}

fn capitalize_first(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    let first = input.trimmed.chars().next()?;
    if !first.is_lowercase() {
        return None;
    }
    let mut text = first.to_uppercase().to_string();
    text.push_str(&input.trimmed[first.len_utf8()..]);
    Some(RuleOutcome {
        text,
        confidence: Confidence::High,
        explanation: "Capitalized subject line for proper formatting.".to_string(),
    })
}

fn subject_passthrough(input: &SubjectInput<'_>) -> Option<RuleOutcome> {
    Some(RuleOutcome {
        text: input.trimmed.to_string(),
        confidence: Confidence::Medium,
        explanation: "Improved subject line for clarity.".to_string(),
    })
}

// =========================================================================
// Description rules
// =========================================================================

pub(crate) const DESCRIPTION_RULES: &[(&str, DescriptionRule)] = &[
    ("too-brief", too_brief),
    ("missing-details", missing_details),
    ("reformat", reformat),
];

pub(crate) fn evaluate_description(input: &DescriptionInput<'_>) -> (&'static str, RuleOutcome) {
    for &(name, rule) in DESCRIPTION_RULES {
        if let Some(outcome) = rule(input) {
            return (name, outcome);
        }
    }
    unreachable!("description rule table ends with a total rule")
}

/// Too short to analyze; append a checklist chosen by the subject keywords
fn too_brief(input: &DescriptionInput<'_>) -> Option<RuleOutcome> {
    if input.raw.len() >= MIN_DESCRIPTION_LEN {
        return None;
    }

    let mut text = input.trimmed.to_string();
    if let Some(subject) = input.subject.as_deref() {
        if contains_any(subject, &["login", "access"]) {
            text.push_str(
                "\n\nPlease include:\n- What error message appears?\n- When did you last \
                 successfully log in?\n- Which browser are you using?",
            );
        } else if contains_any(subject, &["billing", "payment"]) {
            text.push_str(
                "\n\nPlease include:\n- Transaction date and amount\n- Last 4 digits of payment \
                 method\n- What you expected vs what happened",
            );
        } else {
            text.push_str("\n\nPlease provide more details about the issue.");
        }
    }

    Some(RuleOutcome {
        text,
        confidence: Confidence::Low,
        explanation: "Description is too brief. Consider adding: When did this start? What error \
                      messages do you see? What have you tried?"
            .to_string(),
    })
}

/// Long enough to analyze; look for narrative elements the support team needs
fn missing_details(input: &DescriptionInput<'_>) -> Option<RuleOutcome> {
    let lower = input.lower.as_str();
    let mut improvements: Vec<&str> = Vec::new();

    if !contains_any(lower, TEMPORAL_MARKERS) {
        improvements.push("when the issue started");
    }
    if contains_any(lower, FAILURE_LANGUAGE) && !contains_any(lower, ERROR_MENTIONS) {
        improvements.push("any error messages you see");
    }
    if !contains_any(lower, REMEDIATION_LANGUAGE) {
        improvements.push("what steps you've already tried");
    }

    if improvements.is_empty() {
        return None;
    }

    let joined = improvements.join(", ");
    Some(RuleOutcome {
        text: format!(
            "{}\n\nTo help us assist you faster, please also mention: {}.",
            input.trimmed, joined
        ),
        confidence: Confidence::Medium,
        explanation: format!(
            "Added prompts for missing details: {joined}. This helps the support team resolve \
             your issue faster."
        ),
    })
}

/// Nothing missing; collapse blank lines and trim each line
fn reformat(input: &DescriptionInput<'_>) -> Option<RuleOutcome> {
    let text = input
        .raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    Some(RuleOutcome {
        text,
        confidence: Confidence::High,
        explanation: "Description looks good! Minor formatting improvements applied for \
                      readability."
            .to_string(),
    })
}

// =========================================================================
// Helpers
// =========================================================================

/// Check whether the haystack contains any of the given needles
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Replace every occurrence of `from` ignoring ASCII case
///
/// Needles are ASCII keywords, so byte offsets into the lowercased copy are
/// valid offsets into the original text.
fn replace_ignore_ascii_case(text: &str, from: &str, to: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let from = from.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(pos) = lower[i..].find(&from) {
        let start = i + pos;
        out.push_str(&text[i..start]);
        out.push_str(to);
        i = start + from.len();
    }
    out.push_str(&text[i..]);
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
