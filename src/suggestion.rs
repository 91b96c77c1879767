//! Suggestion engine for AI-assisted form completion
//!
//! Maps a form field plus its sibling values to a suggested rewrite with a
//! confidence tier and a human-readable explanation. The heuristic is an
//! ordered rule list evaluated first-match-wins; see [`rules`] for the rule
//! tables and [`engine::suggest`] for the entry point.

pub mod engine;
pub mod rules;
pub mod service;
pub mod types;

// Re-export main types
pub use engine::suggest;
pub use service::SuggestionService;
pub use types::{Confidence, FormContext, Suggestion};
