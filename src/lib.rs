//! assistiq - the engineering core of a "wrong vs. right" AI-assistance demo
//!
//! Two leaf components with no dependency on each other:
//!
//! - [`suggestion`]: a pure, rule-based engine mapping a form field and its
//!   sibling values to a suggested rewrite with a confidence tier and an
//!   explanation.
//! - [`progress`]: a staged progress simulator - a sequential state machine
//!   advancing named steps on planned durations, exposing aggregate progress
//!   and estimated time remaining.
//!
//! Around them: [`triage`] routes support messages between the assistant and
//! a human specialist, [`history`] makes accepted suggestions undoable, and
//! [`config`] supplies delays and step pipelines from a TOML file.

pub mod config;
pub mod error;
pub mod history;
pub mod progress;
pub mod suggestion;
pub mod triage;

pub use error::AssistError;
