//! Staged progress simulator for transparent loading states
//!
//! A small sequential state machine that advances an ordered list of named
//! steps from pending through processing to completed, exposing aggregate
//! progress and estimated time remaining. Time is injected by the caller
//! (see [`simulator::ProgressSimulator::advance`]), which keeps the core
//! deterministic; the wall-clock drivers live in [`runner`].

pub mod runner;
pub mod simulator;
pub mod types;

// Re-export main types
pub use runner::{drive, run_opaque};
pub use simulator::ProgressSimulator;
pub use types::{LoadingStep, RunReport, RunState, StepSpec, StepStatus};
