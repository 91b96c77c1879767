//! The staged progress state machine
//!
//! Owns the step list for one simulated run. Time is injected through
//! [`ProgressSimulator::advance`], so tests never touch a real clock and the
//! wall-clock driver in [`crate::progress::runner`] stays a thin loop.
//! Each instance owns its state outright; two simulators driven side by side
//! share nothing.

use std::time::Duration;

use super::types::{LoadingStep, RunState, StepSpec, StepStatus};
use crate::error::AssistError;

/// Sequential mock-async state machine driving a transparent loading demo
#[derive(Debug, Clone, Default)]
pub struct ProgressSimulator {
    specs: Vec<StepSpec>,
    steps: Vec<LoadingStep>,
    state: RunState,
    /// Index of the step currently processing (meaningful only while running)
    current: usize,
    /// Time consumed by the current step so far
    elapsed_in_current: Duration,
    /// Time consumed by the whole run so far
    total_elapsed: Duration,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        ProgressSimulator::default()
    }

    /// Create a simulator pre-configured with the given steps
    pub fn with_steps(specs: Vec<StepSpec>) -> Result<Self, AssistError> {
        let mut sim = ProgressSimulator::new();
        sim.configure(specs)?;
        Ok(sim)
    }

    /// Replace the step list
    ///
    /// Rejected while a run is in progress; call [`reset`](Self::reset) first.
    /// An empty list is rejected outright, so a configured simulator always
    /// has at least one step.
    pub fn configure(&mut self, specs: Vec<StepSpec>) -> Result<(), AssistError> {
        if self.state == RunState::Running {
            return Err(AssistError::InvalidState(
                "cannot reconfigure while a run is in progress".to_string(),
            ));
        }
        if specs.is_empty() {
            return Err(AssistError::InvalidInput(
                "step list cannot be empty".to_string(),
            ));
        }
        self.specs = specs;
        self.reset();
        Ok(())
    }

    /// Begin a new run
    ///
    /// Fails with `InvalidState` if a run is already in progress, leaving the
    /// existing progress untouched. Steps are rebuilt fresh for every run.
    pub fn start(&mut self) -> Result<(), AssistError> {
        if self.state == RunState::Running {
            return Err(AssistError::InvalidState(
                "simulation already running".to_string(),
            ));
        }
        if self.specs.is_empty() {
            return Err(AssistError::InvalidInput(
                "no steps configured".to_string(),
            ));
        }

        self.rebuild_steps();
        self.state = RunState::Running;
        self.steps[0].status = StepStatus::Processing;
        log::debug!("run started: {} steps", self.steps.len());
        Ok(())
    }

    /// Advance the run by a slice of elapsed time
    ///
    /// Consumes time across step boundaries: a large enough slice completes
    /// several steps in one call. Step N+1 never starts processing before
    /// step N is terminal. No-op unless running.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.state != RunState::Running {
            return;
        }

        let mut budget = elapsed;
        loop {
            let planned = self.steps[self.current].planned;
            let remaining = planned.saturating_sub(self.elapsed_in_current);

            if budget < remaining {
                self.elapsed_in_current += budget;
                self.total_elapsed += budget;
                return;
            }

            budget -= remaining;
            self.total_elapsed += remaining;
            self.steps[self.current].status = StepStatus::Completed;
            log::debug!(
                "step {} completed: {}",
                self.current,
                self.steps[self.current].title
            );

            if self.current + 1 == self.steps.len() {
                self.state = RunState::Finished;
                log::debug!("run finished after {:?}", self.total_elapsed);
                return;
            }

            self.current += 1;
            self.steps[self.current].status = StepStatus::Processing;
            self.elapsed_in_current = Duration::ZERO;
        }
    }

    /// Mark the processing step as failed and halt the run
    ///
    /// Subsequent steps stay pending and are never started; there is no
    /// retry. Exists for demonstration - normal operation never errors.
    pub fn fail_current(&mut self) -> Result<(), AssistError> {
        if self.state != RunState::Running {
            return Err(AssistError::InvalidState(
                "no step is processing".to_string(),
            ));
        }
        self.steps[self.current].status = StepStatus::Error;
        self.state = RunState::Finished;
        log::warn!(
            "step {} failed: {}",
            self.current,
            self.steps[self.current].title
        );
        Ok(())
    }

    /// Cancel any in-flight run and return to idle
    ///
    /// Safe to call at any time, mid-run included. This is the cancellation
    /// mechanism: the whole run is discarded, there is no partial cancel of
    /// a single step.
    pub fn reset(&mut self) {
        self.rebuild_steps();
        self.state = RunState::Idle;
    }

    /// Percentage of steps completed, 0-100
    ///
    /// Derived on every call, never persisted. The processing step does not
    /// count until it completes.
    pub fn progress_percentage(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        let completed = self
            .steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count();
        (completed * 100 / self.steps.len()) as u8
    }

    /// Estimated time remaining
    ///
    /// Sum of planned durations of steps not yet completed. The processing
    /// step counts its full planned duration, not the prorated remainder.
    pub fn time_remaining(&self) -> Duration {
        self.steps
            .iter()
            .filter(|s| s.status != StepStatus::Completed)
            .map(|s| s.planned)
            .sum()
    }

    /// Cloned view of the step list
    pub fn steps_snapshot(&self) -> Vec<LoadingStep> {
        self.steps.clone()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// True once finished with every step completed
    pub fn succeeded(&self) -> bool {
        self.state == RunState::Finished
            && self.steps.iter().all(|s| s.status == StepStatus::Completed)
    }

    /// Planned time left for the step currently processing
    ///
    /// `None` unless a run is in progress; the runner uses this as its sleep
    /// interval.
    pub fn current_step_remaining(&self) -> Option<Duration> {
        if self.state != RunState::Running {
            return None;
        }
        let planned = self.steps[self.current].planned;
        Some(planned.saturating_sub(self.elapsed_in_current))
    }

    /// Time consumed by the current run so far
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    fn rebuild_steps(&mut self) {
        self.steps = self
            .specs
            .iter()
            .enumerate()
            .map(|(id, spec)| LoadingStep::from_spec(id, spec))
            .collect();
        self.current = 0;
        self.elapsed_in_current = Duration::ZERO;
        self.total_elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
