//! Wall-clock drivers for the staged simulator
//!
//! The simulator itself only understands injected time; these drivers supply
//! it. One asynchronous suspension point exists per run: the sleep for the
//! current step's remaining planned time. Cancellation is coarse - the token
//! resets the whole simulator, never a single step.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::simulator::ProgressSimulator;
use super::types::RunReport;
use crate::error::AssistError;

/// Drive a configured simulator to completion in real time
pub async fn drive(
    sim: &mut ProgressSimulator,
    cancel: &CancellationToken,
) -> Result<RunReport, AssistError> {
    drive_with_progress(sim, cancel, |_| {}).await
}

/// Drive a simulator, invoking the observer after every step transition
///
/// The observer sees the simulator in its post-transition state, so it can
/// read `progress_percentage`, `time_remaining`, and `steps_snapshot` for
/// display. Returns a cancelled report (and resets the simulator) when the
/// token fires mid-run.
pub async fn drive_with_progress(
    sim: &mut ProgressSimulator,
    cancel: &CancellationToken,
    mut on_transition: impl FnMut(&ProgressSimulator),
) -> Result<RunReport, AssistError> {
    sim.start()?;
    on_transition(sim);

    while let Some(remaining) = sim.current_step_remaining() {
        tokio::select! {
            _ = cancel.cancelled() => {
                let total = sim.total_elapsed();
                sim.reset();
                log::debug!("run cancelled after {total:?}");
                return Ok(RunReport {
                    success: false,
                    cancelled: true,
                    total,
                });
            }
            _ = tokio::time::sleep(remaining) => {
                sim.advance(remaining);
                on_transition(sim);
            }
        }
    }

    Ok(RunReport {
        success: sim.succeeded(),
        cancelled: false,
        total: sim.total_elapsed(),
    })
}

/// The opaque counterpart: one undifferentiated wait for the whole duration
///
/// Stands in for the "wrong pattern" loading demo - the user sees nothing
/// until everything is done.
pub async fn run_opaque(
    total: Duration,
    cancel: &CancellationToken,
) -> Result<RunReport, AssistError> {
    tokio::select! {
        _ = cancel.cancelled() => Ok(RunReport {
            success: false,
            cancelled: true,
            total: Duration::ZERO,
        }),
        _ = tokio::time::sleep(total) => Ok(RunReport {
            success: true,
            cancelled: false,
            total,
        }),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
