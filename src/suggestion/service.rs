//! Async wrapper around the pure suggestion engine
//!
//! The engine itself is synchronous; the artificial generation delay that
//! stands in for a real model call lives here, on the caller's side of the
//! purity boundary. Cancellation follows the same token-based idiom as the
//! staged-run driver.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::engine::suggest;
use super::types::{FormContext, Suggestion};
use crate::error::AssistError;

/// Default generation delay, matching a plausible model round-trip
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Generates suggestions after a simulated model delay
#[derive(Debug, Clone)]
pub struct SuggestionService {
    delay: Duration,
}

impl Default for SuggestionService {
    fn default() -> Self {
        SuggestionService::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl SuggestionService {
    pub fn new(delay: Duration) -> Self {
        SuggestionService { delay }
    }

    /// Generate a suggestion after the configured delay
    ///
    /// Returns `InvalidInput` for an empty or whitespace-only value; the
    /// engine never sees those.
    pub async fn generate(
        &self,
        field: &str,
        current_value: &str,
        context: &FormContext,
    ) -> Result<Suggestion, AssistError> {
        if current_value.trim().is_empty() {
            return Err(AssistError::InvalidInput(format!(
                "cannot suggest for empty {field} field"
            )));
        }

        log::debug!("generating suggestion for {field} ({:?} delay)", self.delay);
        tokio::time::sleep(self.delay).await;

        Ok(suggest(field, current_value, context))
    }

    /// Generate with cooperative cancellation
    ///
    /// Races the generation delay against the token; a cancelled token wins
    /// and yields `Cancelled` without ever invoking the engine.
    pub async fn generate_with_cancel(
        &self,
        field: &str,
        current_value: &str,
        context: &FormContext,
        cancel: &CancellationToken,
    ) -> Result<Suggestion, AssistError> {
        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("suggestion for {field} cancelled");
                Err(AssistError::Cancelled)
            }
            result = self.generate(field, current_value, context) => result,
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
