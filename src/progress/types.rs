//! Step and run types for the staged progress simulator

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Status of a single simulated step
///
/// Transitions are strictly forward: pending to processing, then completed or
/// error. Completed and error are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

/// Overall state of a simulated run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Caller-supplied definition of one step
///
/// Also the shape of a `[[simulation.steps]]` entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_ms: u64,
    /// Why this step exists, shown to the user while it runs
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl StepSpec {
    pub fn new(title: impl Into<String>, duration_ms: u64) -> Self {
        StepSpec {
            title: title.into(),
            description: String::new(),
            duration_ms,
            reasoning: None,
        }
    }

    pub fn planned(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// One step of an in-flight or finished run
///
/// Rebuilt from the spec list at the start of every run and discarded on
/// reset; never reused across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingStep {
    /// Position in the sequence, starting at 0
    pub id: usize,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    pub planned: Duration,
    pub reasoning: Option<String>,
}

impl LoadingStep {
    pub(crate) fn from_spec(id: usize, spec: &StepSpec) -> Self {
        LoadingStep {
            id,
            title: spec.title.clone(),
            description: spec.description.clone(),
            status: StepStatus::Pending,
            planned: spec.planned(),
            reasoning: spec.reasoning.clone(),
        }
    }
}

/// Outcome of a driven run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub success: bool,
    pub cancelled: bool,
    pub total: Duration,
}

/// Default step pipeline for the transparent-loading demo
pub fn default_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            title: "Analyzing your request".to_string(),
            description: "Parsing input and extracting intent".to_string(),
            duration_ms: 800,
            reasoning: Some(
                "Understanding what you are asking for before touching any data".to_string(),
            ),
        },
        StepSpec {
            title: "Searching knowledge base".to_string(),
            description: "Scanning indexed articles for relevant matches".to_string(),
            duration_ms: 1200,
            reasoning: Some(
                "Narrowing thousands of documents down to a handful of candidates".to_string(),
            ),
        },
        StepSpec {
            title: "Processing with AI model".to_string(),
            description: "Running candidate matches through the language model".to_string(),
            duration_ms: 1500,
            reasoning: Some(
                "The slow part - every candidate is weighed against your request".to_string(),
            ),
        },
        StepSpec {
            title: "Generating recommendations".to_string(),
            description: "Ranking results and composing the response".to_string(),
            duration_ms: 900,
            reasoning: Some("Ordering results so the most relevant answer comes first".to_string()),
        },
        StepSpec {
            title: "Finalizing results".to_string(),
            description: "Formatting output for display".to_string(),
            duration_ms: 600,
            reasoning: None,
        },
    ]
}
