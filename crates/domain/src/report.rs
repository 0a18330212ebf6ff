//! Scenario and suite reports.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::ResourceRequest;
use crate::resource::ResourceMeta;
use crate::testing::AssertionResult;

/// What happened to one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    /// Step label.
    pub label: String,
    /// Request that was sent.
    pub request: ResourceRequest,
    /// Status received, if the call completed.
    pub status: Option<u16>,
    /// Time spent on the call in milliseconds.
    pub duration_ms: u64,
    /// Assertion results, in order.
    #[serde(default)]
    pub results: Vec<AssertionResult>,
    /// Metadata decoded from a successful read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceMeta>,
}

impl StepReport {
    /// Returns true if every assertion passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Returns the first failed assertion, if any.
    #[must_use]
    pub fn first_failure(&self) -> Option<&AssertionResult> {
        self.results.iter().find(|r| !r.passed)
    }
}

/// Outcome of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Every assertion passed.
    Passed,
    /// An assertion did not hold.
    Failed(String),
    /// A request could not be completed.
    Errored(String),
}

impl ScenarioOutcome {
    /// Short verdict in test-runner wording.
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        match self {
            Self::Passed => "ok",
            Self::Failed(_) => "FAIL",
            Self::Errored(_) => "ERROR",
        }
    }

    /// Failure or error message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed(message) | Self::Errored(message) => Some(message),
        }
    }
}

/// Result of one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioReport {
    /// Scenario id.
    pub id: String,
    /// Scenario title.
    pub title: String,
    /// Final verdict.
    pub outcome: ScenarioOutcome,
    /// Steps that were run, in order. Steps after a failure are absent.
    pub steps: Vec<StepReport>,
    /// Number of teardown deletes sent. Their outcome is not recorded.
    pub teardown_requests: usize,
    /// Wall time in milliseconds, teardown included.
    pub duration_ms: u64,
}

impl ScenarioReport {
    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, ScenarioOutcome::Passed)
    }
}

/// Results from running a list of scenarios.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteReport {
    /// Identifier of this run.
    pub run_id: Uuid,
    /// Per-scenario results, in execution order.
    pub scenarios: Vec<ScenarioReport>,
    /// Number of scenarios run.
    pub total: usize,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Number of errored scenarios.
    pub errored: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Create a suite report and tally outcomes.
    #[must_use]
    pub fn new(run_id: Uuid, scenarios: Vec<ScenarioReport>, duration_ms: u64) -> Self {
        let total = scenarios.len();
        let mut passed = 0;
        let mut failed = 0;
        let mut errored = 0;
        for scenario in &scenarios {
            match scenario.outcome {
                ScenarioOutcome::Passed => passed += 1,
                ScenarioOutcome::Failed(_) => failed += 1,
                ScenarioOutcome::Errored(_) => errored += 1,
            }
        }

        Self {
            run_id,
            scenarios,
            total,
            passed,
            failed,
            errored,
            duration_ms,
        }
    }

    /// Check if all scenarios passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
