//! Scenario definitions.
//!
//! A scenario is an ordered list of steps, each one request plus the
//! assertions its response must satisfy, followed by a best-effort
//! teardown that removes the folder the scenario worked on.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::ResourceRequest;
use crate::testing::Assertion;

/// One request in a scenario.
///
/// A step without assertions is a setup call: its response is recorded but
/// never judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Short label for reports (e.g., "create").
    pub label: String,
    /// Request to send.
    pub request: ResourceRequest,
    /// Assertions the response must satisfy.
    #[serde(default)]
    pub assertions: Vec<Assertion>,
}

impl Step {
    /// A step whose response is not checked.
    #[must_use]
    pub fn unchecked(label: impl Into<String>, request: ResourceRequest) -> Self {
        Self {
            label: label.into(),
            request,
            assertions: Vec::new(),
        }
    }

    /// A step with assertions.
    #[must_use]
    pub fn checked(
        label: impl Into<String>,
        request: ResourceRequest,
        assertions: Vec<Assertion>,
    ) -> Self {
        Self {
            label: label.into(),
            request,
            assertions,
        }
    }

    /// Returns true if the response of this step is judged.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_checked(&self) -> bool {
        !self.assertions.is_empty()
    }
}

/// Cleanup that runs after a scenario whatever its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teardown {
    /// Folder to delete.
    pub path: String,
}

impl Teardown {
    /// The delete request issued by this teardown.
    #[must_use]
    pub fn request(&self) -> ResourceRequest {
        ResourceRequest::delete(self.path.clone())
    }
}

/// A named, independent test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable identifier (e.g., `test_01_create_folder_success`).
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Steps, run in order.
    pub steps: Vec<Step>,
    /// Cleanup deletes, run after the steps in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teardown: Vec<Teardown>,
}

impl Scenario {
    /// Creates an empty scenario.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            steps: Vec::new(),
            teardown: Vec::new(),
        }
    }

    /// Appends a step (builder pattern).
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Adds a folder removed after the scenario (builder pattern).
    #[must_use]
    pub fn with_teardown(mut self, path: impl Into<String>) -> Self {
        self.teardown.push(Teardown { path: path.into() });
        self
    }

    /// Returns true if the id or the title contains `pattern`
    /// (case-insensitive).
    #[must_use]
    pub fn matches_filter(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.id.to_lowercase().contains(&pattern) || self.title.to_lowercase().contains(&pattern)
    }

    /// Checks the scenario can be run.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScenario` if the id is empty or no step
    /// carries an assertion.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidScenario {
                name: self.title.clone(),
                reason: "id is empty".to_string(),
            });
        }
        if !self.steps.iter().any(Step::is_checked) {
            return Err(DomainError::InvalidScenario {
                name: self.id.clone(),
                reason: "no step has an assertion".to_string(),
            });
        }
        Ok(())
    }
}
