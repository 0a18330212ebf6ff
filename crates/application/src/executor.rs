//! Scenario executor.
//!
//! Runs scenarios one after another against a [`DiskClient`]. Each scenario
//! runs its steps in order, stops at the first failed assertion or transport
//! error, and then always sends its teardown deletes. Teardown results are
//! discarded so they never mask the scenario's own outcome.

use std::sync::Arc;
use std::time::Instant;

use diskcheck_domain::{
    HttpMethod, ResourceMeta,
    report::{ScenarioOutcome, ScenarioReport, StepReport, SuiteReport},
    response::ResponseSpec,
    scenario::{Scenario, Step, Teardown},
    testing::AssertionResult,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ports::{AssertionChecker, DiskClient};

/// Use case for running scenarios.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestDiskClient::new(&config)?;
/// let executor = ScenarioExecutor::new(Arc::new(client), TestRunner::new());
///
/// let report = executor.run_suite(&catalogue(&options)?).await;
/// assert!(report.all_passed());
/// ```
pub struct ScenarioExecutor<C, A> {
    client: Arc<C>,
    checker: A,
}

impl<C: DiskClient, A: AssertionChecker> ScenarioExecutor<C, A> {
    /// Creates a new executor.
    pub const fn new(client: Arc<C>, checker: A) -> Self {
        Self { client, checker }
    }

    /// Runs scenarios sequentially. Each scenario, teardown included,
    /// completes before the next one starts.
    pub async fn run_suite(&self, scenarios: &[Scenario]) -> SuiteReport {
        let run_id = Uuid::now_v7();
        let start = Instant::now();
        info!(%run_id, scenarios = scenarios.len(), "starting suite");

        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            reports.push(self.run_scenario(scenario).await);
        }

        let report = SuiteReport::new(run_id, reports, elapsed_ms(start));
        info!(
            %run_id,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            "suite finished"
        );
        report
    }

    /// Runs one scenario, then its teardown, whatever the outcome.
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioReport {
        let start = Instant::now();

        let (outcome, steps) = match scenario.validate() {
            Ok(()) => self.run_steps(scenario).await,
            Err(e) => (ScenarioOutcome::Errored(e.to_string()), Vec::new()),
        };

        let teardown_requests = if steps.is_empty() {
            0
        } else {
            self.teardown(&scenario.teardown).await
        };

        match &outcome {
            ScenarioOutcome::Passed => info!(scenario = %scenario.id, "passed"),
            ScenarioOutcome::Failed(message) => {
                warn!(scenario = %scenario.id, %message, "failed");
            }
            ScenarioOutcome::Errored(message) => {
                warn!(scenario = %scenario.id, %message, "errored");
            }
        }

        ScenarioReport {
            id: scenario.id.clone(),
            title: scenario.title.clone(),
            outcome,
            steps,
            teardown_requests,
            duration_ms: elapsed_ms(start),
        }
    }

    async fn run_steps(&self, scenario: &Scenario) -> (ScenarioOutcome, Vec<StepReport>) {
        let mut reports = Vec::with_capacity(scenario.steps.len());

        for step in &scenario.steps {
            let start = Instant::now();
            let response = match self.client.execute(&step.request).await {
                Ok(response) => response,
                Err(e) => {
                    reports.push(StepReport {
                        label: step.label.clone(),
                        request: step.request.clone(),
                        status: None,
                        duration_ms: elapsed_ms(start),
                        results: Vec::new(),
                        resource: None,
                    });
                    let message = format!("{} ({}): {e}", step.label, step.request);
                    return (ScenarioOutcome::Errored(message), reports);
                }
            };

            let results = self.checker.check_all(&step.assertions, &response);
            let resource = read_metadata(step, &response);

            reports.push(StepReport {
                label: step.label.clone(),
                request: step.request.clone(),
                status: Some(response.status),
                duration_ms: elapsed_ms(start),
                results,
                resource,
            });

            let failure = reports
                .last()
                .and_then(StepReport::first_failure)
                .map(|r| failure_message(step, r, &response));
            if let Some(message) = failure {
                return (ScenarioOutcome::Failed(message), reports);
            }
        }

        (ScenarioOutcome::Passed, reports)
    }

    /// Sends the teardown deletes and returns how many were sent.
    async fn teardown(&self, teardown: &[Teardown]) -> usize {
        for item in teardown {
            match self.client.execute(&item.request()).await {
                Ok(response) => {
                    debug!(path = %item.path, status = response.status, "teardown delete sent");
                }
                Err(e) => debug!(path = %item.path, error = %e, "teardown delete failed, ignored"),
            }
        }
        teardown.len()
    }
}

/// Decodes the metadata a successful read returns.
fn read_metadata(step: &Step, response: &ResponseSpec) -> Option<ResourceMeta> {
    if step.request.method != HttpMethod::Get || !response.is_success() {
        return None;
    }
    let meta = response.resource();
    match &meta {
        Some(meta) => debug!(
            path = ?step.request.path,
            name = %meta.name,
            kind = %meta.kind,
            "resource metadata"
        ),
        None => debug!(path = ?step.request.path, "read returned no resource metadata"),
    }
    meta
}

fn failure_message(step: &Step, result: &AssertionResult, response: &ResponseSpec) -> String {
    let reason = result
        .error
        .clone()
        .unwrap_or_else(|| result.assertion.description());
    match response.service_error() {
        Some(service) => format!("{} ({}): {reason} [{service}]", step.label, step.request),
        None => format!("{} ({}): {reason}", step.label, step.request),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
