//! Suite report rendering.
//!
//! The text form follows the usual verbose test-runner layout: one verdict
//! line per scenario, a block per failure, then a summary.

use std::fmt::Write;

use diskcheck_domain::{
    report::{ScenarioOutcome, SuiteReport},
    scenario::Scenario,
};

const HEAVY_RULE: &str =
    "======================================================================";
const LIGHT_RULE: &str =
    "----------------------------------------------------------------------";

/// Renders the report as text.
#[must_use]
pub fn render_text(report: &SuiteReport) -> String {
    let mut out = String::new();

    for scenario in &report.scenarios {
        let _ = writeln!(
            out,
            "{} ({}) ... {}",
            scenario.id,
            scenario.title,
            scenario.outcome.verdict()
        );
    }

    for scenario in report.scenarios.iter().filter(|s| !s.passed()) {
        let label = match scenario.outcome {
            ScenarioOutcome::Errored(_) => "ERROR",
            _ => "FAIL",
        };
        let _ = writeln!(out, "\n{HEAVY_RULE}");
        let _ = writeln!(out, "{label}: {} ({})", scenario.id, scenario.title);
        let _ = writeln!(out, "{LIGHT_RULE}");
        let _ = writeln!(out, "{}", scenario.outcome.message().unwrap_or_default());
    }

    let _ = writeln!(out, "\n{LIGHT_RULE}");
    #[allow(clippy::cast_precision_loss)]
    let seconds = report.duration_ms as f64 / 1000.0;
    let noun = if report.total == 1 { "test" } else { "tests" };
    let _ = writeln!(out, "Ran {} {noun} in {seconds:.3}s\n", report.total);

    if report.all_passed() {
        let _ = writeln!(out, "OK");
    } else {
        let _ = writeln!(
            out,
            "FAILED (failures={}, errors={})",
            report.failed, report.errored
        );
    }

    out
}

/// Renders a scenario listing for `--list`.
#[must_use]
pub fn render_listing(scenarios: &[Scenario]) -> String {
    let mut out = String::new();
    for scenario in scenarios {
        let _ = writeln!(out, "{} ({})", scenario.id, scenario.title);
        for step in &scenario.steps {
            let expected: Vec<String> = step
                .assertions
                .iter()
                .map(diskcheck_domain::Assertion::description)
                .collect();
            let expected = if expected.is_empty() {
                "unchecked".to_string()
            } else {
                expected.join("; ")
            };
            let _ = writeln!(
                out,
                "    {:<13} {} [{}] -> {expected}",
                step.label,
                step.request,
                step.request.auth.label()
            );
        }
        for teardown in &scenario.teardown {
            let _ = writeln!(out, "    {:<13} {}", "teardown", teardown.request());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskcheck_domain::{
        Assertion, ResourceRequest, Step,
        report::ScenarioReport,
    };
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn scenario(id: &str, title: &str, outcome: ScenarioOutcome) -> ScenarioReport {
        ScenarioReport {
            id: id.to_string(),
            title: title.to_string(),
            outcome,
            steps: Vec::new(),
            teardown_requests: 1,
            duration_ms: 10,
        }
    }

    #[test]
    fn test_render_all_passed() {
        let report = SuiteReport::new(
            Uuid::now_v7(),
            vec![scenario(
                "test_08_create_folder_empty_name",
                "Create with empty path",
                ScenarioOutcome::Passed,
            )],
            1234,
        );

        let text = render_text(&report);

        assert!(text.starts_with(
            "test_08_create_folder_empty_name (Create with empty path) ... ok\n"
        ));
        assert!(text.contains("Ran 1 test in 1.234s"));
        assert!(text.trim_end().ends_with("OK"));
    }

    #[test]
    fn test_render_failures() {
        let report = SuiteReport::new(
            Uuid::now_v7(),
            vec![
                scenario(
                    "test_02_create_folder_already_exists",
                    "Create existing folder",
                    ScenarioOutcome::Failed(
                        r#"create again (PUT path="test_folder"): Expected status = 409, got 201"#
                            .to_string(),
                    ),
                ),
                scenario(
                    "test_full_folder_lifecycle",
                    "Full lifecycle",
                    ScenarioOutcome::Errored("connection failed: reset".to_string()),
                ),
            ],
            50,
        );

        let text = render_text(&report);

        assert!(text.contains("test_02_create_folder_already_exists (Create existing folder) ... FAIL"));
        assert!(text.contains("FAIL: test_02_create_folder_already_exists"));
        assert!(text.contains("Expected status = 409, got 201"));
        assert!(text.contains("ERROR: test_full_folder_lifecycle (Full lifecycle)"));
        assert!(text.contains("Ran 2 tests in 0.050s"));
        assert!(text.trim_end().ends_with("FAILED (failures=1, errors=1)"));
    }

    #[test]
    fn test_render_listing() {
        let scenarios = vec![
            Scenario::new("test_02_create_folder_already_exists", "Create existing folder")
                .with_step(Step::unchecked("create", ResourceRequest::create("f")))
                .with_step(Step::checked(
                    "create again",
                    ResourceRequest::create("f"),
                    vec![Assertion::status(409)],
                ))
                .with_teardown("f"),
        ];

        let listing = render_listing(&scenarios);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(
            lines[0],
            "test_02_create_folder_already_exists (Create existing folder)"
        );
        assert!(lines[1].ends_with("-> unchecked"));
        assert!(lines[2].ends_with("-> Status code = 409"));
        assert!(lines[3].contains(r#"DELETE path="f""#));
    }
}
