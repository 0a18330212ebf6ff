//! Test runner implementation.
//!
//! Executes assertions against resource endpoint responses.

use diskcheck_application::ports::AssertionChecker;
use diskcheck_domain::response::ResponseSpec;
use diskcheck_domain::testing::{Assertion, AssertionResult, StatusExpectation};

const PREVIEW_LEN: usize = 100;

/// Test runner that executes assertions against responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a single assertion against a response.
    #[must_use]
    pub fn run_assertion(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => {
                self.check_status_code(assertion, response, expected)
            }
            Assertion::JsonField { field, expected } => {
                self.check_json_field(assertion, response, field, expected)
            }
            Assertion::IsJson => self.check_is_json(assertion, response),
        }
    }

    fn check_status_code(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        expected: &StatusExpectation,
    ) -> AssertionResult {
        let actual = response.status;
        if expected.matches(actual) {
            AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                actual.to_string(),
                format!("Expected status {}, got {}", expected.description(), actual),
            )
        }
    }

    fn check_json_field(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        field: &str,
        expected: &serde_json::Value,
    ) -> AssertionResult {
        let json = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(json) => json,
            Err(e) => {
                return AssertionResult::fail_with_value(
                    assertion.clone(),
                    preview(&response.body),
                    format!("Failed to parse body as JSON: {e}"),
                );
            }
        };

        match json.get(field) {
            Some(value) if value == expected => {
                AssertionResult::pass_with_value(assertion.clone(), value.to_string())
            }
            Some(value) => AssertionResult::fail_with_value(
                assertion.clone(),
                value.to_string(),
                format!("JSON field '{field}' mismatch: expected {expected}, got {value}"),
            ),
            None => AssertionResult::fail(
                assertion.clone(),
                format!("JSON field '{field}' not found"),
            ),
        }
    }

    fn check_is_json(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(_) => AssertionResult::pass(assertion.clone()),
            Err(e) => AssertionResult::fail_with_value(
                assertion.clone(),
                preview(&response.body),
                format!("Body is not valid JSON: {e}"),
            ),
        }
    }
}

impl AssertionChecker for TestRunner {
    fn check(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        self.run_assertion(assertion, response)
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::time::Duration;

    fn create_response(status: u16, body: &str) -> ResponseSpec {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        ResponseSpec::new(status, headers, body.as_bytes(), Duration::from_millis(50))
    }

    const FOLDER_BODY: &str = r#"{"name":"test_folder","path":"disk:/test_folder","type":"dir"}"#;

    #[test]
    fn test_status_code_exact() {
        let runner = TestRunner::new();
        let response = create_response(201, "");

        let result = runner.run_assertion(&Assertion::status(201), &response);
        assert!(result.passed);
        assert_eq!(result.actual.as_deref(), Some("201"));

        let result = runner.run_assertion(&Assertion::status(409), &response);
        assert!(!result.passed);
        assert_eq!(
            result.error.as_deref(),
            Some("Expected status = 409, got 201")
        );
    }

    #[test]
    fn test_status_code_one_of() {
        let runner = TestRunner::new();
        let assertion = Assertion::status_in(&[400, 409]);

        assert!(runner.run_assertion(&assertion, &create_response(409, "")).passed);
        let result = runner.run_assertion(&assertion, &create_response(201, ""));
        assert!(!result.passed);
        assert_eq!(
            result.error.as_deref(),
            Some("Expected status in [400, 409], got 201")
        );
    }

    #[test]
    fn test_json_field() {
        let runner = TestRunner::new();
        let response = create_response(200, FOLDER_BODY);

        assert!(
            runner
                .run_assertion(&Assertion::json_field("type", "dir"), &response)
                .passed
        );
        assert!(
            runner
                .run_assertion(&Assertion::json_field("name", "test_folder"), &response)
                .passed
        );

        let result = runner.run_assertion(&Assertion::json_field("name", "other"), &response);
        assert!(!result.passed);
        assert_eq!(result.actual.as_deref(), Some(r#""test_folder""#));
    }

    #[test]
    fn test_json_field_missing_or_unparseable() {
        let runner = TestRunner::new();

        let result = runner.run_assertion(
            &Assertion::json_field("type", "dir"),
            &create_response(200, "{}"),
        );
        assert_eq!(result.error.as_deref(), Some("JSON field 'type' not found"));

        let result = runner.run_assertion(
            &Assertion::json_field("type", "dir"),
            &create_response(200, "<html>"),
        );
        assert!(!result.passed);
        assert!(
            result
                .error
                .as_deref()
                .is_some_and(|e| e.starts_with("Failed to parse body as JSON"))
        );
    }

    #[test]
    fn test_is_json() {
        let runner = TestRunner::new();
        assert!(
            runner
                .run_assertion(&Assertion::IsJson, &create_response(200, FOLDER_BODY))
                .passed
        );
        assert!(
            !runner
                .run_assertion(&Assertion::IsJson, &create_response(200, "not json"))
                .passed
        );
    }

    #[test]
    fn test_check_all_stops_at_first_failure() {
        let runner = TestRunner::new();
        let response = create_response(404, r#"{"error":"DiskNotFoundError"}"#);
        let assertions = vec![
            Assertion::status(200),
            Assertion::json_field("type", "dir"),
        ];

        let results = runner.check_all(&assertions, &response);

        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let body = "ж".repeat(150);
        let shown = preview(&body);
        assert_eq!(shown.chars().count(), PREVIEW_LEN + 3);
        assert_eq!(preview("short"), "short");
    }
}
