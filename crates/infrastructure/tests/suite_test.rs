//! Runs catalogue scenarios end to end through the reqwest client and the
//! assertion runner against a wiremock stand-in for the storage service.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use diskcheck_application::{CatalogueOptions, ScenarioExecutor, catalogue};
use diskcheck_domain::{OAuthToken, Scenario, ScenarioOutcome};
use diskcheck_infrastructure::{ReqwestDiskClient, TestRunner};
use pretty_assertions::assert_eq;
use reqwest::Client;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESOURCES: &str = "/v1/disk/resources";
const TOKEN: &str = "AQAA-suite-token";

fn executor(server: &MockServer) -> ScenarioExecutor<ReqwestDiskClient, TestRunner> {
    let base_url = Url::parse(&format!("{}{RESOURCES}", server.uri())).unwrap();
    let client =
        ReqwestDiskClient::with_client(Client::new(), base_url, OAuthToken::new(TOKEN).unwrap());
    ScenarioExecutor::new(Arc::new(client), TestRunner::new())
}

fn scenarios(ids: &[&str]) -> Vec<Scenario> {
    catalogue(&CatalogueOptions::default())
        .unwrap()
        .into_iter()
        .filter(|s| ids.contains(&s.id.as_str()))
        .collect()
}

fn folder_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "path": format!("disk:/{name}"),
        "type": "dir",
        "created": "2024-03-01T10:15:00+00:00",
        "modified": "2024-03-01T10:15:00+00:00",
        "_embedded": {"items": [], "limit": 20, "offset": 0, "total": 0}
    })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(serde_json::json!({
        "message": "Не удалось найти запрошенный ресурс.",
        "description": "Resource not found.",
        "error": "DiskNotFoundError"
    }))
}

/// Mounts the answers a real account gives for one folder that does not
/// exist yet: create, read, delete, then not found.
async fn mount_folder(server: &MockServer, name: &str) {
    Mock::given(method("PUT"))
        .and(path(RESOURCES))
        .and(query_param("path", name))
        .and(header("Authorization", format!("OAuth {TOKEN}").as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(1)
        .mount(server)
        .await;
    // Mounted first, so they answer before the not-found fallbacks below.
    Mock::given(method("GET"))
        .and(query_param("path", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder_body(name)))
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(query_param("path", name))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("path", name))
        .respond_with(not_found())
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(query_param("path", name))
        .respond_with(not_found())
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_lifecycle_and_folder_info_pass_end_to_end() {
    let server = MockServer::start().await;
    mount_folder(&server, "test_folder").await;
    mount_folder(&server, "integration_test_folder").await;

    let report = executor(&server)
        .run_suite(&scenarios(&[
            "test_07_get_folder_info_success",
            "test_full_folder_lifecycle",
        ]))
        .await;

    for scenario in &report.scenarios {
        assert!(scenario.passed(), "{}: {:?}", scenario.id, scenario.outcome);
    }
    assert_eq!(report.total, 2);

    let info = &report.scenarios[0];
    assert_eq!(info.id, "test_07_get_folder_info_success");
    assert_eq!(info.steps[1].results.len(), 4);
    assert_eq!(
        info.steps[1].resource.as_ref().map(|m| m.name.as_str()),
        Some("test_folder")
    );

    let lifecycle = &report.scenarios[1];
    let statuses: Vec<Option<u16>> = lifecycle.steps.iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![Some(201), Some(200), Some(204), Some(404)]);
    assert_eq!(lifecycle.teardown_requests, 1);

    let deletes = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "DELETE")
        .count();
    // test_07 teardown, lifecycle delete step, lifecycle teardown
    assert_eq!(deletes, 3);
}

#[tokio::test]
async fn test_wrong_metadata_fails_folder_info() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "test_folder",
            "path": "disk:/test_folder",
            "type": "file"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let report = executor(&server)
        .run_suite(&scenarios(&["test_07_get_folder_info_success"]))
        .await;

    match &report.scenarios[0].outcome {
        ScenarioOutcome::Failed(message) => {
            assert!(
                message.contains(r#"JSON field 'type' mismatch: expected "dir", got "file""#),
                "{message}"
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(report.failed, 1);
}
