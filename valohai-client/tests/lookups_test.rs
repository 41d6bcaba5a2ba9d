//! Lookup endpoint tests against a mock platform API

use serde_json::json;
use valohai_client::ValohaiClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing(results: serde_json::Value) -> serde_json::Value {
    json!({ "results": results })
}

#[tokio::test]
async fn test_project_resolution_returns_first_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/"))
        .and(query_param("limit", "10000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "id": "1", "name": "a" },
            { "id": "2", "name": "b" },
        ]))))
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let id = client.get_project_id("b").await.unwrap();
    assert_eq!(id.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_project_resolution_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "id": "1", "name": "a" },
            { "id": "2", "name": "b" },
        ]))))
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let id = client.get_project_id("c").await.unwrap();
    assert_eq!(id, None);
}

#[tokio::test]
async fn test_token_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/"))
        .and(header("authorization", "Token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "id": "p-1", "name": "churn-model" },
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = ValohaiClient::with_token(server.uri(), "test-token");

    let id = client.get_project_id("churn-model").await.unwrap();
    assert_eq!(id.as_deref(), Some("p-1"));
}

#[tokio::test]
async fn test_repository_id_matches_embedded_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/repositories/"))
        .and(query_param("limit", "10000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "id": 7, "project": { "id": "other" } },
            { "id": 9, "project": { "id": "p-1" } },
        ]))))
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let id = client.get_repository_id("p-1").await.unwrap();
    assert_eq!(id, Some(9));
}

#[tokio::test]
async fn test_latest_commit_filters_repository_and_branch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/repositories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            { "id": 9, "project": { "id": "p-1" } },
        ]))))
        .mount(&server)
        .await;

    // Ordered newest first by the server; entries for other repositories and
    // branches must be skipped over.
    Mock::given(method("GET"))
        .and(path("/api/v0/commits/"))
        .and(query_param("ordering", "-commit_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([
            {
                "repository": 4,
                "ref": "main",
                "identifier": "zzz",
                "commit_time": "2026-08-03T12:00:00Z"
            },
            {
                "repository": 9,
                "ref": "dev",
                "identifier": "yyy",
                "commit_time": "2026-08-02T12:00:00Z"
            },
            {
                "repository": 9,
                "ref": "main",
                "identifier": "abc123",
                "commit_time": "2026-08-01T12:00:00Z"
            },
        ]))))
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let commit = client.get_latest_commit("p-1", "main").await.unwrap();
    assert_eq!(commit.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_latest_commit_without_repository() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/repositories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([]))))
        .mount(&server)
        .await;

    // The commit listing must not be hit at all when no repository resolves.
    Mock::given(method("GET"))
        .and(path("/api/v0/commits/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let commit = client.get_latest_commit("p-1", "main").await.unwrap();
    assert_eq!(commit, None);
}

#[tokio::test]
async fn test_server_error_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/projects/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ValohaiClient::new(server.uri());

    let err = client.get_project_id("a").await.unwrap_err();
    assert!(err.is_server_error());
    assert!(err.to_string().contains("boom"));
}
