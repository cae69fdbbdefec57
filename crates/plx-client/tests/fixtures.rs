//! Endpoint groups served from recorded backend fixtures.

use std::sync::Arc;

use plx_auth::StaticCredentials;
use plx_client::ApiClient;
use plx_client::ci::BuildFilter;
use plx_config::ApiConfig;
use plx_core::enums::{BuildStatus, JobStatus, ReleaseStatus, SsoProvider};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    ApiClient::new(
        &config,
        Arc::new(StaticCredentials::new(Some("tok"), Some("org-1"))),
    )
    .unwrap()
}

#[tokio::test]
async fn builds_with_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ci/builds"))
        .and(query_param("status", "failed"))
        .and(query_param("branch", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "builds": [{"id": "b-7", "pipeline": "web", "status": "failed", "branch": "main"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let builds = client(&server)
        .list_builds(&BuildFilter {
            status: Some(BuildStatus::Failed),
            branch: Some("main".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0].id, "b-7");
}

#[tokio::test]
async fn releases_and_logs() {
    let server = MockServer::start().await;
    serve(
        &server,
        "GET",
        "/api/v1/ci/releases",
        json!([{"id": "rel-1", "name": "payments", "version": "1.2.0",
                "environment": "production", "status": "pending"}]),
    )
    .await;
    serve(
        &server,
        "GET",
        "/api/v1/ci/builds/b-1/logs",
        json!({"logs": "step 1\nstep 2"}),
    )
    .await;

    let client = client(&server);
    let releases = client.list_releases(None).await.unwrap();
    assert_eq!(releases[0].status, ReleaseStatus::Pending);
    let logs = client.build_logs("b-1").await.unwrap();
    assert_eq!(logs.lines, vec!["step 1", "step 2"]);
}

#[tokio::test]
async fn empty_secret_list_is_empty_not_error() {
    let server = MockServer::start().await;
    serve(&server, "GET", "/api/v1/awssecrets/list", json!({"secrets": []})).await;

    let secrets = client(&server).list_aws_secrets(None).await.unwrap();
    assert!(secrets.is_empty());
}

#[tokio::test]
async fn vault_roundtrip_uses_query_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/vault/kv/list"))
        .and(query_param("path", "apps/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keys": ["payments", "web"]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/vault/kv/read"))
        .and(query_param("path", "apps/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "path": "apps/payments", "data": {"db_user": "svc"}, "version": 2
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let keys = client.list_vault_keys("apps/").await.unwrap();
    assert_eq!(keys.keys, vec!["payments", "web"]);
    let secret = client.read_vault_secret("apps/payments").await.unwrap();
    assert_eq!(secret.data["db_user"], "svc");
}

#[tokio::test]
async fn sso_toggle_puts_enabled_flag() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/settings/sso/azure_ad/enabled"))
        .and(body_json(json!({"enabled": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .set_sso_enabled(SsoProvider::AzureAd, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn finops_by_service_sorted_descending() {
    let server = MockServer::start().await;
    serve(
        &server,
        "GET",
        "/api/v1/finops/aws/by-service",
        json!([{"service": "S3", "cost": 120.0}, {"service": "EC2", "cost": 900.5}]),
    )
    .await;
    serve(
        &server,
        "GET",
        "/api/v1/finops/aws/forecast",
        json!({"period_start": "2026-04-01", "period_end": "2026-04-30", "amount": 1000.0}),
    )
    .await;

    let client = client(&server);
    let costs = client.aws_cost_by_service().await.unwrap();
    assert_eq!(costs[0].service, "EC2");
    let forecast = client.aws_cost_forecast().await.unwrap();
    assert_eq!(forecast.len(), 1);
}

#[tokio::test]
async fn docs_and_playbook_jobs() {
    let server = MockServer::start().await;
    serve(
        &server,
        "POST",
        "/api/v1/techdocs/generate",
        json!({"id": "doc-1", "status": "queued"}),
    )
    .await;
    serve(
        &server,
        "GET",
        "/api/v1/techdocs/progress/doc-1",
        json!({"id": "doc-1", "status": "running", "percent": 40, "chunk": 4, "totalChunks": 10}),
    )
    .await;
    serve(
        &server,
        "GET",
        "/api/v1/playbook/service/progress/pb-1",
        json!({"id": "pb-1", "status": "completed", "progress": 100,
               "repository_url": "https://git.example.com/payments"}),
    )
    .await;

    let client = client(&server);
    let handle = client
        .generate_docs(&plx_core::entities::DocGenerationRequest {
            repository: "https://git.example.com/payments".into(),
            kind: plx_core::enums::DocKind::Documentation,
            branch: None,
            prompt: None,
            output_path: None,
        })
        .await
        .unwrap();
    assert_eq!(handle.id, "doc-1");

    let progress = client.docs_progress("doc-1").await.unwrap();
    assert_eq!(progress.percent, 40);

    let playbook = client.playbook_progress("pb-1").await.unwrap();
    assert_eq!(playbook.status, JobStatus::Completed);
}
