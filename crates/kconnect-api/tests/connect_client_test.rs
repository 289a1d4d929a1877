// Contract tests for `ConnectClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kconnect_api::{ConnectClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ConnectClient) {
    let server = MockServer::start().await;
    let client = ConnectClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("client from mock uri");
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_connectors() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/connectors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["jdbc-sink", "jdbc-src"])))
        .mount(&server)
        .await;

    let names = client.list_connectors().await.expect("list connectors");
    assert_eq!(names, vec!["jdbc-sink", "jdbc-src"]);
}

#[tokio::test]
async fn test_connector_status() {
    let (server, client) = setup().await;

    let body = json!({
        "name": "orders-sink",
        "type": "sink",
        "connector": { "state": "RUNNING", "worker_id": "10.0.0.7:8083" },
        "tasks": [
            { "id": 0, "state": "RUNNING", "worker_id": "10.0.0.7:8083" },
            { "id": 1, "state": "RUNNING", "worker_id": "10.0.0.8:8083" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/connectors/orders-sink/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let status = client.connector_status("orders-sink").await.expect("status");
    assert_eq!(status["connector"]["state"], "RUNNING");
    assert_eq!(status["tasks"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_restart_posts_no_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/connectors/orders-sink/restart"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.restart_connector("orders-sink").await.expect("restart");
}

#[tokio::test]
async fn test_pause_and_resume_use_put() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/connectors/x/pause"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/connectors/x/resume"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client.pause_connector("x").await.expect("pause");
    client.resume_connector("x").await.expect("resume");
}

#[tokio::test]
async fn test_create_connector_sends_document() {
    let (server, client) = setup().await;

    let document = json!({
        "name": "orders-src",
        "config": { "connector.class": "io.confluent.connect.jdbc.JdbcSourceConnector" }
    });

    Mock::given(method("POST"))
        .and(path("/connectors"))
        .and(body_json(&document))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client.create_connector(&document).await.expect("create");
}

#[tokio::test]
async fn test_update_config_puts_to_config_path() {
    let (server, client) = setup().await;

    let config = json!({ "topics": "orders", "tasks.max": "2" });

    Mock::given(method("PUT"))
        .and(path("/connectors/orders-sink/config"))
        .and(body_json(&config))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_connector_config("orders-sink", &config)
        .await
        .expect("update config");
}

// ── Failure tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_non_success_becomes_remote_error_with_context() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/connectors/ghost/status"))
        .respond_with(ResponseTemplate::new(404).set_body_string("connector ghost not found"))
        .mount(&server)
        .await;

    let err = client
        .connector_status("ghost")
        .await
        .expect_err("404 must fail");

    match err {
        Error::Remote {
            method,
            url,
            status,
            body,
        } => {
            assert_eq!(method, "GET");
            assert!(url.ends_with("/connectors/ghost/status"));
            assert_eq!(status, 404);
            assert_eq!(body, "connector ghost not found");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_duplicate_create_fails() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/connectors"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string("Connector orders-sink already exists"),
        )
        .mount(&server)
        .await;

    let err = client
        .create_connector(&json!({ "name": "orders-sink", "config": {} }))
        .await
        .expect_err("duplicate create must fail");

    assert_eq!(err.remote_status(), Some(409));
}

#[tokio::test]
async fn test_malformed_json_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/connectors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_connectors().await.expect_err("must fail");
    assert!(matches!(err, Error::Deserialization { .. }));
}
