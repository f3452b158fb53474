//! Fetch behaviour against an in-process HTTP server.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use twse_client::{ClientConfig, TwseClient};
use twse_core::{Fetched, RecordSource, TwseError};

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route(
            "/array",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"[{"Code":"2330","Name":"台積電"},{"Code":"2317","Name":"鴻海"}]"#,
                )
            }),
        )
        .route(
            "/object",
            get(|| async { Json(json!({"Date": "1130102", "TAIEX": "17,853.76"})) }),
        )
        .route("/html", get(|| async { "<html>maintenance</html>" }))
        .route("/empty", get(|| async { "" }))
        .route("/bom", get(|| async { "\u{feff}[{\"Code\":\"0050\"}]" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "not found").into_response() }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "[]"
            }),
        )
        .route(
            "/headers",
            get(|headers: HeaderMap| async move {
                let read = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                Json(json!([{
                    "user_agent": read(header::USER_AGENT),
                    "accept": read(header::ACCEPT),
                }]))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> TwseClient {
    let config = ClientConfig {
        base_url: format!("http://{addr}"),
        request_interval_secs: 0.0,
        timeout_secs: 0.5,
        ..ClientConfig::default()
    };
    TwseClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_array_body_keeps_order() {
    let client = client_for(spawn_upstream().await);
    let records = client.fetch_records("/array").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get_str("Code"), Some("2330"));
    assert_eq!(records[1].get_str("Name"), Some("鴻海"));
    let keys: Vec<&str> = records[0].iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["Code", "Name"]);
}

#[tokio::test]
async fn test_object_body_is_one_record() {
    let client = client_for(spawn_upstream().await);
    let records = client.fetch_records("/object").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get_str("TAIEX"), Some("17,853.76"));
}

#[tokio::test]
async fn test_unparsable_body_is_tagged_malformed() {
    let client = client_for(spawn_upstream().await);

    assert!(client.fetch("/html").await.unwrap().is_malformed());
    assert!(client.fetch_records("/html").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_body_is_no_records() {
    let client = client_for(spawn_upstream().await);
    assert_eq!(client.fetch("/empty").await.unwrap(), Fetched::Records(vec![]));
}

#[tokio::test]
async fn test_byte_order_mark_is_ignored() {
    let client = client_for(spawn_upstream().await);
    let records = client.fetch_records("/bom").await.unwrap();
    assert_eq!(records[0].get_str("Code"), Some("0050"));
}

#[tokio::test]
async fn test_error_status() {
    let client = client_for(spawn_upstream().await);
    let err = client.fetch("/missing").await.unwrap_err();

    assert_eq!(
        err,
        TwseError::http_status(404, client.url_for("/missing"))
    );
}

#[tokio::test]
async fn test_timeout() {
    let client = client_for(spawn_upstream().await);
    let err = client.fetch("/slow").await.unwrap_err();
    assert!(matches!(err, TwseError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).fetch("/array").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_default_headers() {
    let client = client_for(spawn_upstream().await);
    let records = client.fetch_records("/headers").await.unwrap();

    assert_eq!(records[0].get_str("user_agent"), Some("stock-mcp/1.0"));
    assert_eq!(records[0].get_str("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_requests_are_spaced() {
    let addr = spawn_upstream().await;
    let config = ClientConfig {
        base_url: format!("http://{addr}"),
        request_interval_secs: 0.2,
        ..ClientConfig::default()
    };
    let client = TwseClient::new(&config).unwrap();

    let start = Instant::now();
    client.fetch("/array").await.unwrap();
    client.fetch("/html").await.unwrap();
    client.fetch("/array").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_fetch_latest() {
    let client = client_for(spawn_upstream().await);
    let latest = client.fetch_latest("/array", 1).await.unwrap();

    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].get("Code"), Some(&Value::from("2317")));
}
