use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use relay_client::{ClientError, ConfigApiClient};
use relay_core::Workload;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Recorded {
    namespace: String,
    authorization: String,
    content_type: String,
    body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    seen: Arc<Mutex<Option<Recorded>>>,
}

async fn record_workload(
    State(state): State<MockState>,
    Path(namespace): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    *state.seen.lock().unwrap() = Some(Recorded {
        namespace,
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap(),
    });

    state.status
}

/// Bind a stand-in for the remote config API on an ephemeral port, returning
/// its base URL and the request it captured.
async fn spawn_remote(status: StatusCode) -> (String, Arc<Mutex<Option<Recorded>>>) {
    let seen = Arc::new(Mutex::new(None));
    let state = MockState {
        status,
        seen: seen.clone(),
    };

    let app = Router::new()
        .route("/api/config/namespaces/:namespace/workloads", post(record_workload))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

#[tokio::test]
async fn test_create_workload_sends_fixed_document() {
    let (tenant_url, seen) = spawn_remote(StatusCode::OK).await;

    let workload = Workload::demo_nginx("demo");
    let client = ConfigApiClient::new();
    client
        .create_workload(&tenant_url, "demo", "abc123", &workload)
        .await
        .unwrap();

    let recorded = seen.lock().unwrap().clone().expect("remote saw no request");
    assert_eq!(recorded.namespace, "demo");
    assert_eq!(recorded.authorization, "APIToken abc123");
    assert_eq!(recorded.content_type, "application/json");
    assert_eq!(recorded.body["metadata"]["namespace"], "demo");
    assert_eq!(recorded.body, serde_json::to_value(&workload).unwrap());
}

#[tokio::test]
async fn test_non_200_status_is_surfaced() {
    let (tenant_url, _seen) = spawn_remote(StatusCode::FORBIDDEN).await;

    let client = ConfigApiClient::new();
    let err = client
        .create_workload(&tenant_url, "demo", "abc123", &Workload::demo_nginx("demo"))
        .await
        .unwrap_err();

    match &err {
        ClientError::RemoteStatus(status) => assert_eq!(*status, StatusCode::FORBIDDEN),
        other => panic!("expected RemoteStatus, got {other:?}"),
    }
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_created_is_not_success() {
    // Only exactly 200 counts; 201 is still an error.
    let (tenant_url, _seen) = spawn_remote(StatusCode::CREATED).await;

    let client = ConfigApiClient::new();
    let err = client
        .create_workload(&tenant_url, "demo", "abc123", &Workload::demo_nginx("demo"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RemoteStatus(StatusCode::CREATED)));
}

#[tokio::test]
async fn test_unreachable_tenant_is_transport_error() {
    // Grab a free port and release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ConfigApiClient::new();
    let err = client
        .create_workload(
            &format!("http://{addr}"),
            "demo",
            "abc123",
            &Workload::demo_nginx("demo"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_tenant_url_is_transport_error() {
    let client = ConfigApiClient::new();
    let err = client
        .create_workload("not a url", "demo", "abc123", &Workload::demo_nginx("demo"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
