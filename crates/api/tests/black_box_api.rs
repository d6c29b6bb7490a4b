use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode as UpstreamStatus, response::IntoResponse, routing::post, Json, Router};
use reqwest::StatusCode;
use serde_json::{json, Value};

use fullstack_api::app::{build_app, AppServices};
use fullstack_api::config::ApiConfig;
use fullstack_chat::{
    ChatConfig, ChatProxy, CredentialProvider, EnvCredentials, OpenAiCompatibleClient,
    StaticCredentials,
};
use fullstack_items::ItemStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, bound to an ephemeral port.
    async fn spawn(services: AppServices) -> Self {
        let app = build_app(services, &ApiConfig::default()).expect("failed to build app");
        let (base_url, handle) = serve(app).await;
        Self { base_url, handle }
    }

    /// Server whose chat upstream is `upstream_url` (or an unreachable default).
    async fn with_chat(
        credentials: impl CredentialProvider + 'static,
        upstream_url: Option<String>,
    ) -> Self {
        let chat_config = ChatConfig {
            base_url: upstream_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
            timeout: Duration::from_secs(5),
            ..ChatConfig::default()
        };
        let client = OpenAiCompatibleClient::new(&chat_config).expect("failed to build client");
        let chat = ChatProxy::new(Arc::new(credentials), Arc::new(client), chat_config.model);
        Self::spawn(AppServices::new(Arc::new(ItemStore::new()), chat)).await
    }

    async fn spawn_default() -> Self {
        Self::with_chat(StaticCredentials::absent(), None).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

/// Fake OpenAI-compatible upstream answering every completion with `reply`.
async fn fake_upstream(
    status: UpstreamStatus,
    reply: Value,
) -> (String, tokio::task::JoinHandle<()>) {
    let router = Router::new().route(
        "/chat/completions",
        post(move |Json(body): Json<Value>| {
            let reply = reply.clone();
            async move {
                // Echo the number of messages so tests can see what was sent.
                let count = body["messages"].as_array().map(|m| m.len()).unwrap_or(0);
                let mut reply = reply;
                if let Some(content) = reply.pointer_mut("/choices/0/message/content") {
                    let text = content.as_str().unwrap_or("").to_string();
                    *content = json!(format!("{text} ({count} messages)"));
                }
                (status, Json(reply)).into_response()
            }
        }),
    );
    serve(router).await
}

#[tokio::test]
async fn status_and_health() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/api/status")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "API is running"}));

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_store_lists_placeholders() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let res = client.get(srv.url("/api/items")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let items: Vec<Value> = res.json().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["name"], "Sample Item 1");
        assert_eq!(items[0]["price"], 19.99);
        assert_eq!(items[1]["id"], 2);
        assert_eq!(items[1]["name"], "Sample Item 2");
        assert_eq!(items[1]["price"], 29.99);
        assert!(!items[0]["created_at"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn create_then_list_returns_only_real_items() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/items"))
        .json(&json!({ "name": "Widget", "price": 9.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Widget");
    assert!(created["description"].is_null());
    assert_eq!(created["price"], 9.99);

    let res = client.get(srv.url("/api/items")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let items: Vec<Value> = res.json().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Widget");
    assert_eq!(items[0]["price"], 9.99);
    assert!(!items[0]["created_at"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let url = srv.url("/api/items");
            tokio::spawn(async move {
                let res = client
                    .post(url)
                    .json(&json!({
                        "name": format!("item-{i}"),
                        "description": "bulk",
                        "price": i
                    }))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(res.status(), StatusCode::OK);
                let body: Value = res.json().await.unwrap();
                body["id"].as_u64().unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for h in handles {
        ids.insert(h.await.unwrap());
    }
    assert_eq!(ids, (1..=20).collect::<HashSet<u64>>());

    let items: Vec<Value> = client
        .get(srv.url("/api/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.len(), 20);
}

#[tokio::test]
async fn create_item_missing_price_is_a_validation_error() {
    let srv = TestServer::spawn_default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/items"))
        .json(&json!({ "name": "Widget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["detail"].as_str().unwrap().contains("price"));

    // Nothing was stored: placeholders still shown.
    let items: Vec<Value> = client
        .get(srv.url("/api/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items[0]["name"], "Sample Item 1");
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/calculate"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn calculate_normalizes_operation() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/calculate"))
        .json(&json!({ "num1": 10, "num2": 4, "operation": "DIVIDE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "result": 2.5, "operation": "divide", "num1": 10.0, "num2": 4.0 })
    );
}

#[tokio::test]
async fn divide_by_zero_is_a_client_error_without_result() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/calculate"))
        .json(&json!({ "num1": 10, "num2": 0, "operation": "divide" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"], "division_by_zero");
    assert_eq!(body["detail"], "Division by zero is not allowed");
}

#[tokio::test]
async fn overflowing_result_is_a_client_error() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/calculate"))
        .json(&json!({ "num1": 1e308, "num2": 1e308, "operation": "add" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"], "non_finite_result");
}

#[tokio::test]
async fn unsupported_operation_is_a_client_error() {
    let srv = TestServer::spawn_default().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/calculate"))
        .json(&json!({ "num1": 1, "num2": 2, "operation": "div" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unsupported_operation");
    assert!(body["message"].as_str().unwrap().contains("div"));
}

#[tokio::test]
async fn chat_without_credential_is_a_server_error() {
    let srv = TestServer::with_chat(
        EnvCredentials::new("FULLSTACK_API_TEST_KEY_NEVER_SET"),
        None,
    )
    .await;

    let res = reqwest::Client::new()
        .post(srv.url("/api/chat"))
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "configuration_error");
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("FULLSTACK_API_TEST_KEY_NEVER_SET"));
    assert!(detail.contains("Set it before retrying"));
}

#[tokio::test]
async fn chat_honors_key_exported_after_startup() {
    const VAR: &str = "FULLSTACK_API_TEST_KEY_EXPORTED_LATE";
    let (upstream, _upstream_handle) = fake_upstream(
        UpstreamStatus::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "late key ok" } }] }),
    )
    .await;
    let srv = TestServer::with_chat(EnvCredentials::new(VAR), Some(upstream)).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/chat"))
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // SAFETY: the variable name is unique to this test; nothing else reads or writes it.
    unsafe { std::env::set_var(VAR, "exported-after-startup") };

    let res = client
        .post(srv.url("/api/chat"))
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "response": "late key ok (1 messages)" }));
}

#[tokio::test]
async fn chat_forwards_history_and_returns_reply() {
    let (upstream, _upstream_handle) = fake_upstream(
        UpstreamStatus::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "hi there" } }] }),
    )
    .await;
    let srv = TestServer::with_chat(StaticCredentials::new("test-key"), Some(upstream)).await;

    let res = reqwest::Client::new()
        .post(srv.url("/api/chat"))
        .json(&json!({
            "message": "bye",
            "conversation_history": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "hello" }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "response": "hi there (3 messages)" }));
}

#[tokio::test]
async fn chat_upstream_failure_is_a_server_error() {
    let (upstream, _upstream_handle) = fake_upstream(
        UpstreamStatus::SERVICE_UNAVAILABLE,
        json!({ "error": { "message": "over capacity" } }),
    )
    .await;
    let srv = TestServer::with_chat(StaticCredentials::new("test-key"), Some(upstream)).await;

    let res = reqwest::Client::new()
        .post(srv.url("/api/chat"))
        .json(&json!({ "message": "hello", "conversation_history": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "upstream_error");
    assert!(body["detail"].as_str().unwrap().contains("over capacity"));
}

#[tokio::test]
async fn cors_allows_configured_origin_with_credentials() {
    let srv = TestServer::spawn_default().await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, srv.url("/api/items"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let headers = res.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:3000");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert!(
        headers["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .contains("POST")
    );
}

#[tokio::test]
async fn cors_does_not_echo_untrusted_origin() {
    let srv = TestServer::spawn_default().await;

    let res = reqwest::Client::new()
        .get(srv.url("/api/status"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("access-control-allow-origin").is_none());

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, srv.url("/api/items"))
        .header("origin", "http://evil.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(res.headers().get("access-control-allow-origin").is_none());
}
