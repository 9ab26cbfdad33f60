//! End-to-end tests against a running mock service.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

const RULES: &str = r#"{
    "rules": [
        {"path": "/api/users", "response": {"users": [{"id": 1, "name": "alice"}, {"id": 2, "name": "bob"}]}, "code": 200},
        {"path": "/api/products", "response": {"data": []}, "code": 404},
        {"path": "/api/users", "response": {"shadowed": true}, "code": 500},
        {"path": "/api/created", "response": {"ok": true}, "code": 201},
        {"path": "/api/no-code", "response": {"defaulted": true}},
        {"path": "/api/no-body", "code": 202},
        {"path": "/api/Users", "response": {"capital": true}},
        {"path": "/api/broken", "code": 1000},
        {"path": "/api/continue", "response": {"a": 1}, "code": 100},
        {"path": "/api/hello world", "response": {"decoded": true}}
    ]
}"#;

async fn get_json(service: &common::TestService, path: &str) -> (StatusCode, Value) {
    let res = service
        .client
        .get(service.url(path))
        .send()
        .await
        .expect("service unreachable");
    let status = res.status();
    (status, res.json().await.expect("body should be JSON"))
}

#[tokio::test]
async fn test_round_trip() {
    let service = common::start_service(RULES).await;

    let (status, body) = get_json(&service, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"users": [{"id": 1, "name": "alice"}, {"id": 2, "name": "bob"}]})
    );

    let (status, body) = get_json(&service, "/api/products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"data": []}));

    let (status, body) = get_json(&service, "/api/unknown").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_default_response_is_exact() {
    let service = common::start_service(RULES).await;
    let res = service
        .client
        .get(service.url("/nothing/here"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(res.text().await.unwrap(), "{}");
}

#[tokio::test]
async fn test_status_defaults_and_missing_body() {
    let service = common::start_service(RULES).await;

    let (status, body) = get_json(&service, "/api/created").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"ok": true}));

    let (status, body) = get_json(&service, "/api/no-code").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"defaulted": true}));

    let (status, body) = get_json(&service, "/api/no-body").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_every_method_resolves_the_same_rule() {
    let service = common::start_service(RULES).await;

    for method in [
        reqwest::Method::GET,
        reqwest::Method::POST,
        reqwest::Method::PUT,
        reqwest::Method::PATCH,
        reqwest::Method::DELETE,
    ] {
        let res = service
            .client
            .request(method.clone(), service.url("/api/products"))
            .body(r#"{"ignored": true}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "method {method}");
    }
}

#[tokio::test]
async fn test_exact_case_sensitive_matching() {
    let service = common::start_service(RULES).await;

    let (_, body) = get_json(&service, "/api/Users").await;
    assert_eq!(body, json!({"capital": true}));

    let (_, body) = get_json(&service, "/api/users/").await;
    assert_eq!(body, json!({}));

    let (_, body) = get_json(&service, "/api/users/1").await;
    assert_eq!(body, json!({}));

    let (_, body) = get_json(&service, "/api").await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_query_string_is_not_part_of_the_path() {
    let service = common::start_service(RULES).await;

    let (status, body) = get_json(&service, "/api/products?page=2&tags=a&tags=b").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_percent_encoded_path_is_decoded() {
    let service = common::start_service(RULES).await;
    let (_, body) = get_json(&service, "/api/hello%20world").await;
    assert_eq!(body, json!({"decoded": true}));
}

#[tokio::test]
async fn test_unsendable_status_becomes_500() {
    let service = common::start_service(RULES).await;
    for path in ["/api/broken", "/api/continue"] {
        let (status, body) = get_json(&service, path).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        assert_eq!(body, json!({}), "{path}");
    }
}

#[tokio::test]
async fn test_health_probe() {
    let service = common::start_service(RULES).await;
    let (status, body) = get_json(&service, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "mock-service"}));
}

#[tokio::test]
async fn test_health_probe_can_be_disabled() {
    let service = common::start_service_with(RULES, |config| {
        config.health.enabled = false;
    })
    .await;
    let (status, body) = get_json(&service, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let service = common::start_service(RULES).await;

    let res = service
        .client
        .get(service.url("/api/users"))
        .header("x-request-id", "test-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "test-123");

    let res = service.client.get(service.url("/api/users")).send().await.unwrap();
    assert!(res.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_concurrent_requests() {
    let service = common::start_service(RULES).await;

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let client = service.client.clone();
            let url = if i % 2 == 0 {
                service.url("/api/users")
            } else {
                service.url("/api/unknown")
            };
            tokio::spawn(async move { client.get(url).send().await.map(|r| r.status()) })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), StatusCode::OK);
    }
}
