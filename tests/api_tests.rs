use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use user_service::{app, infrastructure::config::ServiceInfo, AppState};

fn test_app() -> Router {
    app::router(AppState::new(ServiceInfo::default()), Duration::from_secs(5))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, user) = send(app, Method::POST, "/users", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    user
}

#[tokio::test]
async fn test_root_banner() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(endpoints, app::system::ENDPOINTS);
    assert!(endpoints.iter().any(|e| e.contains("/docs")));
}

#[tokio::test]
async fn test_create_and_get_user() {
    let app = test_app();
    let user = create(&app, json!({"name": "Alice", "email": "a@x.com", "age": 30})).await;

    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["age"], 30);
    assert!(chrono::DateTime::parse_from_rfc3339(user["created_at"].as_str().unwrap()).is_ok());

    let (status, fetched) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_create_without_age_returns_null_age() {
    let app = test_app();
    let user = create(&app, json!({"name": "Bob", "email": "b@x.com"})).await;
    assert_eq!(user["age"], Value::Null);
}

#[tokio::test]
async fn test_get_missing_user_is_404_with_detail() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/users/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "用户不存在");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_invalid_ids_are_validation_errors() {
    let app = test_app();
    for uri in ["/users/0", "/users/-1", "/users/abc"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert!(body["detail"].is_string());
    }

    // id 0 在更新和删除上同样是校验错误，而不是 404
    let (status, body) = send(&app, Method::PUT, "/users/0", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, body) = send(&app, Method::DELETE, "/users/0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app();
    for uri in ["/nope", "/users/"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["detail"], "Not Found");
        assert_eq!(body["code"], 404);
    }
}

#[tokio::test]
async fn test_wrong_method_returns_json_405() {
    let app = test_app();
    create(&app, json!({"name": "Alice", "email": "a@x.com"})).await;

    let (status, body) = send(&app, Method::PATCH, "/users/1", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], "Method Not Allowed");
    assert_eq!(body["code"], 405);

    let (status, body) = send(&app, Method::DELETE, "/health", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], "Method Not Allowed");

    // 方法不匹配的请求不会修改数据
    let (_, user) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(user["name"], "Alice");
}

#[tokio::test]
async fn test_openapi_document_and_docs_page() {
    let app = test_app();
    let (status, doc) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["openapi"].is_string());
    assert!(doc["paths"]["/users/{id}"]["put"].is_object());
    assert!(doc["paths"]["/users/search/"]["get"].is_object());

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/openapi.json"));
}

#[tokio::test]
async fn test_create_with_bad_payload_is_rejected() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/users", Some(json!({"name": "NoEmail"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "X", "email": "x@x.com", "age": "old"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // 失败的创建不会消耗 id
    let user = create(&app, json!({"name": "Ok", "email": "ok@x.com"})).await;
    assert_eq!(user["id"], 1);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = test_app();
    for i in 0..12 {
        create(&app, json!({"name": format!("u{}", i), "email": "u@x.com"})).await;
    }

    let (status, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);

    let (_, body) = send(&app, Method::GET, "/users?skip=10&limit=5", None).await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![11, 12]);

    let (_, body) = send(&app, Method::GET, "/users?skip=100", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, "/users?skip=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_partial_update() {
    let app = test_app();
    create(&app, json!({"name": "Alice", "email": "a@x.com", "age": 30})).await;

    let (status, user) = send(&app, Method::PUT, "/users/1", Some(json!({"name": "Alicia"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Alicia");
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["age"], 30);

    let (_, user) = send(&app, Method::PUT, "/users/1", Some(json!({"age": null}))).await;
    assert_eq!(user["age"], Value::Null);
    assert_eq!(user["name"], "Alicia");

    let (status, _) = send(&app, Method::PUT, "/users/1", Some(json!({"email": null}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(&app, Method::PUT, "/users/99", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "用户不存在");
}

#[tokio::test]
async fn test_delete_user() {
    let app = test_app();
    let user = create(&app, json!({"name": "Alice", "email": "a@x.com"})).await;

    let (status, body) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "用户删除成功");
    assert_eq!(body["deleted_user"], user);

    let (status, _) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let next = create(&app, json!({"name": "Bob", "email": "b@x.com"})).await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_search() {
    let app = test_app();
    create(&app, json!({"name": "Alice", "email": "alice@x.com"})).await;
    create(&app, json!({"name": "bob", "email": "bob@y.com"})).await;

    let (status, body) = send(&app, Method::GET, "/users/search/?name=A", None).await;
    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Alice");

    let (_, body) = send(&app, Method::GET, "/users/search/?name=B&email=X.COM", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = send(&app, Method::GET, "/users/search/?email=Y.com", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/users/search/", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_scenario_with_health() {
    let app = test_app();
    let alice = create(&app, json!({"name": "Alice", "email": "a@x.com"})).await;
    let bob = create(&app, json!({"name": "bob", "email": "b@x.com"})).await;
    assert_eq!(alice["id"], 1);
    assert_eq!(bob["id"], 2);

    let (_, body) = send(&app, Method::GET, "/users/search/?name=A", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    send(&app, Method::DELETE, "/users/1", None).await;
    let (status, _) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["total_users"], 1);
}

#[tokio::test]
async fn test_request_id_header() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}
