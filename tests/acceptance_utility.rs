use todo_api::{application::todo_service::TodoServiceImpl, http::routing, http::routes::todos, infrastructure::memory_repo::InMemoryTodoRepository};
use axum::body::to_bytes;
use axum::Router;
use serde_json::{json, Value};

fn app() -> Router {
    let service = TodoServiceImpl::new(InMemoryTodoRepository::seeded());
    routing::app(todos::AppState { service })
}

#[tokio::test]
async fn acceptance_health() {
    let (status, body) = get(&app(), "/api/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Backend is running!");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn acceptance_calculate() {
    let app = app();
    let (status, body) = get(&app, "/api/calculate?a=7&b=2&operation=Divide").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "a": 7, "b": 2, "operation": "Divide", "result": 3.5 }));

    let (status, body) = get(&app, "/api/calculate?a=7&b=0&operation=divide").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Cannot divide by zero" }));

    let (status, body) = get(&app, "/api/calculate?a=1&b=1&operation=pow").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Unknown operation: pow" }));
}

#[tokio::test]
async fn acceptance_random() {
    let app = app();
    let (status, body) = get(&app, "/api/random").await;
    assert_eq!(status, 200);
    assert_eq!((body["min"].as_i64(), body["max"].as_i64()), (Some(1), Some(100)));
    let n = body["randomNumber"].as_i64().unwrap();
    assert!((1..=100).contains(&n));

    let (_, body) = get(&app, "/api/random?min=5&max=5").await;
    assert_eq!(body["randomNumber"], 5);

    let (status, _) = get(&app, "/api/random?min=10&max=1").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn acceptance_greet() {
    let app = app();
    let (_, body) = get(&app, "/api/greet?name=Ada").await;
    assert_eq!(body, json!({ "message": "Hello, Ada!" }));
    let (_, body) = get(&app, "/api/greet").await;
    assert_eq!(body, json!({ "message": "Hello, World!" }));
}

#[tokio::test]
async fn acceptance_malformed_queries_use_error_shape() {
    let app = app();
    for path in ["/api/calculate?a=x&b=1&operation=add", "/api/calculate?a=1&b=1", "/api/random?min=abc"] {
        let (status, body) = get(&app, path).await;
        assert_eq!(status, 400, "{path}");
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{path}: {body}");
    }
}

#[tokio::test]
async fn acceptance_openapi_document_lists_routes() {
    let app = app();
    let (status, doc) = get(&app, "/api/docs/spec.json").await;
    assert_eq!(status, 200);
    assert_eq!(doc["paths"]["/api/todos"]["get"]["operationId"], "GetTodos");
    assert_eq!(doc["paths"]["/api/todos/{id}/toggle"]["put"]["operationId"], "ToggleTodo");
    assert!(doc["paths"]["/api/calculate"].is_object());
}

async fn get(app: &Router, path: &str) -> (u16, Value) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let res = app.clone().oneshot(Request::builder().uri(path).body(Body::empty()).unwrap()).await.unwrap();
    let status = res.status().as_u16();
    let body = serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap();
    (status, body)
}
