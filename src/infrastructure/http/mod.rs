//! HTTP API routes

mod ops_routes;
mod user_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Queue routes
        .route("/add-user", post(user_routes::add_user))
        .route("/get-user", get(user_routes::get_user))
        // Operational routes
        .route("/healthz", get(ops_routes::health_check))
        .route("/metrics", get(ops_routes::metrics))
}

/// Assemble the full application: routes, middleware and shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    create_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    fn create_test_app(queue_capacity: usize) -> Router {
        let config = AppConfig {
            queue_capacity,
            ..AppConfig::default()
        };
        build_router(Arc::new(AppState::new(config)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn add_user_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/add-user")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_user_created() {
        let app = create_test_app(10);

        let (status, body) = send(&app, add_user_request(r#"{"data": "alice"}"#)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"error": false, "is_added": true}));
    }

    #[tokio::test]
    async fn test_add_user_missing_data() {
        let app = create_test_app(10);

        let (status, body) = send(&app, add_user_request("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": true, "is_added": false}));
    }

    #[tokio::test]
    async fn test_add_user_rejects_bad_payloads() {
        let app = create_test_app(10);

        for raw in [
            r#"{"data": ""}"#,
            r#"{"data": null}"#,
            r#"{"data": 42}"#,
            r#"{"data": ["alice"]}"#,
            "not json",
        ] {
            let (status, body) = send(&app, add_user_request(raw)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
            assert_eq!(body, json!({"error": true, "is_added": false}));
        }

        let (_, body) = send(&app, get_request("/metrics")).await;
        assert_eq!(body, json!({"queue_size": 0}));
    }

    #[tokio::test]
    async fn test_add_user_without_content_type() {
        let app = create_test_app(10);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/add-user")
            .body(Body::from(r#"{"data": "alice"}"#))
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": true, "is_added": false}));
    }

    #[tokio::test]
    async fn test_add_user_queue_full() {
        let app = create_test_app(2);
        for name in ["a", "b"] {
            let (status, _) = send(&app, add_user_request(&json!({"data": name}).to_string())).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&app, add_user_request(r#"{"data": "c"}"#)).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({"error": true, "is_added": false}));

        let (_, body) = send(&app, get_request("/metrics")).await;
        assert_eq!(body, json!({"queue_size": 2}));
    }

    #[tokio::test]
    async fn test_get_user_empty() {
        let app = create_test_app(10);

        let (status, body) = send(&app, get_request("/get-user")).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, json!({"error": false, "data": null}));
    }

    #[tokio::test]
    async fn test_get_user_after_add() {
        let app = create_test_app(10);
        send(&app, add_user_request(r#"{"data": "alice"}"#)).await;

        let (status, body) = send(&app, get_request("/get-user")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": false, "data": "alice"}));

        let (status, _) = send(&app, get_request("/get-user")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_get_user_preserves_order() {
        let app = create_test_app(10);
        for name in ["alice", "bob", "carol"] {
            send(&app, add_user_request(&json!({"data": name}).to_string())).await;
        }

        for name in ["alice", "bob", "carol"] {
            let (status, body) = send(&app, get_request("/get-user")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["data"], json!(name));
        }
    }

    #[tokio::test]
    async fn test_metrics_reports_depth() {
        let app = create_test_app(10);
        for name in ["a", "b", "c"] {
            send(&app, add_user_request(&json!({"data": name}).to_string())).await;
        }
        send(&app, get_request("/get-user")).await;

        let (status, body) = send(&app, get_request("/metrics")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"queue_size": 2}));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app(10);

        let (status, body) = send(&app, get_request("/healthz")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let app = create_test_app(10);

        let response = app.clone().oneshot(get_request("/add-user")).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_adds_respect_capacity() {
        let app = create_test_app(50);

        let tasks: Vec<_> = (0..100)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let body = json!({"data": format!("user-{i}")}).to_string();
                    send(&app, add_user_request(&body)).await.0
                })
            })
            .collect();

        let mut created = 0;
        let mut rejected = 0;
        for task in tasks {
            match task.await.unwrap() {
                StatusCode::CREATED => created += 1,
                StatusCode::TOO_MANY_REQUESTS => rejected += 1,
                other => panic!("unexpected status {other}"),
            }
        }
        assert_eq!(created, 50);
        assert_eq!(rejected, 50);

        let (_, body) = send(&app, get_request("/metrics")).await;
        assert_eq!(body, json!({"queue_size": 50}));
    }
}
