pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::export::handlers::handle_export;
use crate::plan::handlers::handle_plan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handle_chat))
        .route("/api/v1/plan", post(handle_plan))
        .route("/api/v1/export", post(handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::ratelimit::FixedWindowLimiter;

    /// Router in mock mode (no API key) with a tiny plan quota.
    fn test_router(plan_max: u32) -> Router {
        let config = Config {
            openai_api_key: None,
            port: 0,
            rust_log: "info".into(),
            plan_rate_limit_max: plan_max,
            plan_rate_limit_window_secs: 60,
        };
        let state = AppState {
            llm: LlmClient::new("test-key".into()),
            plan_limiter: Arc::new(FixedWindowLimiter::new(
                config.plan_rate_limit_max,
                Duration::from_secs(config.plan_rate_limit_window_secs),
            )),
            config,
        };
        build_router(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_router(5)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_requires_messages() {
        let response = test_router(5)
            .oneshot(post_json("/api/v1/chat", r#"{"persona": "engineer"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_mock_mode_replies() {
        let body = r#"{"persona": "life", "messages": [{"role": "user", "content": "hi"}]}"#;
        let response = test_router(5)
            .oneshot(post_json("/api/v1/chat", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_plan_mock_mode_returns_plan() {
        let response = test_router(5)
            .oneshot(post_json("/api/v1/plan", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_plan_over_quota_returns_429_with_retry_after() {
        let router = test_router(2);

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(post_json("/api/v1/plan", "{}"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = router
            .clone()
            .oneshot(post_json("/api/v1/plan", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .expect("429 must carry Retry-After")
            .to_str()
            .unwrap()
            .parse::<u64>()
            .unwrap();
        assert!(retry_after > 0);
    }

    #[tokio::test]
    async fn test_plan_quotas_are_per_client() {
        let router = test_router(1);

        let mut first = post_json("/api/v1/plan", "{}");
        first
            .headers_mut()
            .insert("x-forwarded-for", "203.0.113.1".parse().unwrap());
        assert_eq!(
            router.clone().oneshot(first).await.unwrap().status(),
            StatusCode::OK
        );

        // Same client again: over quota
        let mut second = post_json("/api/v1/plan", "{}");
        second
            .headers_mut()
            .insert("x-forwarded-for", "203.0.113.1".parse().unwrap());
        assert_eq!(
            router.clone().oneshot(second).await.unwrap().status(),
            StatusCode::TOO_MANY_REQUESTS
        );

        // Different client: fresh quota
        let mut other = post_json("/api/v1/plan", "{}");
        other
            .headers_mut()
            .insert("x-forwarded-for", "203.0.113.2".parse().unwrap());
        assert_eq!(
            router.clone().oneshot(other).await.unwrap().status(),
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_export_renders_readme() {
        let body = r#"{
            "format": "readme",
            "project": {"title": "T", "description": "D"},
            "milestones": [{"title": "m1", "description": "", "complete": true}]
        }"#;
        let response = test_router(5)
            .oneshot(post_json("/api/v1/export", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
