use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{Method, Request, StatusCode, header},
    response::IntoResponse,
};
use mockall::mock;
use std::sync::Arc;
use test_function_host::{
    handler::test_function_handler::{TEST_FUNCTION_BODY, test_function_handler},
    metrics::Metrics,
    state::AppState,
};

mock! {
    pub Metrics {}
    impl Metrics for Metrics {
        fn log_request_processed(&self);
    }
}

fn create_test_app_state(mock_metrics: MockMetrics) -> AppState {
    AppState {
        metrics: Arc::new(mock_metrics),
    }
}

fn expect_one_log() -> MockMetrics {
    let mut mock_metrics = MockMetrics::new();
    mock_metrics
        .expect_log_request_processed()
        .times(1)
        .return_const(());
    mock_metrics
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_handler_returns_200_on_bare_get() {
    let app_state = create_test_app_state(expect_one_log());
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/test-function")
        .body(Body::empty())
        .unwrap();

    let response = test_function_handler(State(app_state), request)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Test function works!");
}

#[tokio::test]
async fn test_handler_ignores_json_body() {
    let app_state = create_test_app_state(expect_one_log());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/test-function")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"azure","nested":{"values":[1,2,3]}}"#))
        .unwrap();

    let response = test_function_handler(State(app_state), request)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, TEST_FUNCTION_BODY);
}

#[tokio::test]
async fn test_handler_accepts_invalid_headers_and_body() {
    let app_state = create_test_app_state(expect_one_log());
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/test-function?x=&&=y")
        .header(header::CONTENT_TYPE, "not a mime type")
        .header(header::CONTENT_LENGTH, "0")
        .body(Body::from("{ this is not json"))
        .unwrap();

    let response = test_function_handler(State(app_state), request)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, TEST_FUNCTION_BODY);
}

#[tokio::test]
async fn test_handler_replies_with_plain_text() {
    let app_state = create_test_app_state(expect_one_log());
    let request = Request::new(Body::empty());

    let response = test_function_handler(State(app_state), request)
        .await
        .into_response();

    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/plain; charset=utf-8");
}

#[tokio::test]
async fn test_handler_is_stateless_across_invocations() {
    let mut mock_metrics = MockMetrics::new();
    mock_metrics
        .expect_log_request_processed()
        .times(5)
        .return_const(());
    let app_state = create_test_app_state(mock_metrics);

    let methods = [
        Method::GET,
        Method::POST,
        Method::DELETE,
        Method::PATCH,
        Method::GET,
    ];
    for method in methods {
        let request = Request::builder()
            .method(method)
            .body(Body::empty())
            .unwrap();

        let response = test_function_handler(State(app_state.clone()), request)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, TEST_FUNCTION_BODY);
    }
}
