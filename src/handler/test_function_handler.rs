use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};

pub const TEST_FUNCTION_BODY: &str = "Test function works!";

/// HTTP trigger for the test function.
///
/// Every request gets the same `200 OK` plain-text reply. Method, headers and
/// body are accepted as-is and never read, so there is no failure path here.
pub async fn test_function_handler(
    State(app_state): State<AppState>,
    _request: Request,
) -> impl IntoResponse {
    app_state.metrics.log_request_processed();

    (StatusCode::OK, TEST_FUNCTION_BODY)
}
