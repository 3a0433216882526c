use axum::response::IntoResponse;

// Liveness probe for the host process, separate from the function trigger
pub async fn ping() -> impl IntoResponse {
    "pong"
}
