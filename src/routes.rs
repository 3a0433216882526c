use crate::{
    handler::fallback_handler::not_found, handler::ping_handler::ping,
    handler::test_function_handler::test_function_handler, state::AppState,
};
use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

const API_PREFIX: &str = "/api";

pub fn create_router(app_state: AppState, trigger_route: &str) -> Router {
    let mut router = Router::new()
        .route("/", get(ping))
        .route(trigger_route, any(test_function_handler));

    // The local dev proxy strips `/api` before forwarding
    if let Some(local_route) = local_alias(trigger_route) {
        router = router.route(local_route, any(test_function_handler));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn local_alias(trigger_route: &str) -> Option<&str> {
    trigger_route
        .strip_prefix(API_PREFIX)
        .filter(|rest| rest.starts_with('/') && *rest != "/")
}

