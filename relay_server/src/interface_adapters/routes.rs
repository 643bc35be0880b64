use crate::interface_adapters::handlers::wish_proxy::wish_proxy;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/api/wishProxy", get(wish_proxy))
        .with_state(state)
}
