use crate::{config::AppConfig, middleware::apply_middleware_stack, routes};
use axum::{Router, routing::get};

/// Router with the health routes, the JSON 404 fallback and the middleware
/// stack. `/` and `/health` share one handler.
pub fn build_router(config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/", get(routes::health::get_health))
        .route("/health", get(routes::health::get_health))
        .fallback(routes::not_found);

    apply_middleware_stack(router, config)
}
