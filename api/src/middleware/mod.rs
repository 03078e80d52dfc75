//! Serving-layer middleware shared by every route.

pub mod request_id;

use crate::{config::AppConfig, errors::ApiError};
use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    extract::Request,
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower::{
    ServiceBuilder,
    limit::GlobalConcurrencyLimitLayer,
    timeout::{TimeoutLayer, error::Elapsed},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use request_id::RequestId;

/// Wrap `router` in the middleware stack.
///
/// Outermost first:
/// 1. Request ID
/// 2. Tracing
/// 3. CORS
/// 4. Panic recovery
/// 5. Request timeout (408 JSON)
/// 6. Concurrency limit, one semaphore shared by every route
pub fn apply_middleware_stack(router: Router, config: &AppConfig) -> Router {
    router
        .layer(GlobalConcurrencyLimitLayer::new(
            config.max_concurrent_requests,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(create_cors_layer(config))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(middleware::from_fn(request_id::add_request_id))
}

fn make_request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(RequestId::as_str)
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

fn create_cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match config
        .frontend_origin
        .as_deref()
        .map(HeaderValue::from_str)
    {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            warn!("FRONTEND_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(cors::Any)
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
