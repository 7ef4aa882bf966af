//! Attendance status customization for the food delivery HR module.
//!
//! Adds the `On Duty` status for delivery staff, guards attendance records
//! against unknown statuses before the framework's own validation runs, and
//! serves the status options used to populate the attendance form.

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod validation;

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors_max_age = state.config.cors_max_age();

    Router::new()
        .route(
            "/api/attendance/status-options",
            get(handlers::attendance::get_status_options),
        )
        .route(
            "/api/attendance/validate",
            post(handlers::attendance::validate_attendance),
        )
        .fallback(handlers::attendance::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(cors_max_age),
                ),
        )
        .layer(axum_middleware::from_fn(middleware::request_id))
        .with_state(state)
}
