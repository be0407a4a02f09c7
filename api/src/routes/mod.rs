//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness check (public)
//! - `/auth` → login (public)
//! - `/attendance` → attendance submission (public) and per-course
//!   reporting/export (authenticated)
//! - `/courses` → course listing (public, feeds the submission form) and
//!   creation (admin-only)
//! - `/users` → user management and course assignment (admin-only)
//! - `/me` → resolve the signed-in teacher's role and assigned course

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::routes::{
    attendance::attendance_routes, auth::auth_routes, courses::courses_routes,
    health::health_routes, me::me_routes, users::users_routes,
};
use axum::{Router, middleware::from_fn};
use common::state::AppState;

pub mod attendance;
pub mod auth;
pub mod courses;
pub mod health;
pub mod me;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// The state is injected here so tests can build the exact production router
/// around an in-memory database.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/attendance", attendance_routes())
        .nest("/courses", courses_routes())
        .nest("/users", users_routes().route_layer(from_fn(allow_admin)))
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
        .with_state(app_state)
}
