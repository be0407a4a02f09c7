use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;

mod get;
mod post;

pub use get::list_courses;
pub use post::create_course;

use crate::auth::guards::allow_admin;

/// Listing is public (it feeds the attendance form dropdown); creation is
/// admin-only.
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/", post(create_course).route_layer(from_fn(allow_admin)))
}
