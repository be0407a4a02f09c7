use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;

mod get;
mod post;

pub use get::{export_records_csv, list_records};
pub use post::submit_attendance;

use crate::auth::guards::allow_authenticated;

/// Submission is public (the attendance form requires no login); reporting
/// and export are for signed-in staff.
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_attendance))
        .route("/", get(list_records).route_layer(from_fn(allow_authenticated)))
        .route(
            "/export",
            get(export_records_csv).route_layer(from_fn(allow_authenticated)),
        )
}
