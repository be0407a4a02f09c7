use axum::{Router, routing::get};
use common::state::AppState;

mod get;

pub use get::get_me;

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/", get(get_me))
}
