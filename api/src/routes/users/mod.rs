use axum::{
    Router,
    routing::{get, post, put},
};
use common::state::AppState;

mod get;
mod post;
mod put;

pub use get::list_users;
pub use post::create_user;
pub use put::assign_course;

/// User management. The whole group is mounted behind the admin guard in
/// `routes::routes`.
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/{user_id}/course", put(assign_course))
}
