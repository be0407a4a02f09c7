use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::user::Entity as UserEntity;
use sea_orm::EntityTrait;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub admin: bool,
    pub role: String,
    pub course: Option<String>,
}

/// GET /users
///
/// List all users. The admin dashboard uses this to populate the teacher
/// dropdown for course assignment.
pub async fn list_users(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<UserSummary>>>) {
    match UserEntity::find().all(state.db()).await {
        Ok(users) => {
            let data = users
                .into_iter()
                .map(|u| UserSummary {
                    id: u.id,
                    email: u.email,
                    admin: u.admin,
                    role: u.role,
                    course: u.course,
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Users retrieved")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch users");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load teachers.")),
            )
        }
    }
}
