use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::course::Entity as CourseEntity;
use sea_orm::EntityTrait;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
}

/// GET /courses
///
/// List all courses. Public: the attendance form uses this to populate its
/// course dropdown.
pub async fn list_courses(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<CourseResponse>>>) {
    match CourseEntity::find().all(state.db()).await {
        Ok(courses) => {
            let data = courses
                .into_iter()
                .map(|c| CourseResponse {
                    id: c.id,
                    name: c.name,
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load courses.")),
            )
        }
    }
}
