use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::course::Model as Course;
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Default)]
pub struct CreateCourseResponse {
    pub id: i64,
    pub name: String,
}

/// POST /courses
///
/// Create a new course. No uniqueness check: duplicate names are permitted by
/// the store and not rejected here.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` if the name is blank
/// - `500 Internal Server Error` on store failure
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> (StatusCode, Json<ApiResponse<CreateCourseResponse>>) {
    let name = req.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Course name is required.")),
        );
    }

    match Course::create(state.db(), name).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CreateCourseResponse {
                    id: course.id,
                    name: course.name,
                },
                "Course successfully created.",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to create course.")),
            )
        }
    }
}
