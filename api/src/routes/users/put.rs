use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use common::state::AppState;
use db::models::user::Model as User;
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct AssignCourseRequest {
    #[serde(default)]
    pub course: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AssignCourseResponse {
    pub id: i64,
    pub email: String,
    pub course: Option<String>,
}

/// PUT /users/{user_id}/course
///
/// Assign a course name to a user. Full overwrite, last write wins, no
/// history. Deliberately mirrors the original admin flow: there is no check
/// that the course name refers to an existing course, and no check that the
/// target user has role "teacher".
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` if the course name is blank
/// - `404 Not Found` if the user does not exist
/// - `500 Internal Server Error` on store failure
pub async fn assign_course(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AssignCourseRequest>,
) -> (StatusCode, Json<ApiResponse<AssignCourseResponse>>) {
    let course = req.course.trim();
    if course.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Both teacher and course must be selected.",
            )),
        );
    }

    match User::assign_course(state.db(), user_id, course).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignCourseResponse {
                    id: user.id,
                    email: user.email,
                    course: user.course,
                },
                "Course successfully assigned to the teacher.",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("User {} not found.", user_id))),
        ),
        Err(e) => {
            tracing::error!(error = %e, user_id, "Failed to assign course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to assign course.")),
            )
        }
    }
}
