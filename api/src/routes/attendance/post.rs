use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use common::state::AppState;
use db::models::attendance_record::Model as AttendanceRecord;
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct SubmitAttendanceRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub course: String,
}

#[derive(Debug, Serialize, Default)]
pub struct SubmitAttendanceResponse {
    pub id: i64,
}

/// POST /attendance
///
/// Submit one attendance record. The record is stored with `status =
/// "present"` and a server-assigned creation timestamp that later drives the
/// retention purge.
///
/// Validation deliberately mirrors the submission form: a single generic
/// message for any blank field, checked before the store is contacted. The
/// course name is not checked against the `courses` table; the form restricts
/// choices to the selectable list, nothing more.
///
/// ### Responses
/// - `201 Created` with the new record id
/// - `400 Bad Request` if any field is blank
/// - `500 Internal Server Error` on store failure (generic message)
pub async fn submit_attendance(
    State(state): State<AppState>,
    Json(req): Json<SubmitAttendanceRequest>,
) -> (StatusCode, Json<ApiResponse<SubmitAttendanceResponse>>) {
    if req.name.trim().is_empty()
        || req.student_id.trim().is_empty()
        || req.course.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("All fields are required.")),
        );
    }

    match AttendanceRecord::create(
        state.db(),
        req.name.trim(),
        req.student_id.trim(),
        req.course.trim(),
        Utc::now(),
    )
    .await
    {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmitAttendanceResponse { id: record.id },
                "Attendance successfully submitted.",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to insert attendance record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to submit attendance.")),
            )
        }
    }
}
