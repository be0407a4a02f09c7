//! Attendance reporting: list records for a course and export them as CSV.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use chrono::{SecondsFormat, Utc};
use common::state::AppState;
use db::models::attendance_record::{Model as AttendanceRecord, Status};

use crate::response::ApiResponse;

/// A single attendance record (DTO) for API responses.
#[derive(serde::Serialize)]
pub struct AttendanceRecordDto {
    pub id: i64,
    pub name: String,
    pub student_id: String,
    pub course: String,
    pub status: Status,
    pub submitted_at: String, // ISO-8601 (UTC)
    pub created_at: String,   // ISO-8601 (UTC)
}

impl From<AttendanceRecord> for AttendanceRecordDto {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            student_id: r.student_id,
            course: r.course,
            status: r.status,
            submitted_at: r
                .submitted_at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            created_at: r
                .created_at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    /// Exact course name to report on.
    pub course: String,
}

#[derive(serde::Serialize, Default)]
pub struct RecordsListResponse {
    pub records: Vec<AttendanceRecordDto>,
    pub total: usize,
}

/// GET `/api/attendance?course=NAME`
///
/// List all attendance records whose `course` equals the given name (exact
/// match, no pagination — the whole result set is returned, newest first).
///
/// **Auth**: any authenticated user.
pub async fn list_records(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> (StatusCode, Json<ApiResponse<RecordsListResponse>>) {
    match AttendanceRecord::find_by_course(state.db(), &q.course).await {
        Ok(rows) => {
            let total = rows.len();
            let resp = RecordsListResponse {
                records: rows.into_iter().map(Into::into).collect(),
                total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(resp, "Attendance records retrieved")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, course = %q.course, "Failed to fetch attendance records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load attendance data.")),
            )
        }
    }
}

/// GET `/api/attendance/export?course=NAME`
///
/// Export all attendance records for a course as a CSV attachment, one row
/// per record with columns matching the record's fields. A pure projection of
/// the same query `list_records` runs; no other store access.
///
/// **Auth**: any authenticated user.
pub async fn export_records_csv(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> (StatusCode, (HeaderMap, String)) {
    let records = match AttendanceRecord::find_by_course(state.db(), &q.course).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, course = %q.course, "Failed to export attendance records");
            let mut headers = HeaderMap::new();
            headers.insert(
                axum::http::header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                (headers, "error".to_string()),
            );
        }
    };

    // CSV header
    let mut csv = String::from("id,name,student_id,course,status,submitted_at,created_at\n");

    fn esc(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    for r in records {
        let status = match r.status {
            Status::Present => "present",
            Status::Absent => "absent",
        };
        let submitted_at = r
            .submitted_at
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let created_at = r
            .created_at
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let row = format!(
            "{},{},{},{},{},{},{}\n",
            r.id,
            esc(&r.name),
            esc(&r.student_id),
            esc(&r.course),
            status,
            esc(&submitted_at),
            esc(&created_at),
        );
        csv.push_str(&row);
    }

    let filename = format!("attendance_{}.csv", q.course.replace(' ', "_"));

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        axum::http::header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
            .unwrap_or(HeaderValue::from_static("attachment")),
    );

    (StatusCode::OK, (headers, csv))
}
