use axum::{Extension, Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::user::Model as User;
use serde::Serialize;

use crate::auth::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub id: i64,
    pub email: String,
    pub admin: bool,
    pub role: String,
    pub course: Option<String>,
    /// The selectable course list for the dashboard. A teacher manages at
    /// most one course, so this has zero or one element.
    pub courses: Vec<String>,
}

/// GET /me
///
/// Resolve the signed-in identity to its `users` row by email equality and
/// return the role and assigned course for the dashboard.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no `users` row matches the signed-in email; the
///   client treats this as fatal for the session and re-authenticates
/// - `500 Internal Server Error` on database failure
pub async fn get_me(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<MeResponse>>) {
    match User::find_by_email(state.db(), &claims.email).await {
        Ok(Some(user)) => {
            let courses = user.course.clone().into_iter().collect();
            let response = MeResponse {
                id: user.id,
                email: user.email,
                admin: user.admin,
                role: user.role,
                course: user.course,
                courses,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Profile retrieved")),
            )
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Teacher data not found")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch teacher data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Error fetching teacher data")),
            )
        }
    }
}
