use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::user::Model as User;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Serialize, Default)]
pub struct CreateUserResponse {
    pub id: i64,
    pub email: String,
    pub admin: bool,
    pub role: String,
}

/// POST /users
///
/// Create a new user account (e.g. a teacher). Admin-only.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if a user with this email already exists
/// - `500 Internal Server Error` on database failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> (StatusCode, Json<ApiResponse<CreateUserResponse>>) {
    if let Err(validation_errors) = req.validate() {
        let message = validation_errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)));
    }

    match User::find_by_email(state.db(), &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::error(
                    "A user with this email already exists",
                )),
            );
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {}", e))),
            );
        }
    }

    match User::create(state.db(), &req.email, &req.password, req.admin, &req.role).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CreateUserResponse {
                    id: user.id,
                    email: user.email,
                    admin: user.admin,
                    role: user.role,
                },
                "User created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {}", e))),
        ),
    }
}
