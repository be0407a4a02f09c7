use axum::{Json, extract::State, http::StatusCode};
use common::state::AppState;
use db::models::user::Model as User;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub admin: bool,
    pub role: String,
    pub course: Option<String>,
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/login
///
/// Authenticate an existing user by email and password and issue a JWT.
///
/// ### Responses
/// - `200 OK` with the token and the user's role/course
/// - `400 Bad Request` on validation failure
/// - `401 Unauthorized` on unknown email or wrong password (the two cases are
///   deliberately indistinguishable to the caller)
/// - `500 Internal Server Error` on database failure
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<ApiResponse<LoginResponse>>) {
    if req.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("A valid email and password are required")),
        );
    }

    let user = match User::find_by_email(state.db(), &req.email).await {
        Ok(user) => user,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {}", e))),
            );
        }
    };

    match user {
        Some(user) if user.verify_password(&req.password) => {
            let (token, expires_at) = generate_jwt(user.id, &user.email, user.admin);
            let response = LoginResponse {
                id: user.id,
                email: user.email,
                admin: user.admin,
                role: user.role,
                course: user.course,
                token,
                expires_at,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Login successful")),
            )
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error(
                "Failed to log in. Please check your credentials.",
            )),
        ),
    }
}
