use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    /// Email of the signed-in identity; the teacher dashboard resolves its
    /// `users` row by equality on this field.
    pub email: String,
    pub admin: bool,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
