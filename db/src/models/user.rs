use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::Serialize;

/// Represents a user in the `users` table.
///
/// A user is either an admin or a staff account (free-text `role`, e.g.
/// "teacher") with at most one assigned course name in `course`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User's unique email address.
    pub email: String,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// Free-text role label, e.g. "teacher".
    pub role: String,
    /// Name of the single assigned course, if any. Overwritten on
    /// reassignment; no history is kept.
    pub course: Option<String>,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// This enum would define relations if any exist. Currently unused.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new user with an argon2-hashed password.
    pub async fn create(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
        admin: bool,
        role: &str,
    ) -> Result<Self, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))?
            .to_string();

        let now = Utc::now();
        let user = ActiveModel {
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            admin: Set(admin),
            role: Set(role.to_owned()),
            course: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    /// Looks up a user by exact email match.
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    /// Verifies a plaintext password against the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|hash| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Overwrites the assigned course name (last write wins).
    pub async fn assign_course(
        db: &DatabaseConnection,
        user_id: i64,
        course: &str,
    ) -> Result<Option<Self>, DbErr> {
        let Some(user) = Entity::find_by_id(user_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = user.into();
        active.course = Set(Some(course.to_owned()));
        active.updated_at = Set(Utc::now());
        active.update(db).await.map(Some)
    }
}
