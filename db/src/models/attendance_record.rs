use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde::{Deserialize, Serialize};

/// Attendance status. Submission only ever writes `Present`; `Absent` exists
/// for display of historical or externally imported data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
}

/// A single submitted attendance record.
///
/// Records are insert-only: they are never updated, and the only deletion
/// path is the retention purge job. `created_at` is assigned by the server at
/// insert time (never taken from the client) and is the sole purge cutoff
/// key, so purge comparisons are immune to client clock skew.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Free-text submitter name.
    pub name: String,
    /// Free-text student identifier.
    pub student_id: String,
    /// Course name; matches `courses.name` by convention only (no FK).
    pub course: String,
    pub status: Status,
    /// Wall-clock time of the submission as seen by the submission flow.
    pub submitted_at: DateTime<Utc>,
    /// Server-assigned insertion timestamp. Retention purge cutoff key.
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new `present` record. `submitted_at` is the caller's notion
    /// of "now"; `created_at` is assigned here, at write time.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        student_id: &str,
        course: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, DbErr> {
        let record = ActiveModel {
            name: Set(name.to_owned()),
            student_id: Set(student_id.to_owned()),
            course: Set(course.to_owned()),
            status: Set(Status::Present),
            submitted_at: Set(submitted_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        record.insert(db).await
    }

    /// All records for a course (exact name match), newest first. The full
    /// result set is loaded eagerly; attendance volumes stay small because of
    /// the 24-hour retention horizon.
    pub async fn find_by_course(
        db: &DatabaseConnection,
        course: &str,
    ) -> Result<Vec<Self>, DbErr> {
        use sea_orm::QueryOrder;

        Entity::find()
            .filter(Column::Course.eq(course))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }
}
