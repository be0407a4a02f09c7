use crate::helpers::app::{bearer_for, make_test_app};
use api::jobs::retention::{PurgeOutcome, run_retention_purge};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use db::models::attendance_record::Entity as AttendanceEntity;
use db::models::user::Model as User;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tower::ServiceExt;

/// End to end: a record submitted through the API survives the purge inside
/// the 24-hour horizon and is gone after it.
#[tokio::test]
async fn submitted_records_expire_after_twenty_four_hours() {
    let (app, db) = make_test_app().await;

    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();

    let submit = Request::builder()
        .method("POST")
        .uri("/attendance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "Alice", "student_id": "u100", "course": "Math"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(submit).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let submitted_at = Utc::now();

    // 23 hours later: still inside the horizon.
    let outcome = run_retention_purge(&db, submitted_at + Duration::hours(23))
        .await
        .unwrap();
    assert_eq!(outcome, PurgeOutcome::NoOp);
    assert_eq!(AttendanceEntity::find().count(&db).await.unwrap(), 1);

    // Just past 24 hours: expired.
    let outcome = run_retention_purge(
        &db,
        submitted_at + Duration::hours(24) + Duration::seconds(2),
    )
    .await
    .unwrap();
    assert_eq!(outcome, PurgeOutcome::Purged(1));
    assert_eq!(AttendanceEntity::find().count(&db).await.unwrap(), 0);

    // The report endpoint agrees.
    let list = Request::builder()
        .method("GET")
        .uri("/attendance?course=Math")
        .header(header::AUTHORIZATION, bearer_for(&teacher))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["total"], 0);
}
