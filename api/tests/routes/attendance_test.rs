use crate::helpers::app::{bearer_for, make_test_app};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use db::models::attendance_record::{Entity as AttendanceEntity, Model as AttendanceRecord};
use db::models::user::Model as User;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tower::ServiceExt;

#[tokio::test]
async fn submit_attendance_persists_a_present_record() {
    let (app, db) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/attendance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "Alice", "student_id": "u100", "course": "Math"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Attendance successfully submitted.");

    let stored = AttendanceEntity::find().all(&db).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Alice");
    assert_eq!(stored[0].student_id, "u100");
    assert_eq!(stored[0].course, "Math");
}

#[tokio::test]
async fn submit_with_blank_field_is_rejected_and_nothing_is_stored() {
    let (app, db) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/attendance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "  ", "student_id": "u100", "course": "Math"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "All fields are required.");

    assert_eq!(AttendanceEntity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn listing_records_requires_authentication() {
    let (app, _db) = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/attendance?course=Math")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn listing_records_filters_by_exact_course_name() {
    let (app, db) = make_test_app().await;

    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();

    AttendanceRecord::create(&db, "Alice", "u100", "Math", Utc::now())
        .await
        .unwrap();
    AttendanceRecord::create(&db, "Bob", "u101", "Math", Utc::now())
        .await
        .unwrap();
    AttendanceRecord::create(&db, "Cara", "u102", "Mathematics", Utc::now())
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/attendance?course=Math")
        .header(header::AUTHORIZATION, bearer_for(&teacher))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["total"], 2);
    let records = json["data"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["course"] == "Math"));
    assert!(records.iter().all(|r| r["status"] == "present"));
}

#[tokio::test]
async fn csv_export_is_an_attachment_with_one_row_per_record() {
    let (app, db) = make_test_app().await;

    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();

    AttendanceRecord::create(&db, "Alice", "u100", "Math", Utc::now())
        .await
        .unwrap();
    AttendanceRecord::create(&db, "Smith, Bob", "u101", "Math", Utc::now())
        .await
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/attendance/export?course=Math")
        .header(header::AUTHORIZATION, bearer_for(&teacher))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("attendance_Math.csv"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines[0], "id,name,student_id,course,status,submitted_at,created_at");
    assert_eq!(lines.len(), 3);
    // A name containing a comma must be quoted.
    assert!(csv.contains("\"Smith, Bob\""));
}

#[tokio::test]
async fn export_requires_authentication() {
    let (app, _db) = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/attendance/export?course=Math")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
