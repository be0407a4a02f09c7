use crate::helpers::app::{bearer_for, make_test_app};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::models::user::Model as User;
use serde_json::{Value, json};
use tower::ServiceExt;

#[tokio::test]
async fn user_management_is_admin_only() {
    let (app, db) = make_test_app().await;

    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();

    let anonymous = Request::builder()
        .method("GET")
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(anonymous).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let non_admin = Request::builder()
        .method("GET")
        .uri("/users")
        .header(header::AUTHORIZATION, bearer_for(&teacher))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(non_admin).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_creates_a_teacher_account() {
    let (app, db) = make_test_app().await;

    let admin = User::create(&db, "admin@test.com", "password1", true, "admin")
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer_for(&admin))
        .body(Body::from(
            json!({
                "email": "newteacher@test.com",
                "password": "strongpassword",
                "role": "teacher"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["email"], "newteacher@test.com");
    assert_eq!(json["data"]["admin"], false);

    let stored = User::find_by_email(&db, "newteacher@test.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.verify_password("strongpassword"));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (app, db) = make_test_app().await;

    let admin = User::create(&db, "admin@test.com", "password1", true, "admin")
        .await
        .unwrap();
    User::create(&db, "dup@test.com", "password1", false, "teacher")
        .await
        .unwrap();

    let req = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer_for(&admin))
        .body(Body::from(
            json!({
                "email": "dup@test.com",
                "password": "strongpassword",
                "role": "teacher"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "A user with this email already exists");
}

#[tokio::test]
async fn assigning_a_course_overwrites_the_previous_one() {
    let (app, db) = make_test_app().await;

    let admin = User::create(&db, "admin@test.com", "password1", true, "admin")
        .await
        .unwrap();
    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();
    let bearer = bearer_for(&admin);

    let assign = |course: &str| {
        Request::builder()
            .method("PUT")
            .uri(format!("/users/{}/course", teacher.id))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, bearer.clone())
            .body(Body::from(json!({"course": course}).to_string()))
            .unwrap()
    };

    let response = app.clone().oneshot(assign("Math")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(assign("Science")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Course successfully assigned to the teacher.");
    assert_eq!(json["data"]["course"], "Science");

    let stored = User::find_by_email(&db, "teacher@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.course.as_deref(), Some("Science"));
}

#[tokio::test]
async fn assigning_a_blank_course_or_unknown_user_fails() {
    let (app, db) = make_test_app().await;

    let admin = User::create(&db, "admin@test.com", "password1", true, "admin")
        .await
        .unwrap();
    let teacher = User::create(&db, "teacher@test.com", "password1", false, "teacher")
        .await
        .unwrap();
    let bearer = bearer_for(&admin);

    let blank = Request::builder()
        .method("PUT")
        .uri(format!("/users/{}/course", teacher.id))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer.clone())
        .body(Body::from(json!({"course": "  "}).to_string()))
        .unwrap();
    let response = app.clone().oneshot(blank).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Both teacher and course must be selected.");

    let unknown = Request::builder()
        .method("PUT")
        .uri("/users/9999/course")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer)
        .body(Body::from(json!({"course": "Math"}).to_string()))
        .unwrap();
    let response = app.oneshot(unknown).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "User 9999 not found.");
}
