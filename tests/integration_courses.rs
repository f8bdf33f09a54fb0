mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;

use common::{get_request, json_request, register_and_login, send, setup_test_app};

async fn create_teacher(app: &axum::Router, token: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/teachers",
            json!({ "name": "Mrs. Okafor", "email": email, "subject": "Mathematics" }),
            Some(token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn delete_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_with_teacher(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;
    let teacher = create_teacher(&app, &token, "okafor@school.io").await;
    let teacher_id = teacher["id"].as_str().unwrap();

    let (status, course) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({ "title": "Algebra I", "code": "MTH101", "teacher_id": teacher_id }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(course["teacher_id"], teacher_id);

    let (status, courses) = send(
        &app,
        get_request(&format!("/teachers/{teacher_id}/courses"), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(courses.as_array().unwrap().len(), 1);
    assert_eq!(courses[0]["code"], "MTH101");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_with_unknown_teacher(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({ "title": "Algebra I", "code": "MTH101", "teacher_id": uuid::Uuid::new_v4() }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("does not exist"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_course_code(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;
    let body = json!({ "title": "Algebra I", "code": "MTH101" });

    let (status, _) = send(&app, json_request("POST", "/courses", body.clone(), Some(&token))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, json_request("POST", "/courses", body, Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_teacher_unassigns_courses(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;
    let teacher = create_teacher(&app, &token, "okafor@school.io").await;
    let teacher_id = teacher["id"].as_str().unwrap();

    let (_, course) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({ "title": "Algebra I", "code": "MTH101", "teacher_id": teacher_id }),
            Some(&token),
        ),
    )
    .await;
    let course_id = course["id"].as_str().unwrap();

    let (status, _) = send(&app, delete_request(&format!("/teachers/{teacher_id}"), &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, course) = send(&app, get_request(&format!("/courses/{course_id}"), Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(course["teacher_id"].is_null());

    let (status, _) = send(
        &app,
        get_request(&format!("/teachers/{teacher_id}/courses"), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teacher_update_and_duplicate_email(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;
    create_teacher(&app, &token, "first@school.io").await;
    let second = create_teacher(&app, &token, "second@school.io").await;
    let second_id = second["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/teachers/{second_id}"),
            json!({ "subject": "Physics" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["subject"], "Physics");
    assert_eq!(updated["email"], "second@school.io");

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            &format!("/teachers/{second_id}"),
            json!({ "email": "first@school.io" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_crud(pool: PgPool) {
    let app = setup_test_app(pool);
    let token = register_and_login(&app).await;

    let (_, course) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({ "title": "Biology", "code": "BIO100", "description": "Cells" }),
            Some(&token),
        ),
    )
    .await;
    let course_id = course["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/courses/{course_id}"),
            json!({ "title": "Biology I" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Biology I");
    assert_eq!(updated["description"], "Cells");

    let (status, list) = send(&app, get_request("/courses", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["meta"]["total"], 1);

    let (status, _) = send(&app, delete_request(&format!("/courses/{course_id}"), &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, delete_request(&format!("/courses/{course_id}"), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_blank_course_code_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let token = register_and_login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({ "title": "Algebra I", "code": "   " }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "code must not be blank");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
