mod common;

use admin_api::app::env::Envy;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{app, app_with, get, png, send_json, send_json_in, send_multipart, Part};

fn admin_parts<'a>(image: Option<Part<'a>>) -> Vec<Part<'a>> {
    let mut parts = vec![
        Part::Text("name", "  Root <Admin> "),
        Part::Text("email", " Root@Example.com "),
        Part::Text("password", "Abcdef1@"),
        Part::Text("phone", "0123456789"),
    ];
    parts.extend(image);
    parts
}

#[tokio::test]
async fn creates_admin_without_exposing_password() {
    let app = app();

    let (status, body) = send_multipart(
        &app,
        "POST",
        "/admins",
        admin_parts(Some(Part::File("image", "avatar.png", "image/png", png()))),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Root &lt;Admin&gt;");
    assert_eq!(body["data"]["email"], "root@example.com");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"]["image"]
        .as_str()
        .unwrap_or_default()
        .ends_with("/avatar.png"));

    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, list) = get(&app, "/admins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"].as_array().map(Vec::len), Some(1));
    assert!(list["data"][0].get("password").is_none());

    let (status, one) = get(&app, &format!("/admins/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["data"]["id"], Value::String(id));
    assert!(one["data"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = app();
    let image = || Some(Part::File("image", "avatar.png", "image/png", png()));

    let (status, _) = send_multipart(&app, "POST", "/admins", admin_parts(image())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_multipart(&app, "POST", "/admins", admin_parts(image())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["messages"], json!(["Email is already in use."]));
}

#[tokio::test]
async fn unknown_admin_is_not_found() {
    let (status, body) = get(&app(), "/admins/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "data": null, "messages": ["Admin not found."] })
    );
}

#[tokio::test]
async fn collects_every_violation_in_one_response() {
    let (status, body) = send_json(
        &app(),
        "POST",
        "/admins",
        json!({ "name": "ab", "email": "nope", "password": "abcdef", "phone": "123", "bio": "short" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "success": false,
            "data": null,
            "messages": [
                "Minimum 3 characters required for the name",
                "Please enter a valid email address.",
                "Password should be at least 6 characters and contain capital letters, small letters, numbers and special characters.",
                "Minimum 6 characters required for the phone!",
                "Maxmium 250 characters required for the bio!",
                "The icon is invalid: "
            ]
        })
    );
}

#[tokio::test]
async fn missing_required_fields_report_empty_messages() {
    let (status, body) = send_json(&app(), "POST", "/admins", json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!([
            "Name can not be empty!",
            "Please enter a valid email address.",
            "Password can not be empty!",
            "The icon is invalid: "
        ])
    );
}

#[tokio::test]
async fn messages_follow_accept_language() {
    let (status, body) = send_json_in(
        &app(),
        "POST",
        "/admins",
        json!({ "email": "root@example.com", "password": "Abcdef1@" }),
        "ar-EG,ar;q=0.9",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!(["لا يمكن ترك الاسم فارغاً!", "الصورة غير صالحة: "])
    );
}

#[tokio::test]
async fn non_image_upload_is_reported_on_the_image_field() {
    let (status, body) = send_multipart(
        &app(),
        "POST",
        "/admins",
        admin_parts(Some(Part::File(
            "image",
            "notes.txt",
            "text/plain",
            b"hello".to_vec(),
        ))),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!(["The icon is invalid: file is required to be an image"])
    );
}

#[tokio::test]
async fn oversized_upload_reports_limit_message() {
    let app = app_with(Envy {
        upload_max_file_size: Some(16),
        ..Default::default()
    });

    let (status, body) = send_multipart(
        &app,
        "POST",
        "/admins",
        admin_parts(Some(Part::File("image", "avatar.png", "image/png", png()))),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"], json!(["The icon is invalid: file too large"]));
}

#[tokio::test]
async fn upload_past_default_size_keeps_form_fields() {
    let app = app();
    let mut image = png();
    image.resize(3 * 1024 * 1024, 0);

    let (status, body) = send_multipart(
        &app,
        "POST",
        "/admins",
        admin_parts(Some(Part::File("image", "avatar.png", "image/png", image))),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"], json!(["The icon is invalid: file too large"]));
}

#[tokio::test]
async fn too_many_files_reports_count_limit() {
    let app = app_with(Envy {
        upload_max_files: Some(1),
        ..Default::default()
    });

    let mut parts = admin_parts(Some(Part::File("image", "avatar.png", "image/png", png())));
    parts.push(Part::File("image", "second.png", "image/png", png()));

    let (status, body) = send_multipart(&app, "POST", "/admins", parts).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"], json!(["The icon is invalid: too many files"]));

    let (status, list) = get(&app, "/admins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn upload_errors_do_not_leak_between_requests() {
    let app = app();

    let (_, failed) = send_multipart(
        &app,
        "POST",
        "/admins",
        admin_parts(Some(Part::File("image", "notes.txt", "text/plain", b"x".to_vec()))),
    )
    .await;
    assert_eq!(
        failed["messages"],
        json!(["The icon is invalid: file is required to be an image"])
    );

    let (_, missing) = send_multipart(&app, "POST", "/admins", admin_parts(None)).await;
    assert_eq!(missing["messages"], json!(["The icon is invalid: "]));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/admins")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\":"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
