mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, get, png, send_json, send_multipart, Part};

#[tokio::test]
async fn root_reports_ok() {
    let (status, body) = get(&app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn creates_language_with_trimmed_fields() {
    let app = app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/languages",
        json!({ "name": " Arabic ", "code": " AR ", "direction": "rtl" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Arabic");
    assert_eq!(body["data"]["code"], "ar");
    assert_eq!(body["data"]["direction"], "rtl");

    let (_, list) = get(&app, "/languages").await;
    assert_eq!(list["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn rejects_long_language_code_and_direction() {
    let (status, body) = send_json(
        &app(),
        "POST",
        "/languages",
        json!({ "name": "Arabic", "code": "arab", "direction": "right" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!([
            "Maximum 3 characters required for the code",
            "Maximum 3 characters required for the direction"
        ])
    );
}

#[tokio::test]
async fn page_title_and_content_bounds() {
    let (status, body) = send_json(
        &app(),
        "POST",
        "/pages",
        json!({ "title": "t".repeat(256), "content": "c".repeat(501) }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!([
            "Required characters for the title are between 3 and 255!",
            "Required characters for the content are between 3 and 500!"
        ])
    );
}

#[tokio::test]
async fn page_dates_and_link_use_predicates() {
    let app = app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/pages",
        json!({
            "title": "About",
            "content": "About <us>",
            "published_at": "2023-02-01",
            "expires_at": "2023-1-31",
            "link": "https://example.com/about"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!(["Expiry date must not be before the publish date."])
    );

    let (status, body) = send_json(
        &app,
        "POST",
        "/pages",
        json!({ "title": "About", "content": "About", "link": "not a url" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"], json!(["Links must be valid URLs."]));

    let (status, body) = send_json(
        &app,
        "POST",
        "/pages",
        json!({
            "title": "About",
            "content": "About <us>",
            "published_at": "2023-1-31",
            "expires_at": "2023-1-31",
            "link": "www.example.com"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["content"], "About &lt;us&gt;");

    let (_, list) = get(&app, "/pages").await;
    assert_eq!(list["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn settings_require_logo_and_banner() {
    let app = app();

    let (status, _) = get(&app, "/settings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_multipart(
        &app,
        "PUT",
        "/settings",
        vec![
            Part::File("logo", "logo.png", "image/png", png()),
            Part::Text("address", &"a".repeat(251)),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!([
            "The banner image is invalid: ",
            "Maxmium 250 characters required for the address!"
        ])
    );

    let (status, body) = send_multipart(
        &app,
        "PUT",
        "/settings",
        vec![
            Part::File("logo", "logo.png", "image/png", png()),
            Part::File("banner", "banner.png", "image/png", png()),
            Part::Text("description", "Admin portal"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["description"], "Admin portal");
    assert!(body["data"]["logo"].as_str().unwrap().ends_with("/logo.png"));

    let (status, body) = get(&app, "/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["banner"].as_str().unwrap().ends_with("/banner.png"));
}
