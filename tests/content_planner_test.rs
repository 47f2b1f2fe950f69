//! Integration tests for the content planner page

mod common;

use axum::http::StatusCode;
use chrono::{Local, NaiveDate};
use common::*;

use artikel_admin::models::types::tanggal_indonesia;
use artikel_admin::utils::flash::FlashLevel;

const PLANNER_PAGE: &str = "http://localhost:8080/content-planner";

fn planner_form() -> MultipartBody {
    MultipartBody::new()
        .text("sosial_media", "Instagram")
        .text("content_type", "Reels")
        .text("content_pillar", "Educational")
        .text("status", "Draft")
        .text("caption", "Tips belajar Rust")
        .text("cta_link", "https://example.com")
        .text("hashtag", "#rust #belajar")
        .text("created_at", "2026-10-20")
        .referer(PLANNER_PAGE)
}

#[tokio::test]
async fn test_page_renders_lookups_and_today() {
    let app = TestApp::new().await;
    let response = app.get("/content-planner").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    for option in ["Instagram", "Carousel", "Promotional", "Scheduled"] {
        assert!(body.contains(option), "missing option {}", option);
    }
    let today = Local::now().date_naive();
    assert!(body.contains(&tanggal_indonesia(today)));
    assert!(body.contains(&today.format("%Y-%m-%d").to_string()));
    assert!(body.contains("Belum ada konten terjadwal."));
}

#[tokio::test]
async fn test_add_without_file() {
    let app = TestApp::new().await;
    let response = app
        .send(planner_form().into_request("/content-planner/add"))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/content-planner");
    let flash = app.take_flash(&response);
    assert_eq!(
        flash.first(FlashLevel::Success),
        Some("Content planner berhasil ditambahkan.")
    );

    let entries = app.state.planner.find_all().await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.sosial_media, "Instagram");
    assert_eq!(entry.hashtag, "#rust #belajar");
    assert_eq!(entry.post_date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert!(entry.file_content.is_none());
    assert!(app.files_in(app.content_dir()).is_empty());

    // Listed on the page with the Indonesian date
    let body = body_text(app.get("/content-planner").await).await;
    assert!(body.contains("20 Oktober 2026"));
    assert!(body.contains("Tips belajar Rust"));
}

#[tokio::test]
async fn test_add_with_image() {
    let app = TestApp::new().await;
    let form = planner_form().file("file_content", "post.gif", "image/gif", GIF_HEADER);
    let response = app.send(form.into_request("/content-planner/add")).await;
    assert_eq!(location(&response), "/content-planner");

    let entries = app.state.planner.find_all().await.unwrap();
    let name = entries[0].file_content.clone().unwrap();
    assert!(name.ends_with(".gif"));
    assert_eq!(app.files_in(app.content_dir()), vec![name]);
}

#[tokio::test]
async fn test_optional_fields_may_be_empty() {
    let app = TestApp::new().await;
    let form = MultipartBody::new()
        .text("sosial_media", "TikTok")
        .text("content_type", "Feed")
        .text("content_pillar", "Engagement")
        .text("status", "Posted")
        .text("created_at", "2026-11-01");
    let response = app.send(form.into_request("/content-planner/add")).await;
    assert_eq!(location(&response), "/content-planner");

    let entries = app.state.planner.find_all().await.unwrap();
    assert_eq!(entries[0].caption, "");
    assert_eq!(entries[0].cta_link, "");
}

#[tokio::test]
async fn test_unknown_lookup_value_rejected() {
    let app = TestApp::new().await;
    let form = planner_form().text("sosial_media", "Friendster");
    let response = app.send(form.into_request("/content-planner/add")).await;

    assert_eq!(location(&response), "/content-planner");
    let flash = app.take_flash(&response);
    assert_eq!(flash.first(FlashLevel::Error), Some("Validasi gagal."));
    assert_eq!(flash.old.get("caption").map(String::as_str), Some("Tips belajar Rust"));
    assert!(app.state.planner.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_date_rejected() {
    let app = TestApp::new().await;
    for date in ["20/10/2026", "2026-02-30", ""] {
        let form = planner_form().text("created_at", date);
        let response = app.send(form.into_request("/content-planner/add")).await;
        let flash = app.take_flash(&response);
        assert_eq!(flash.first(FlashLevel::Error), Some("Validasi gagal."), "{}", date);
    }
    assert!(app.state.planner.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_file_rejected() {
    let app = TestApp::new().await;
    let too_big = png_of_size(2048 * 1024 + 1);
    let cases: [&[u8]; 2] = [b"plain text, not an image", &too_big];

    for bytes in cases {
        let form = planner_form().file("file_content", "post.png", "image/png", bytes);
        let response = app.send(form.into_request("/content-planner/add")).await;
        let flash = app.take_flash(&response);
        assert_eq!(flash.first(FlashLevel::Error), Some("Validasi gagal."));
    }

    assert!(app.state.planner.find_all().await.unwrap().is_empty());
    assert!(app.files_in(app.content_dir()).is_empty());
}
