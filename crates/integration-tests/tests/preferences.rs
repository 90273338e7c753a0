//! Language and theme switching.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use max_publishing_integration_tests::TestApp;

#[tokio::test]
async fn test_default_language_is_english() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    assert!(response.body.contains("<html lang=\"en\""));
    assert!(response.body.contains("Your Strategic Partner in Publishing Solutions"));
}

#[tokio::test]
async fn test_accept_language_picks_italian() {
    let mut app = TestApp::new().with_accept_language("it-IT,it;q=0.9,en;q=0.5");
    let response = app.get("/").await;
    assert!(response.body.contains("<html lang=\"it\""));
    assert!(response.body.contains("Il Tuo Partner Strategico nelle Soluzioni Editoriali"));
}

#[tokio::test]
async fn test_language_switch_persists_in_session() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/preferences/language",
            &[("language", "it"), ("redirect", "/books")],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/books"));

    let response = app.get("/books").await;
    assert!(response.body.contains("<html lang=\"it\""));
    assert!(response.body.contains("I Nostri Libri"));
}

#[tokio::test]
async fn test_session_language_beats_accept_language() {
    let mut app = TestApp::new().with_accept_language("it");
    app.post_form("/preferences/language", &[("language", "en")])
        .await;
    let response = app.get("/").await;
    assert!(response.body.contains("<html lang=\"en\""));
}

#[tokio::test]
async fn test_invalid_language_is_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/preferences/language", &[("language", "fr")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_foreign_redirect_goes_home() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/preferences/language",
            &[("language", "it"), ("redirect", "//evil.example")],
        )
        .await;
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_theme_switch() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    assert!(response.body.contains("data-theme=\"system\""));
    assert!(response.body.contains("prefers-color-scheme: dark"));

    let response = app
        .post_form("/preferences/theme", &[("theme", "dark"), ("redirect", "/about")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/about"));

    let response = app.get("/about").await;
    assert!(response.body.contains("class=\"dark\" data-theme=\"dark\""));
    assert!(!response.body.contains("prefers-color-scheme: dark"));
}

#[tokio::test]
async fn test_invalid_theme_is_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/preferences/theme", &[("theme", "sepia")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
