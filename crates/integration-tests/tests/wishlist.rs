//! Wishlist toggling, the profile panel and sharing.

use axum::http::StatusCode;
use max_publishing_integration_tests::TestApp;

#[tokio::test]
async fn test_toggle_on_book_page() {
    let mut app = TestApp::new();
    let response = app.get("/books/the-prince").await;
    assert!(response.body.contains("Add to Wishlist"));

    let response = app
        .post_form("/wishlist/toggle", &[("book_id", "the-prince")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/books/the-prince"));

    let response = app.get("/books/the-prince").await;
    assert!(response.body.contains("In Wishlist"));
    assert!(response.body.contains("aria-pressed=\"true\""));

    app.post_form("/wishlist/toggle", &[("book_id", "the-prince")])
        .await;
    let response = app.get("/books/the-prince").await;
    assert!(response.body.contains("Add to Wishlist"));
}

#[tokio::test]
async fn test_unknown_book_is_404() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/wishlist/toggle", &[("book_id", "missing-book")])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_lists_saved_books() {
    let mut app = TestApp::new();
    app.post_form(
        "/profile/sign-in",
        &[("name", "Giulia Rossi"), ("email", "giulia@example.it")],
    )
    .await;

    let response = app.get("/profile").await;
    assert!(response.body.contains("Your wishlist is empty"));

    app.post_form("/wishlist/toggle", &[("book_id", "meditations")])
        .await;
    let response = app.get("/profile").await;
    assert!(response.body.contains("href=\"/books/meditations\""));
    assert!(!response.body.contains("Your wishlist is empty"));

    let response = app
        .post_form(
            "/wishlist/toggle",
            &[("book_id", "meditations"), ("redirect", "/profile")],
        )
        .await;
    assert_eq!(response.location(), Some("/profile"));
    let response = app.get("/profile").await;
    assert!(response.body.contains("Your wishlist is empty"));
}

#[tokio::test]
async fn test_wishlist_survives_sign_out() {
    let mut app = TestApp::new();
    app.post_form("/wishlist/toggle", &[("book_id", "the-odyssey")])
        .await;
    app.post_form("/profile/sign-out", &[]).await;

    let response = app.get("/books/the-odyssey").await;
    assert!(response.body.contains("In Wishlist"));
}

#[tokio::test]
async fn test_share_link_on_book_page() {
    let mut app = TestApp::new().with_accept_language("it");
    let response = app.get("/books/the-prince").await;
    assert!(
        response
            .body
            .contains("href=\"mailto:?subject=Guarda%20questo%20libro%3A%20Il%20Principe")
    );
    assert!(response.body.contains(">Condividi</a>"));
}
