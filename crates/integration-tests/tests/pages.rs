//! Page rendering, headers and 404 handling.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use max_publishing_integration_tests::TestApp;

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_every_page_renders() {
    let mut app = TestApp::new();
    for path in [
        "/",
        "/about",
        "/services",
        "/books",
        "/books?category=poetry&sort=price&view=list",
        "/books/the-odyssey",
        "/categories",
        "/categories?category=mystery",
        "/cart",
        "/contact",
        "/profile",
        "/privacy",
        "/terms",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(
            response.header("content-type").unwrap().starts_with("text/html"),
            "{path}"
        );
        assert!(response.body.contains("MAX PUBLISHING SRL"), "{path}");
    }
}

#[tokio::test]
async fn test_security_headers() {
    let mut app = TestApp::new();
    let response = app.get("/").await;

    let policy = response.header("content-security-policy").unwrap();
    assert!(policy.contains("'nonce-"));
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let mut app = TestApp::new();
    let response = app.get("/health").await;
    let first = response.header("x-request-id").unwrap().to_string();
    let second = app.get("/health").await;
    assert_ne!(second.header("x-request-id").unwrap(), first);
}

#[tokio::test]
async fn test_unknown_route_is_localized_404() {
    let mut app = TestApp::new();
    let response = app.get("/no-such-page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page not found"));

    let mut app = TestApp::new().with_accept_language("it-IT,it;q=0.9");
    let response = app.get("/no-such-page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Pagina non trovata"));
}

#[tokio::test]
async fn test_unknown_book_is_404() {
    let mut app = TestApp::new();
    let response = app.get("/books/missing-book").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Book not found"));
    assert!(response.body.contains("href=\"/books\""));
}

#[tokio::test]
async fn test_book_detail_shows_related_books() {
    let mut app = TestApp::new();
    let response = app.get("/books/the-odyssey").await;
    assert!(response.body.contains("<h1>The Odyssey</h1>"));
    assert!(response.body.contains("You may also like"));
}

#[tokio::test]
async fn test_search_without_results() {
    let mut app = TestApp::new();
    let response = app.get("/books?q=zzzzzz").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No books match your filters."));
}

#[tokio::test]
async fn test_unknown_category_lists_every_book() {
    let mut app = TestApp::new();
    let all = app.get("/books").await;
    let unknown = app.get("/books?category=nope").await;
    assert_eq!(unknown.status, StatusCode::OK);

    let covers = |body: &str| body.matches("class=\"book-cover\"").count();
    assert!(covers(&all.body) > 0);
    assert_eq!(covers(&unknown.body), covers(&all.body));
    assert!(unknown.body.contains("<option value=\"all\" selected>"));
}

#[tokio::test]
async fn test_legal_page_shows_markdown() {
    let mut app = TestApp::new();
    let response = app.get("/privacy").await;
    assert!(response.body.contains("<h1>Privacy Policy</h1>"));
    assert!(response.body.contains("Last updated"));
}

#[tokio::test]
async fn test_static_files_are_served() {
    let mut app = TestApp::new();
    let response = app.get("/static/images/covers/the-odyssey.svg").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<svg"));
}
