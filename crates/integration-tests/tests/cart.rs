//! Cart and checkout flow.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use max_publishing_core::Cart;
use max_publishing_integration_tests::TestApp;

#[tokio::test]
async fn test_empty_cart() {
    let mut app = TestApp::new();
    let response = app.get("/cart").await;
    assert!(response.body.contains("Your cart is empty"));

    let response = app.get("/cart/count").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains("badge"));
}

#[tokio::test]
async fn test_add_update_remove() {
    let mut app = TestApp::new();

    let response = app
        .post_form("/cart/add", &[("book_id", "the-odyssey"), ("quantity", "2")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));

    let response = app.get("/cart").await;
    assert!(response.body.contains("The Odyssey"));
    assert!(response.body.contains("€31.00"));

    let response = app.get("/cart/count").await;
    assert!(response.body.contains("<span class=\"badge\">2</span>"));

    app.post_form("/cart/update", &[("book_id", "the-odyssey"), ("quantity", "5")])
        .await;
    let response = app.get("/cart/count").await;
    assert!(response.body.contains(">5<"));

    let response = app
        .post_form("/cart/remove", &[("book_id", "the-odyssey")])
        .await;
    assert_eq!(response.location(), Some("/cart"));
    let response = app.get("/cart").await;
    assert!(response.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_add_follows_local_redirect() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/cart/add",
            &[("book_id", "meditations"), ("redirect", "/books?sort=price")],
        )
        .await;
    assert_eq!(response.location(), Some("/books?sort=price"));

    let response = app.get("/books").await;
    assert!(response.body.contains("<span class=\"badge\">1</span>"));
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("book_id", "frankenstein")])
        .await;
    app.post_form("/cart/update", &[("book_id", "frankenstein"), ("quantity", "0")])
        .await;
    let response = app.get("/cart").await;
    assert!(response.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_clear_cart() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("book_id", "frankenstein")])
        .await;
    app.post_form("/cart/add", &[("book_id", "the-prince")])
        .await;
    let response = app.post_form("/cart/clear", &[]).await;
    assert_eq!(response.location(), Some("/cart"));
    let response = app.get("/cart").await;
    assert!(response.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_add_unknown_book_is_404() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", &[("book_id", "not-a-book")])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_bad_quantity_is_400() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", &[("book_id", "the-odyssey"), ("quantity", "lots")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_with_empty_cart_returns_to_cart() {
    let mut app = TestApp::new();
    let response = app.get("/checkout").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));
}

#[tokio::test]
async fn test_checkout_redirects_to_gateway() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("book_id", "the-odyssey"), ("quantity", "2")])
        .await;

    let response = app.get("/checkout").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location().unwrap();
    assert!(location.starts_with("https://www.cartasi.it/payment/gateway?orderId="));
    assert!(location.ends_with("&amount=31.00&currency=EUR&lang=en"));

    // The gateway never reports back, so the cart is kept.
    let response = app.get("/cart/count").await;
    assert!(response.body.contains(">2<"));
}

#[tokio::test]
async fn test_line_quantity_is_capped() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("book_id", "the-odyssey"), ("quantity", "150")])
        .await;
    app.post_form("/cart/add", &[("book_id", "the-odyssey")])
        .await;

    let response = app.get("/cart/count").await;
    let badge = format!("<span class=\"badge\">{}</span>", Cart::MAX_LINE_QUANTITY);
    assert!(response.body.contains(&badge));
}
