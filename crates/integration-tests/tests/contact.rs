//! Contact form.

use axum::http::StatusCode;
use max_publishing_integration_tests::TestApp;

#[tokio::test]
async fn test_invalid_submission_lists_errors() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/contact",
            &[("name", ""), ("email", "nope"), ("subject", "bulk"), ("message", "Hi")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please enter your name."));
    assert!(response.body.contains("Please enter a valid email address."));
    assert!(!response.body.contains("Please enter a message."));
    // Entered values are kept.
    assert!(response.body.contains("value=\"nope\""));
}

#[tokio::test]
async fn test_valid_submission_prepares_email() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/contact",
            &[
                ("name", "Giulia Rossi"),
                ("email", "giulia@example.it"),
                ("company", "Libreria Centrale"),
                ("subject", "bulk"),
                ("message", "We need 500 copies."),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Thank you for your message!"));
    assert!(response.body.contains("mailto:fanyuchengcc@gmail.com?subject="));
}

#[tokio::test]
async fn test_contact_is_rate_limited() {
    let mut app = TestApp::new();
    let mut statuses = Vec::new();
    for _ in 0..5 {
        let response = app.post_form("/contact", &[]).await;
        statuses.push(response.status);
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(statuses.first(), Some(&StatusCode::UNPROCESSABLE_ENTITY));
}
