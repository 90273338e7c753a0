//! In-process HTTP tests for the MAX PUBLISHING storefront.
//!
//! [`TestApp`] builds the full router with local configuration and drives it
//! with `tower::ServiceExt::oneshot`, so no server or network is needed. It
//! keeps the session cookie between requests like a browser would.
//!
//! ```bash
//! cargo test -p max-publishing-integration-tests
//! ```

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
};
use max_publishing_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Client address sent on every request; the rate limiter keys on it.
pub const CLIENT_IP: &str = "203.0.113.7";

/// A response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// The storefront router plus a one-cookie jar.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
    accept_language: Option<&'static str>,
}

impl TestApp {
    /// Build the app against the storefront crate's content and static files.
    ///
    /// # Panics
    ///
    /// Panics if the content pages cannot be loaded.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let crate_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront");
        let state = AppState::new(StorefrontConfig::local(crate_dir))
            .expect("content pages should load");
        Self {
            router: app(state),
            cookie: None,
            accept_language: None,
        }
    }

    /// Send `Accept-Language` on every following request.
    #[must_use]
    pub const fn with_accept_language(mut self, value: &'static str) -> Self {
        self.accept_language = Some(value);
        self
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body));
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-real-ip", CLIENT_IP);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(language) = self.accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }
        builder
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, request: Result<Request<Body>, axum::http::Error>) -> TestResponse {
        let request = request.expect("request should build");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(session_cookie)
        {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// `name=value` from a `Set-Cookie` header.
fn session_cookie(value: &HeaderValue) -> Option<String> {
    let value = value.to_str().ok()?;
    value.split(';').next().map(str::trim).map(String::from)
}
