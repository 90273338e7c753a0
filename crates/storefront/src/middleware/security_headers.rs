//! Security headers middleware.
//!
//! Every response gets a locked-down header set. The CSP allows inline
//! scripts only when they carry the request's [`CspNonce`], which
//! `csp_nonce_middleware` attaches to the response extensions.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;
use crate::state::AppState;

/// Hosts the analytics tag loads from and reports to.
const ANALYTICS_SCRIPT_SRC: &str = "https://www.googletagmanager.com";
const ANALYTICS_CONNECT_SRC: &str =
    "https://*.google-analytics.com https://*.analytics.google.com https://www.googletagmanager.com";

/// Build the Content-Security-Policy value.
///
/// ```text
/// default-src 'none';
/// script-src 'self' 'nonce-…' [analytics];
/// style-src 'self';
/// img-src 'self' data: https://www.gravatar.com [analytics];
/// connect-src 'self' [analytics];
/// font-src 'self';
/// object-src 'none';
/// frame-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none';
/// [upgrade-insecure-requests]
/// ```
#[must_use]
pub fn content_security_policy(nonce: Option<&str>, analytics: bool, secure: bool) -> String {
    let mut script_src = String::from("'self'");
    if let Some(nonce) = nonce.filter(|n| !n.is_empty()) {
        script_src.push_str(&format!(" 'nonce-{nonce}'"));
    }
    let mut img_src = String::from("'self' data: https://www.gravatar.com");
    let mut connect_src = String::from("'self'");
    if analytics {
        script_src.push(' ');
        script_src.push_str(ANALYTICS_SCRIPT_SRC);
        img_src.push_str(" https://*.google-analytics.com");
        connect_src.push(' ');
        connect_src.push_str(ANALYTICS_CONNECT_SRC);
    }

    let mut policy = format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         img-src {img_src}; \
         connect-src {connect_src}; \
         font-src 'self'; \
         object-src 'none'; \
         frame-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    );
    if secure {
        policy.push_str("; upgrade-insecure-requests");
    }
    policy
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `Content-Security-Policy` (see [`content_security_policy`])
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Permissions-Policy` denying device features
/// - `Cross-Origin-Opener-Policy: same-origin`
/// - `Cache-Control: no-store` on pages that did not set their own
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let nonce = response.extensions().get::<CspNonce>().cloned();
    let config = state.config();
    let policy = content_security_policy(
        nonce.as_ref().map(CspNonce::value),
        config.analytics.ga4_measurement_id.is_some(),
        config.is_secure(),
    );

    apply_headers(response.headers_mut(), &policy);
    response
}

fn apply_headers(headers: &mut HeaderMap, policy: &str) {
    if let Ok(value) = HeaderValue::from_str(policy) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    } else {
        tracing::error!("CSP value is not a valid header; falling back to default-src 'self'");
        headers.insert(
            CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        );
    }

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), camera=(), geolocation=(), gyroscope=(), \
             magnetometer=(), microphone=(), payment=(), usb=(), interest-cohort=()",
        ),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    // Pages carry the visitor's cart and profile; static files set their own.
    headers
        .entry(CACHE_CONTROL)
        .or_insert(HeaderValue::from_static("no-store, max-age=0"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_includes_nonce() {
        let policy = content_security_policy(Some("abc123"), false, false);
        assert!(policy.contains("script-src 'self' 'nonce-abc123';"));
        assert!(!policy.contains("googletagmanager"));
        assert!(!policy.contains("upgrade-insecure-requests"));
    }

    #[test]
    fn test_policy_without_nonce() {
        let policy = content_security_policy(None, false, false);
        assert!(policy.contains("script-src 'self';"));
        assert!(!policy.contains("nonce-"));
    }

    #[test]
    fn test_policy_with_analytics_and_https() {
        let policy = content_security_policy(Some("n"), true, true);
        assert!(policy.contains(ANALYTICS_SCRIPT_SRC));
        assert!(policy.contains("connect-src 'self' https://*.google-analytics.com"));
        assert!(policy.ends_with("upgrade-insecure-requests"));
    }

    #[test]
    fn test_apply_headers_keeps_existing_cache_control() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("public, max-age=60"));
        apply_headers(&mut headers, "default-src 'none'");
        assert_eq!(
            headers.get(CACHE_CONTROL).and_then(|v| v.to_str().ok()),
            Some("public, max-age=60")
        );
        assert_eq!(
            headers.get(X_FRAME_OPTIONS).and_then(|v| v.to_str().ok()),
            Some("DENY")
        );
    }
}
