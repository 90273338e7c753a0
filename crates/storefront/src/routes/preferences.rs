//! Language and theme switchers.
//!
//! The header posts here and is sent back to the page it came from.

use axum::{Form, response::Redirect};
use max_publishing_core::{Language, Theme};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::Visitor;
use crate::routes::local_redirect;

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Store the language preference.
///
/// # Errors
///
/// Returns 400 for an unsupported language code.
#[instrument(skip(visitor))]
pub async fn set_language(mut visitor: Visitor, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    let language =
        Language::parse(&form.language).map_err(|e| AppError::BadRequest(e.to_string()))?;
    visitor.set_language(language).await?;
    Ok(Redirect::to(local_redirect(form.redirect.as_deref(), "/")))
}

/// Store the theme preference.
///
/// # Errors
///
/// Returns 400 for an unknown theme.
#[instrument(skip(visitor))]
pub async fn set_theme(mut visitor: Visitor, Form(form): Form<ThemeForm>) -> Result<Redirect> {
    let theme = Theme::parse(&form.theme).map_err(|e| AppError::BadRequest(e.to_string()))?;
    visitor.set_theme(theme).await?;
    Ok(Redirect::to(local_redirect(form.redirect.as_deref(), "/")))
}
