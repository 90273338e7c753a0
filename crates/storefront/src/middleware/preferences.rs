//! Visitor extractor.
//!
//! Loads everything a page needs about the current visitor from the session:
//! language, theme, cart, wishlist and mock profile. Handlers that change any of these
//! go through the setters so the session and the in-memory copy stay in step.

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use max_publishing_core::{Cart, Language, Theme, UserProfile, Wishlist};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session::keys;

/// The visitor behind the current request.
#[derive(Debug, Clone)]
pub struct Visitor {
    session: Session,
    /// Resolved language: session, then `Accept-Language`, then English.
    pub language: Language,
    /// Resolved theme: session, then `System`.
    pub theme: Theme,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub profile: Option<UserProfile>,
    /// Path and query of the request, used as the return target of the
    /// header's preference forms.
    pub path: String,
}

impl Visitor {
    /// Store a new cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn save_cart(&mut self, cart: Cart) -> Result<(), AppError> {
        self.session.insert(keys::CART, &cart).await?;
        self.cart = cart;
        Ok(())
    }

    /// Store a new wishlist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn save_wishlist(&mut self, wishlist: Wishlist) -> Result<(), AppError> {
        self.session.insert(keys::WISHLIST, &wishlist).await?;
        self.wishlist = wishlist;
        Ok(())
    }

    /// Store the signed-in profile.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn set_profile(&mut self, profile: UserProfile) -> Result<(), AppError> {
        self.session.insert(keys::PROFILE, &profile).await?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Sign out. Only the profile is forgotten.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn clear_profile(&mut self) -> Result<(), AppError> {
        self.session.remove::<UserProfile>(keys::PROFILE).await?;
        self.profile = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn set_language(&mut self, language: Language) -> Result<(), AppError> {
        self.session.insert(keys::LANGUAGE, language).await?;
        self.language = language;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AppError::Session` if the session cannot be written.
    pub async fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.session.insert(keys::THEME, theme).await?;
        self.theme = theme;
        Ok(())
    }
}

fn accept_language(parts: &Parts) -> Option<Language> {
    parts
        .headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Language::from_accept_language)
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(message.to_string()))?;

        let language = match session.get::<Language>(keys::LANGUAGE).await? {
            Some(language) => language,
            None => accept_language(parts).unwrap_or_default(),
        };
        let theme = session.get::<Theme>(keys::THEME).await?.unwrap_or_default();
        let cart = session
            .get::<Cart>(keys::CART)
            .await?
            .map(Cart::normalize)
            .unwrap_or_default();
        let wishlist = session
            .get::<Wishlist>(keys::WISHLIST)
            .await?
            .map(Wishlist::normalize)
            .unwrap_or_default();
        let profile = session.get::<UserProfile>(keys::PROFILE).await?;

        let path = parts
            .uri
            .path_and_query()
            .map_or_else(|| "/".to_string(), |pq| pq.as_str().to_string());

        if let Some(profile) = &profile {
            sentry::configure_scope(|scope| {
                scope.set_user(Some(sentry::User {
                    id: Some(profile.id.to_string()),
                    ..Default::default()
                }));
            });
        }

        Ok(Self {
            session,
            language,
            theme,
            cart,
            wishlist,
            profile,
            path,
        })
    }
}
