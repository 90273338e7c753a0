//! Mock profile route handlers.
//!
//! Signing in only stores a name and email in the session; there are no
//! passwords and no accounts.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use max_publishing_core::{Language, ProfileError, UserProfile};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::i18n::{common, labels, profile};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::section::Section;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileParams {
    #[serde(default)]
    pub saved: Option<String>,
}

labels!(ProfileLabels {
    title => profile::TITLE,
    sign_in_title => profile::SIGN_IN_TITLE,
    sign_in_text => profile::SIGN_IN_TEXT,
    name => profile::NAME,
    email => profile::EMAIL,
    phone => profile::PHONE,
    address => profile::ADDRESS,
    sign_in => profile::SIGN_IN,
    sign_out => profile::SIGN_OUT,
    member_since => profile::MEMBER_SINCE,
    edit => profile::EDIT,
    save => profile::SAVE,
    not_provided => profile::NOT_PROVIDED,
    cart_summary => profile::CART_SUMMARY,
    view_cart => profile::VIEW_CART,
    saved => profile::SAVED,
    wishlist_title => profile::WISHLIST_TITLE,
    wishlist_empty => profile::WISHLIST_EMPTY,
    browse_books => profile::BROWSE_BOOKS,
    remove => profile::REMOVE,
    by => common::BY,
});

/// A saved book resolved for one language.
pub struct WishlistEntry {
    pub id: &'static str,
    pub href: String,
    pub title: &'static str,
    pub author: &'static str,
    pub price: String,
}

impl WishlistEntry {
    /// Saved books still in the catalog, in save order.
    fn list(visitor: &Visitor) -> Vec<Self> {
        visitor
            .wishlist
            .ids()
            .iter()
            .filter_map(|id| catalog::book(id.as_str()))
            .map(|book| Self {
                id: book.id,
                href: format!("/books/{}", book.id),
                title: book.title.get(visitor.language),
                author: book.author,
                price: book.price.display(visitor.language),
            })
            .collect()
    }
}

/// Signed-in profile resolved for display.
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub initials: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub member_since: String,
}

impl ProfileView {
    fn new(profile: &UserProfile, language: Language) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.to_string(),
            avatar: profile.avatar.clone(),
            initials: profile.initials(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            member_since: profile.member_since(language),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub layout: LayoutView,
    pub labels: ProfileLabels,
    pub profile: Option<ProfileView>,
    /// Sign-in form values echoed back after a failed attempt.
    pub sign_in: SignInForm,
    /// Edit form values; the stored profile unless an edit failed.
    pub edit: EditForm,
    pub errors: Vec<&'static str>,
    pub saved: bool,
    pub cart_items: u32,
    pub cart_subtotal: String,
    pub wishlist: Vec<WishlistEntry>,
}

impl ProfileTemplate {
    fn new(state: &AppState, visitor: &Visitor, nonce: &CspNonce) -> Self {
        let language = visitor.language;
        let edit = visitor
            .profile
            .as_ref()
            .map(|p| EditForm {
                name: p.name.clone(),
                phone: p.phone.clone().unwrap_or_default(),
                address: p.address.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            layout: LayoutView::new(
                state,
                visitor,
                nonce,
                Some(Section::Profile),
                profile::META_TITLE.get(language),
            ),
            labels: ProfileLabels::new(language),
            profile: visitor
                .profile
                .as_ref()
                .map(|p| ProfileView::new(p, language)),
            sign_in: SignInForm::default(),
            edit,
            errors: Vec::new(),
            saved: false,
            cart_items: visitor.cart.total_items(),
            cart_subtotal: visitor.cart.subtotal().display(language),
            wishlist: WishlistEntry::list(visitor),
        }
    }

    fn with_error(mut self, error: &ProfileError, language: Language) -> Response {
        let message = match error {
            ProfileError::MissingName => &profile::ERROR_NAME,
            ProfileError::InvalidEmail(_) => &profile::ERROR_EMAIL,
        };
        self.errors.push(message.get(language));
        (StatusCode::UNPROCESSABLE_ENTITY, self).into_response()
    }
}

/// Display the profile, or the sign-in form when nobody is signed in.
#[instrument(skip_all, fields(signed_in = visitor.profile.is_some()))]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
    Query(params): Query<ProfileParams>,
) -> impl IntoResponse {
    let mut page = ProfileTemplate::new(&state, &visitor, &nonce);
    page.saved = page.profile.is_some() && params.saved.is_some();
    page
}

/// Mock sign-in.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    mut visitor: Visitor,
    nonce: CspNonce,
    Form(form): Form<SignInForm>,
) -> Result<Response> {
    let today = chrono::Local::now().date_naive();
    match UserProfile::sign_in(&form.name, &form.email, today) {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Signed in");
            add_breadcrumb("profile", "Signed in", None);
            visitor.set_profile(user).await?;
            Ok(Redirect::to(Section::Profile.path()).into_response())
        }
        Err(error) => {
            tracing::debug!(%error, "Sign-in rejected");
            let language = visitor.language;
            let mut page = ProfileTemplate::new(&state, &visitor, &nonce);
            page.sign_in = form;
            Ok(page.with_error(&error, language))
        }
    }
}

/// Save profile edits.
///
/// Without a signed-in profile this just goes back to the sign-in form.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    mut visitor: Visitor,
    nonce: CspNonce,
    Form(form): Form<EditForm>,
) -> Result<Response> {
    let Some(mut user) = visitor.profile.clone() else {
        return Ok(Redirect::to(Section::Profile.path()).into_response());
    };

    match user.apply_edit(&form.name, &form.phone, &form.address) {
        Ok(()) => {
            visitor.set_profile(user).await?;
            add_breadcrumb("profile", "Profile updated", None);
            Ok(Redirect::to("/profile?saved=1").into_response())
        }
        Err(error) => {
            let language = visitor.language;
            let mut page = ProfileTemplate::new(&state, &visitor, &nonce);
            page.edit = form;
            Ok(page.with_error(&error, language))
        }
    }
}

/// Sign out. The cart stays.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip_all)]
pub async fn sign_out(mut visitor: Visitor) -> Result<Redirect> {
    visitor.clear_profile().await?;
    add_breadcrumb("profile", "Signed out", None);
    Ok(Redirect::to(Section::Profile.path()))
}
