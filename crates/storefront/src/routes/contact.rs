//! Contact form route handlers.
//!
//! There is no mail backend. A valid submission is logged and the visitor
//! gets a `mailto:` link to the company address with the subject and body
//! filled in.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use max_publishing_core::{Email, Language, Localized};
use serde::Deserialize;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::i18n::{COMPANY, CompanyView, contact, labels};
use crate::layout::LayoutView;
use crate::middleware::{CspNonce, Visitor};
use crate::routes::mailto;
use crate::section::Section;
use crate::state::AppState;

/// Topic of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubject {
    General,
    Publishing,
    Bulk,
    Rights,
    Partnership,
    Other,
}

impl ContactSubject {
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Publishing,
        Self::Bulk,
        Self::Rights,
        Self::Partnership,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Publishing => "publishing",
            Self::Bulk => "bulk",
            Self::Rights => "rights",
            Self::Partnership => "partnership",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static Localized {
        match self {
            Self::General => &contact::SUBJECT_GENERAL,
            Self::Publishing => &contact::SUBJECT_PUBLISHING,
            Self::Bulk => &contact::SUBJECT_BULK,
            Self::Rights => &contact::SUBJECT_RIGHTS,
            Self::Partnership => &contact::SUBJECT_PARTNERSHIP,
            Self::Other => &contact::SUBJECT_OTHER,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }
}

/// Submitted form. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation.
#[derive(Debug)]
pub struct Inquiry {
    pub name: String,
    pub email: Email,
    pub company: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

/// Field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    fn error(self) -> &'static Localized {
        match self {
            Self::Name => &contact::ERROR_NAME,
            Self::Email => &contact::ERROR_EMAIL,
            Self::Subject => &contact::ERROR_SUBJECT,
            Self::Message => &contact::ERROR_MESSAGE,
        }
    }
}

impl ContactForm {
    /// Validate every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns the failing fields in form order.
    pub fn validate(&self) -> Result<Inquiry, Vec<ContactField>> {
        let mut invalid = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            invalid.push(ContactField::Name);
        }
        let email = Email::parse(&self.email).ok();
        if email.is_none() {
            invalid.push(ContactField::Email);
        }
        let subject = ContactSubject::parse(&self.subject);
        if subject.is_none() {
            invalid.push(ContactField::Subject);
        }
        let message = self.message.trim();
        if message.is_empty() {
            invalid.push(ContactField::Message);
        }

        match (email, subject) {
            (Some(email), Some(subject)) if invalid.is_empty() => Ok(Inquiry {
                name: name.to_string(),
                email,
                company: Some(self.company.trim())
                    .filter(|c| !c.is_empty())
                    .map(String::from),
                subject,
                message: message.to_string(),
            }),
            _ => Err(invalid),
        }
    }
}

impl Inquiry {
    /// Prefilled email to the company, in the visitor's language.
    #[must_use]
    pub fn mailto(&self, language: Language) -> String {
        let subject = format!(
            "{}: {}",
            contact::EMAIL_SUBJECT.get(language),
            self.subject.label().get(language)
        );

        let mut body = format!(
            "{}: {}\n{}: {}\n",
            contact::MAIL_NAME.get(language),
            self.name,
            contact::MAIL_EMAIL.get(language),
            self.email
        );
        if let Some(company) = &self.company {
            body.push_str(&format!("{}: {company}\n", contact::MAIL_COMPANY.get(language)));
        }
        body.push('\n');
        body.push_str(&self.message);

        mailto(COMPANY.email, &subject, Some(&body))
    }
}

labels!(ContactLabels {
    title => contact::HEADER_TITLE,
    description => contact::DESCRIPTION,
    form_title => contact::FORM_TITLE,
    name => contact::NAME_LABEL,
    name_placeholder => contact::NAME_PLACEHOLDER,
    email => contact::EMAIL_LABEL,
    email_placeholder => contact::EMAIL_PLACEHOLDER,
    company => contact::COMPANY_LABEL,
    company_placeholder => contact::COMPANY_PLACEHOLDER,
    subject => contact::SUBJECT_LABEL,
    select_subject => contact::SELECT_SUBJECT,
    message => contact::MESSAGE_LABEL,
    message_placeholder => contact::MESSAGE_PLACEHOLDER,
    submit => contact::SUBMIT,
    mailto_disclaimer => contact::MAILTO_DISCLAIMER,
    info_title => contact::INFO_TITLE,
    general_email_title => contact::GENERAL_EMAIL_TITLE,
    general_email_text => contact::GENERAL_EMAIL_TEXT,
    registered_office => contact::REGISTERED_OFFICE,
    operational_office => contact::OPERATIONAL_OFFICE,
    errors_title => contact::ERRORS_TITLE,
    success_title => contact::SUCCESS_TITLE,
    success_text => contact::SUCCESS_TEXT,
    open_email => contact::OPEN_EMAIL,
});

pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: LayoutView,
    pub labels: ContactLabels,
    pub company: CompanyView,
    pub form: ContactForm,
    pub subjects: Vec<SubjectOption>,
    pub errors: Vec<&'static str>,
    /// Set after a valid submission.
    pub sent_mailto: Option<String>,
}

impl ContactTemplate {
    fn new(state: &AppState, visitor: &Visitor, nonce: &CspNonce, form: ContactForm) -> Self {
        let language = visitor.language;
        let subjects = ContactSubject::ALL
            .into_iter()
            .map(|subject| SubjectOption {
                value: subject.as_str(),
                label: subject.label().get(language),
                selected: subject.as_str() == form.subject.trim(),
            })
            .collect();

        Self {
            layout: LayoutView::new(
                state,
                visitor,
                nonce,
                Some(Section::Contact),
                contact::META_TITLE.get(language),
            )
            .with_description(contact::DESCRIPTION.get(language)),
            labels: ContactLabels::new(language),
            company: CompanyView::new(language),
            form,
            subjects,
            errors: Vec::new(),
            sent_mailto: None,
        }
    }
}

/// Display the contact form.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
) -> impl IntoResponse {
    ContactTemplate::new(&state, &visitor, &nonce, ContactForm::default())
}

/// Handle a contact form submission.
///
/// Invalid input re-renders the form with the errors (422). Valid input is
/// logged and answered with a success banner and the prefilled email link.
#[instrument(skip_all, fields(subject = %form.subject))]
pub async fn submit(
    State(state): State<AppState>,
    visitor: Visitor,
    nonce: CspNonce,
    Form(form): Form<ContactForm>,
) -> Response {
    let language = visitor.language;

    match form.validate() {
        Ok(inquiry) => {
            tracing::info!(
                name = %inquiry.name,
                email_domain = inquiry.email.domain(),
                company = inquiry.company.as_deref().unwrap_or("-"),
                subject = inquiry.subject.as_str(),
                message_len = inquiry.message.len(),
                "Contact inquiry received"
            );
            add_breadcrumb(
                "contact",
                "Inquiry submitted",
                Some(&[("subject", inquiry.subject.as_str())]),
            );

            let mut page = ContactTemplate::new(&state, &visitor, &nonce, ContactForm::default());
            page.sent_mailto = Some(inquiry.mailto(language));
            page.into_response()
        }
        Err(fields) => {
            tracing::debug!(?fields, "Contact form rejected");
            let errors = fields.iter().map(|f| f.error().get(language)).collect();
            let mut page = ContactTemplate::new(&state, &visitor, &nonce, form);
            page.errors = errors;
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Giulia Rossi".to_string(),
            email: "giulia@example.it".to_string(),
            company: String::new(),
            subject: "bulk".to_string(),
            message: "We need 500 copies.".to_string(),
        }
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!(ContactSubject::parse("rights"), Some(ContactSubject::Rights));
        assert_eq!(ContactSubject::parse(""), None);
        assert_eq!(ContactSubject::parse("sales"), None);
    }

    #[test]
    fn test_validate_ok() {
        let inquiry = valid_form().validate().unwrap();
        assert_eq!(inquiry.subject, ContactSubject::Bulk);
        assert_eq!(inquiry.company, None);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
    }

    #[test]
    fn test_validate_rejects_bad_email_only() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), vec![ContactField::Email]);
    }

    #[test]
    fn test_inquiry_mailto() {
        let form = ContactForm {
            company: "Libreria Centrale".to_string(),
            ..valid_form()
        };
        let link = form.validate().unwrap().mailto(Language::En);
        assert!(link.starts_with("mailto:fanyuchengcc@gmail.com?subject="));
        assert!(link.contains("Website%20Inquiry"));
        assert!(link.contains("Libreria%20Centrale"));
        assert!(link.contains("We%20need%20500%20copies."));
    }
}
