//! Mock user profile.
//!
//! There is no account system: "signing in" stores a profile in the
//! visitor's session and nothing else. Validation is limited to presence
//! checks and the shape of the email address.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::email::{Email, EmailError};
use super::id::UserId;
use super::language::Language;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_IT: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Profile form errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("name is required")]
    MissingName,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// A visitor profile kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub avatar: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub joined: NaiveDate,
}

impl UserProfile {
    /// Create a profile from the sign-in form.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the name is blank or the email is invalid.
    pub fn sign_in(name: &str, email: &str, today: NaiveDate) -> Result<Self, ProfileError> {
        let name = required(name)?;
        let email = Email::parse(email)?;
        let avatar = gravatar_url(&email);

        Ok(Self {
            id: UserId::new(Uuid::new_v4().to_string()),
            name,
            email,
            avatar,
            phone: None,
            address: None,
            joined: today,
        })
    }

    /// Apply the edit form. Blank phone or address clears the field.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingName` if the name is blank; the profile
    /// is left untouched in that case.
    pub fn apply_edit(&mut self, name: &str, phone: &str, address: &str) -> Result<(), ProfileError> {
        self.name = required(name)?;
        self.phone = optional(phone);
        self.address = optional(address);
        Ok(())
    }

    /// "March 2026" / "marzo 2026".
    #[must_use]
    pub fn member_since(&self, language: Language) -> String {
        format!("{} {}", month_name(self.joined, language), self.joined.year())
    }

    /// Up to two initials for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn month_name(date: NaiveDate, language: Language) -> &'static str {
    let months = match language {
        Language::En => &MONTHS_EN,
        Language::It => &MONTHS_IT,
    };
    months.get(date.month0() as usize).copied().unwrap_or_default()
}

/// "January 15, 2026" / "15 gennaio 2026".
#[must_use]
pub fn long_date(date: NaiveDate, language: Language) -> String {
    let month = month_name(date, language);
    match language {
        Language::En => format!("{month} {}, {}", date.day(), date.year()),
        Language::It => format!("{} {month} {}", date.day(), date.year()),
    }
}

/// Gravatar identicon for an address.
#[must_use]
pub fn gravatar_url(email: &Email) -> String {
    let hash = Sha256::digest(email.normalized().as_bytes());
    format!("https://www.gravatar.com/avatar/{hash:x}?d=identicon&s=160")
}

fn required(value: &str) -> Result<String, ProfileError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ProfileError::MissingName)
    } else {
        Ok(value.to_owned())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(day(), Language::En), "March 14, 2026");
        assert_eq!(long_date(day(), Language::It), "14 marzo 2026");
    }

    #[test]
    fn test_sign_in() {
        let profile = UserProfile::sign_in("  Giulia Rossi ", "giulia@example.it", day()).unwrap();
        assert_eq!(profile.name, "Giulia Rossi");
        assert_eq!(profile.email.as_str(), "giulia@example.it");
        assert!(profile.avatar.starts_with("https://www.gravatar.com/avatar/"));
        assert!(profile.phone.is_none());
        assert!(!profile.id.as_str().is_empty());
    }

    #[test]
    fn test_sign_in_requires_name() {
        assert_eq!(
            UserProfile::sign_in("   ", "giulia@example.it", day()),
            Err(ProfileError::MissingName)
        );
    }

    #[test]
    fn test_sign_in_rejects_bad_email() {
        assert!(matches!(
            UserProfile::sign_in("Giulia", "giulia", day()),
            Err(ProfileError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_gravatar_ignores_case() {
        let a = gravatar_url(&Email::parse("Reader@Example.com").unwrap());
        let b = gravatar_url(&Email::parse("reader@example.com").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_edit() {
        let mut profile = UserProfile::sign_in("Giulia", "giulia@example.it", day()).unwrap();
        profile
            .apply_edit("Giulia Bianchi", " +39 051 000000 ", "Via Cavour 50, Bologna")
            .unwrap();
        assert_eq!(profile.name, "Giulia Bianchi");
        assert_eq!(profile.phone.as_deref(), Some("+39 051 000000"));

        profile.apply_edit("Giulia Bianchi", "", "  ").unwrap();
        assert!(profile.phone.is_none());
        assert!(profile.address.is_none());
    }

    #[test]
    fn test_apply_edit_keeps_profile_on_error() {
        let mut profile = UserProfile::sign_in("Giulia", "giulia@example.it", day()).unwrap();
        assert!(profile.apply_edit("", "123", "").is_err());
        assert_eq!(profile.name, "Giulia");
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_member_since() {
        let profile = UserProfile::sign_in("Giulia", "giulia@example.it", day()).unwrap();
        assert_eq!(profile.member_since(Language::En), "March 2026");
        assert_eq!(profile.member_since(Language::It), "marzo 2026");
    }

    #[test]
    fn test_initials() {
        let profile = UserProfile::sign_in("giulia maria rossi", "g@example.it", day()).unwrap();
        assert_eq!(profile.initials(), "GM");
    }
}
