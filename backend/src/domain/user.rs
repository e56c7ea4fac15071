//! User identity types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors raised by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The email was empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,
    /// The email lacked the expected `local@domain` shape.
    #[error("email must contain a single @ with a non-empty local part and domain")]
    MalformedEmail,
    /// The stored credential hash was empty.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    ///
    /// Validation is intentionally shallow: a single `@` separating a
    /// non-empty local part from a non-empty domain. Deliverability is the
    /// mail system's problem, not ours.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(UserValidationError::MalformedEmail),
        }
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Coarse account role. There is no role hierarchy: authorization is pure
/// ownership equality, and the role only labels the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular account.
    User,
    /// Administrative account (labelling only).
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Unique login email.
    pub email: Email,
    /// Hex-encoded SHA-256 of the password.
    pub password_hash: String,
    /// Account role label.
    pub role: Role,
    /// Set by the store on insert.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("ada@example.com")]
    #[case::subdomain("ada.lovelace@mail.example.com")]
    #[case::trims(" ada@example.com ")]
    fn accepts_reasonable_emails(#[case] raw: &str) {
        let email = Email::new(raw).expect("email validates");
        assert_eq!(email.as_str(), raw.trim());
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::no_at("ada.example.com")]
    #[case::no_local("@example.com")]
    #[case::no_domain("ada@")]
    #[case::double_at("ada@b@example.com")]
    fn rejects_malformed_emails(#[case] raw: &str) {
        assert!(Email::new(raw).is_err());
    }

    #[test]
    fn user_id_displays_as_uuid() {
        let uuid = uuid::Uuid::new_v4();
        assert_eq!(UserId::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
