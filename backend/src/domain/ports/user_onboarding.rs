//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::user::Email;
use crate::domain::{Error, UserId};

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: Email,
    password: String,
}

impl Registration {
    /// Validate the email shape and the minimum password length.
    pub fn try_from_parts(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        let email = Email::new(email.into())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let password = password.into();
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::invalid_request(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(Self { email, password })
    }

    /// The validated registration email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The plaintext password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserOnboarding: Send + Sync {
    /// Create an account for the email and return the new user id. Fails
    /// with `invalid_request` when the email is already registered.
    async fn register(&self, registration: &Registration) -> Result<UserId, Error>;
}
