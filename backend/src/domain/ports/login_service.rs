//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to authenticate credentials without
//! knowing the backing infrastructure, which keeps HTTP handler tests
//! deterministic: they substitute a test double instead of wiring
//! persistence.

use async_trait::async_trait;

use crate::domain::user::Email;
use crate::domain::{Error, UserId};

/// Validated login credentials.
///
/// The password is kept verbatim; hashing happens in the adapter that owns
/// the stored-hash comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: String,
}

impl LoginCredentials {
    /// Validate the email shape and reject empty passwords.
    pub fn try_from_parts(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        let email = Email::new(email.into())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let password = password.into();
        if password.is_empty() {
            return Err(Error::invalid_request("password must not be empty"));
        }
        Ok(Self { email, password })
    }

    /// The validated login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The plaintext password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[test]
    fn accepts_reasonable_credentials() {
        let creds = LoginCredentials::try_from_parts("ada@example.com", "s3cret!")
            .expect("credentials validate");
        assert_eq!(creds.email().as_str(), "ada@example.com");
        assert_eq!(creds.password(), "s3cret!");
    }

    #[rstest]
    #[case::bad_email("not-an-email", "s3cret!")]
    #[case::empty_password("ada@example.com", "")]
    fn rejects_malformed_parts(#[case] email: &str, #[case] password: &str) {
        let error = LoginCredentials::try_from_parts(email, password).expect_err("must fail");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
