//! Diesel-backed authentication and registration adapter.
//!
//! One adapter implements both account-facing driving ports because they
//! share the `users` table and the credential-hashing scheme: registration
//! stores the hex-encoded SHA-256 of the password and authentication
//! compares against it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::ports::{LoginCredentials, LoginService, Registration, UserOnboarding};
use crate::domain::{Error, UserId};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of [`LoginService`] and [`UserOnboarding`].
#[derive(Clone)]
pub struct DieselLoginService {
    pool: DbPool,
}

impl DieselLoginService {
    /// Create a new service backed by the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Hex-encoded SHA-256 of the password.
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

fn pool_error(error: PoolError) -> Error {
    map_pool_error(error, Error::service_unavailable)
}

fn diesel_error(error: diesel::result::Error) -> Error {
    map_diesel_error(error, Error::internal, Error::service_unavailable)
}

#[async_trait]
impl UserOnboarding for DieselLoginService {
    async fn register(&self, registration: &Registration) -> Result<UserId, Error> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let user_id = Uuid::new_v4();
        let password_hash = hash_password(registration.password());
        let new_row = NewUserRow {
            id: user_id,
            email: registration.email().as_str(),
            password_hash: &password_hash,
            role: "USER",
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    Error::invalid_request("email already registered")
                } else {
                    diesel_error(err)
                }
            })?;

        tracing::info!(user_id = %user_id, "registered account");
        Ok(UserId::from_uuid(user_id))
    }
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = users::table
            .filter(users::email.eq(credentials.email().as_str()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        // Unknown email and wrong password produce the same error so the
        // response does not reveal which emails are registered.
        let Some(row) = row else {
            return Err(Error::unauthorized("invalid credentials"));
        };
        if row.password_hash != hash_password(credentials.password()) {
            return Err(Error::unauthorized("invalid credentials"));
        }

        Ok(UserId::from_uuid(row.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_hex_encoded_sha256() {
        let hash = hash_password("hunter2");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        // Known SHA-256 of "hunter2".
        assert_eq!(
            hash,
            "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
        );
    }

    #[test]
    fn same_password_hashes_identically() {
        assert_eq!(hash_password("s3cret!"), hash_password("s3cret!"));
        assert_ne!(hash_password("s3cret!"), hash_password("s3cret"));
    }
}
