//! Port for trip persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::trip::{NewTrip, Trip, TripChanges};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by trip repository adapters.
    pub enum TripRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "trip repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "trip repository query failed: {message}",
    }
}

/// Port for writing and reading trips.
///
/// Timestamps and the initial zero expense total are assigned by the store;
/// mutating methods return the persisted entity so callers observe them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Persist a new trip and return it as stored.
    async fn create(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError>;

    /// Replace a trip's mutable fields and return the updated entity.
    async fn update(&self, trip_id: Uuid, changes: &TripChanges)
        -> Result<Trip, TripRepositoryError>;

    /// Delete a trip and all of its expenses in one transaction, children
    /// first.
    async fn delete_with_expenses(&self, trip_id: Uuid) -> Result<(), TripRepositoryError>;

    /// Find a trip by id.
    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<Trip>, TripRepositoryError>;

    /// All trips owned by the user, newest first.
    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<Trip>, TripRepositoryError>;

    /// Trips owned by the user whose start date is strictly after `after`,
    /// ordered ascending by start date.
    async fn list_upcoming(
        &self,
        owner_id: UserId,
        after: NaiveDate,
    ) -> Result<Vec<Trip>, TripRepositoryError>;
}
