//! Trip domain service.
//!
//! Implements the trip driving ports over the trip repository, owning
//! validation and the ownership check so inbound adapters stay thin.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    CreateTripRequest, DeleteTripRequest, GetTripRequest, ListTripsRequest, TripPayload,
    TripRepository, TripRepositoryError, TripsCommand, TripsQuery, UpdateTripRequest,
};
use crate::domain::trip::{NewTrip, Trip, TripChanges};
use crate::domain::{ensure_owner, Error, UserId};

fn map_repository_error(error: TripRepositoryError) -> Error {
    match error {
        TripRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("trip repository unavailable: {message}"))
        }
        TripRepositoryError::Query { message } => {
            Error::internal(format!("trip repository error: {message}"))
        }
    }
}

/// Trip service implementing the trip command and query ports.
#[derive(Clone)]
pub struct TripService<R> {
    trip_repo: Arc<R>,
}

impl<R> TripService<R> {
    /// Create a new trip service over the trip repository.
    pub fn new(trip_repo: Arc<R>) -> Self {
        Self { trip_repo }
    }
}

impl<R> TripService<R>
where
    R: TripRepository,
{
    /// Resolve a trip and verify the caller owns it.
    async fn owned_trip(&self, trip_id: Uuid, caller: UserId) -> Result<Trip, Error> {
        let trip = self
            .trip_repo
            .find_by_id(trip_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("trip {trip_id} not found")))?;
        ensure_owner(&trip, caller)?;
        Ok(trip)
    }
}

#[async_trait]
impl<R> TripsCommand for TripService<R>
where
    R: TripRepository,
{
    async fn create_trip(&self, request: CreateTripRequest) -> Result<TripPayload, Error> {
        let trip = NewTrip::new(request.caller, request.fields)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let stored = self
            .trip_repo
            .create(&trip)
            .await
            .map_err(map_repository_error)?;

        tracing::info!(trip_id = %stored.id, owner_id = %stored.owner_id, "trip created");
        Ok(TripPayload::from(stored))
    }

    async fn update_trip(&self, request: UpdateTripRequest) -> Result<TripPayload, Error> {
        self.owned_trip(request.trip_id, request.caller).await?;

        let changes = TripChanges::new(request.fields)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let stored = self
            .trip_repo
            .update(request.trip_id, &changes)
            .await
            .map_err(map_repository_error)?;

        Ok(TripPayload::from(stored))
    }

    async fn delete_trip(&self, request: DeleteTripRequest) -> Result<(), Error> {
        self.owned_trip(request.trip_id, request.caller).await?;

        self.trip_repo
            .delete_with_expenses(request.trip_id)
            .await
            .map_err(map_repository_error)?;

        tracing::info!(trip_id = %request.trip_id, "trip and its expenses deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TripsQuery for TripService<R>
where
    R: TripRepository,
{
    async fn get_trip(&self, request: GetTripRequest) -> Result<TripPayload, Error> {
        let trip = self.owned_trip(request.trip_id, request.caller).await?;
        Ok(TripPayload::from(trip))
    }

    async fn list_trips(&self, request: ListTripsRequest) -> Result<Vec<TripPayload>, Error> {
        let trips = self
            .trip_repo
            .list_for_owner(request.caller)
            .await
            .map_err(map_repository_error)?;

        Ok(trips.into_iter().map(TripPayload::from).collect())
    }
}

#[cfg(test)]
#[path = "trip_service_tests.rs"]
mod tests;
