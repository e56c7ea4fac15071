//! Driving ports for trip use-cases.
//!
//! Inbound adapters call these ports with an explicit caller identity; the
//! implementing service owns validation and the ownership check, so handlers
//! never touch repositories directly.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::trip::{Trip, TripFields, TripStatus};
use crate::domain::{Error, UserId};

/// Serializable trip projection returned by the driving ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPayload {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: UserId,
    /// Trip title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Destination label.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Planned budget.
    pub budget: Decimal,
    /// Cached sum of the trip's expense amounts.
    pub total_expenses: Decimal,
    /// Lifecycle status.
    pub status: TripStatus,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripPayload {
    fn from(value: Trip) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
            destination: value.destination,
            start_date: value.start_date,
            end_date: value.end_date,
            budget: value.budget,
            total_expenses: value.total_expenses,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Request to create a trip owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTripRequest {
    /// Authenticated caller; becomes the immutable owner.
    pub caller: UserId,
    /// Unvalidated trip fields from the boundary.
    pub fields: TripFields,
}

/// Request to replace a trip's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTripRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Trip to update.
    pub trip_id: Uuid,
    /// Unvalidated replacement fields.
    pub fields: TripFields,
}

/// Request to delete a trip and its expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTripRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Trip to delete.
    pub trip_id: Uuid,
}

/// Driving port for trip mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripsCommand: Send + Sync {
    /// Validate and persist a new trip owned by the caller.
    async fn create_trip(&self, request: CreateTripRequest) -> Result<TripPayload, Error>;

    /// Replace a trip's mutable fields; owner-only.
    async fn update_trip(&self, request: UpdateTripRequest) -> Result<TripPayload, Error>;

    /// Delete a trip and all of its expenses; owner-only.
    async fn delete_trip(&self, request: DeleteTripRequest) -> Result<(), Error>;
}

/// Request to fetch one trip by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTripRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Trip to fetch.
    pub trip_id: Uuid,
}

/// Request to list the caller's trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTripsRequest {
    /// Authenticated caller.
    pub caller: UserId,
}

/// Driving port for trip reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripsQuery: Send + Sync {
    /// Fetch one trip; owner-only.
    async fn get_trip(&self, request: GetTripRequest) -> Result<TripPayload, Error>;

    /// List every trip owned by the caller, newest first.
    async fn list_trips(&self, request: ListTripsRequest) -> Result<Vec<TripPayload>, Error>;
}
