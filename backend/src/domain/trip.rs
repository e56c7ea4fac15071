//! Trip entity and its validated constructors.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ownership::Owned;
use crate::domain::user::UserId;

/// Lifecycle status of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    /// Trip is being planned (default on creation).
    Planning,
    /// Trip is underway.
    Ongoing,
    /// Trip finished.
    Completed,
    /// Trip was called off.
    Cancelled,
}

impl Default for TripStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl TripStatus {
    /// Database representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse the database representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "PLANNING" => Some(Self::Planning),
            "ONGOING" => Some(Self::Ongoing),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Validation errors raised by [`NewTrip::new`] and [`TripChanges::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripValidationError {
    /// Title was empty after trimming.
    #[error("title must not be blank")]
    BlankTitle,
    /// Destination was empty after trimming.
    #[error("destination must not be blank")]
    BlankDestination,
    /// Budget was zero or negative.
    #[error("budget must be positive")]
    NonPositiveBudget,
    /// End date preceded the start date.
    #[error("end date must not be before start date")]
    EndBeforeStart,
}

/// A persisted trip. The owner is immutable after creation and the cached
/// `total_expenses` always reflects the last committed expense recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning user; immutable.
    pub owner_id: UserId,
    /// Short human-readable title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Destination label.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Planned budget, always positive.
    pub budget: Decimal,
    /// Cached sum of this trip's expense amounts, never negative.
    pub total_expenses: Decimal,
    /// Lifecycle status.
    pub status: TripStatus,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every update.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Trip {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Validated payload for creating a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    /// Identifier assigned up front so the caller can reference the trip.
    pub id: Uuid,
    /// Owning user; immutable for the lifetime of the trip.
    pub owner_id: UserId,
    /// Validated non-blank title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Validated non-blank destination.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Validated positive budget.
    pub budget: Decimal,
    /// Initial lifecycle status.
    pub status: TripStatus,
}

/// Unvalidated trip fields shared by create and update payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct TripFields {
    /// Trip title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Destination label.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Planned budget.
    pub budget: Decimal,
    /// Lifecycle status; defaults to [`TripStatus::Planning`] when absent.
    pub status: Option<TripStatus>,
}

fn validate_fields(fields: &TripFields) -> Result<(), TripValidationError> {
    if fields.title.trim().is_empty() {
        return Err(TripValidationError::BlankTitle);
    }
    if fields.destination.trim().is_empty() {
        return Err(TripValidationError::BlankDestination);
    }
    if fields.budget <= Decimal::ZERO {
        return Err(TripValidationError::NonPositiveBudget);
    }
    if fields.end_date < fields.start_date {
        return Err(TripValidationError::EndBeforeStart);
    }
    Ok(())
}

impl NewTrip {
    /// Validate trip fields and bind them to their owner.
    pub fn new(owner_id: UserId, fields: TripFields) -> Result<Self, TripValidationError> {
        validate_fields(&fields)?;
        let TripFields {
            title,
            description,
            destination,
            start_date,
            end_date,
            budget,
            status,
        } = fields;
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            destination,
            start_date,
            end_date,
            budget,
            status: status.unwrap_or_default(),
        })
    }
}

/// Validated payload for updating a trip's mutable fields. Identity, owner,
/// and the cached expense total are not part of the changeset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripChanges {
    /// Validated non-blank title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Validated non-blank destination.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Validated positive budget.
    pub budget: Decimal,
    /// Lifecycle status; `None` keeps the stored status.
    pub status: Option<TripStatus>,
}

impl TripChanges {
    /// Validate a full replacement of the trip's mutable fields.
    pub fn new(fields: TripFields) -> Result<Self, TripValidationError> {
        validate_fields(&fields)?;
        let TripFields {
            title,
            description,
            destination,
            start_date,
            end_date,
            budget,
            status,
        } = fields;
        Ok(Self {
            title,
            description,
            destination,
            start_date,
            end_date,
            budget,
            status,
        })
    }
}
