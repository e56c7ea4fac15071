//! AI recommendation entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ownership::Owned;
use crate::domain::user::UserId;

/// Kind tag stored on every generated travel recommendation.
pub const TRAVEL_KIND: &str = "TRAVEL";

/// Validation errors raised by [`NewRecommendation::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationValidationError {
    /// Destination was empty after trimming.
    #[error("destination must not be blank")]
    BlankDestination,
    /// Generated content was empty.
    #[error("content must not be empty")]
    EmptyContent,
}

/// A persisted recommendation: the text returned by the generation API (or
/// the local fallback), tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning user; immutable.
    pub owner_id: UserId,
    /// Kind tag, currently always [`TRAVEL_KIND`].
    pub kind: String,
    /// Generated (or fallback) text.
    pub content: String,
    /// Destination the recommendation was generated for.
    pub destination: String,
    /// Optional budget-range string echoed from the request.
    pub budget_range: Option<String>,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
}

impl Owned for Recommendation {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Validated payload for persisting a generated recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendation {
    /// Identifier assigned up front.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: UserId,
    /// Kind tag.
    pub kind: String,
    /// Validated non-empty content.
    pub content: String,
    /// Validated non-blank destination.
    pub destination: String,
    /// Optional budget-range string.
    pub budget_range: Option<String>,
}

impl NewRecommendation {
    /// Validate and construct a recommendation record.
    pub fn new(
        owner_id: UserId,
        content: impl Into<String>,
        destination: impl Into<String>,
        budget_range: Option<String>,
    ) -> Result<Self, RecommendationValidationError> {
        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(RecommendationValidationError::BlankDestination);
        }
        let content = content.into();
        if content.is_empty() {
            return Err(RecommendationValidationError::EmptyContent);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            kind: TRAVEL_KIND.to_owned(),
            content,
            destination,
            budget_range,
        })
    }
}
