//! Driving ports for travel recommendation use-cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recommendation::Recommendation;
use crate::domain::{Error, UserId};

/// Serializable recommendation projection returned by the driving ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    /// Stable identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: UserId,
    /// Kind tag, currently always "TRAVEL".
    pub kind: String,
    /// Generated (or fallback) text.
    pub content: String,
    /// Destination the recommendation was generated for.
    pub destination: String,
    /// Optional budget-range string echoed from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Recommendation> for RecommendationPayload {
    fn from(value: Recommendation) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            kind: value.kind,
            content: value.content,
            destination: value.destination,
            budget_range: value.budget_range,
            created_at: value.created_at,
        }
    }
}

/// Request to generate and persist a recommendation for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecommendationRequest {
    /// Authenticated caller; becomes the record's owner.
    pub caller: UserId,
    /// Destination to generate advice for.
    pub destination: String,
    /// Optional budget-range string, e.g. "$1000-$2000".
    pub budget_range: Option<String>,
    /// Optional free-text preferences folded into the prompt.
    pub preferences: Option<String>,
}

/// Request to delete a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRecommendationRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Recommendation to delete.
    pub recommendation_id: Uuid,
}

/// Driving port for recommendation mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationsCommand: Send + Sync {
    /// Generate advice for the destination, fall back to local text on any
    /// gateway failure, persist the record, and return it.
    async fn generate(
        &self,
        request: GenerateRecommendationRequest,
    ) -> Result<RecommendationPayload, Error>;

    /// Delete a recommendation; owner-only.
    async fn delete_recommendation(
        &self,
        request: DeleteRecommendationRequest,
    ) -> Result<(), Error>;
}

/// Request to list the caller's recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRecommendationsRequest {
    /// Authenticated caller.
    pub caller: UserId,
}

/// Driving port for recommendation reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationsQuery: Send + Sync {
    /// List every recommendation owned by the caller, newest first.
    async fn list_recommendations(
        &self,
        request: ListRecommendationsRequest,
    ) -> Result<Vec<RecommendationPayload>, Error>;
}
