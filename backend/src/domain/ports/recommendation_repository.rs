//! Port for recommendation persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recommendation::{NewRecommendation, Recommendation};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by recommendation repository adapters.
    pub enum RecommendationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "recommendation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "recommendation repository query failed: {message}",
    }
}

/// Port for writing and reading recommendation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Persist a generated recommendation and return it as stored.
    async fn insert(
        &self,
        recommendation: &NewRecommendation,
    ) -> Result<Recommendation, RecommendationRepositoryError>;

    /// Find a recommendation by id.
    async fn find_by_id(
        &self,
        recommendation_id: Uuid,
    ) -> Result<Option<Recommendation>, RecommendationRepositoryError>;

    /// All recommendations owned by the user, newest first.
    async fn list_for_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<Recommendation>, RecommendationRepositoryError>;

    /// Delete a recommendation by id.
    async fn delete(&self, recommendation_id: Uuid)
        -> Result<(), RecommendationRepositoryError>;
}
