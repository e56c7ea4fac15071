//! PostgreSQL-backed `RecommendationRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{RecommendationRepository, RecommendationRepositoryError};
use crate::domain::recommendation::{NewRecommendation, Recommendation};
use crate::domain::user::UserId;

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRecommendationRow, RecommendationRow};
use super::pool::{DbPool, PoolError};
use super::schema::ai_recommendations;

/// Diesel-backed implementation of the recommendation repository port.
#[derive(Clone)]
pub struct DieselRecommendationRepository {
    pool: DbPool,
}

impl DieselRecommendationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> RecommendationRepositoryError {
    map_pool_error(error, RecommendationRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> RecommendationRepositoryError {
    map_diesel_error(
        error,
        RecommendationRepositoryError::query,
        RecommendationRepositoryError::connection,
    )
}

#[async_trait]
impl RecommendationRepository for DieselRecommendationRepository {
    async fn insert(
        &self,
        recommendation: &NewRecommendation,
    ) -> Result<Recommendation, RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let new_row = NewRecommendationRow {
            id: recommendation.id,
            owner_id: *recommendation.owner_id.as_uuid(),
            kind: &recommendation.kind,
            content: &recommendation.content,
            destination: &recommendation.destination,
            budget_range: recommendation.budget_range.as_deref(),
        };

        let row: RecommendationRow = diesel::insert_into(ai_recommendations::table)
            .values(&new_row)
            .returning(RecommendationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(Recommendation::from(row))
    }

    async fn find_by_id(
        &self,
        recommendation_id: Uuid,
    ) -> Result<Option<Recommendation>, RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = ai_recommendations::table
            .find(recommendation_id)
            .select(RecommendationRow::as_select())
            .first::<RecommendationRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(Recommendation::from))
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<Recommendation>, RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<RecommendationRow> = ai_recommendations::table
            .filter(ai_recommendations::owner_id.eq(owner_id.as_uuid()))
            .order(ai_recommendations::created_at.desc())
            .select(RecommendationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    async fn delete(
        &self,
        recommendation_id: Uuid,
    ) -> Result<(), RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(ai_recommendations::table.find(recommendation_id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }
}
