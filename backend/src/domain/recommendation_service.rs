//! Recommendation domain service.
//!
//! Generation never fails outward because of the gateway: any gateway error
//! is logged and replaced by a deterministic local fallback text, and the
//! resulting record is persisted either way.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    DeleteRecommendationRequest, GenerateRecommendationRequest, ListRecommendationsRequest,
    RecommendationPayload, RecommendationPrompt, RecommendationRepository,
    RecommendationRepositoryError, RecommendationSource, RecommendationsCommand,
    RecommendationsQuery,
};
use crate::domain::recommendation::NewRecommendation;
use crate::domain::{ensure_owner, Error};

fn map_repository_error(error: RecommendationRepositoryError) -> Error {
    match error {
        RecommendationRepositoryError::Connection { message } => Error::service_unavailable(
            format!("recommendation repository unavailable: {message}"),
        ),
        RecommendationRepositoryError::Query { message } => {
            Error::internal(format!("recommendation repository error: {message}"))
        }
    }
}

/// Local fallback text used whenever the gateway fails. Always mentions the
/// requested destination so the response stays recognizably on-topic.
fn fallback_content(prompt: &RecommendationPrompt) -> String {
    let budget = prompt.budget_range.as_deref().unwrap_or("specified");
    format!(
        "\u{1f30d} Travel Guide for {destination}\n\n\
         Based on your interests, here are some recommendations:\n\n\
         \u{1f3e8} **Accommodation**: Consider booking hotels in the city center for easy \
         access to attractions. Look for places with good reviews and within your \
         {budget} budget.\n\n\
         \u{1f37d}\u{fe0f} **Food**: Try local restaurants away from tourist areas for \
         authentic cuisine at better prices.\n\n\
         \u{1f4cd} **Attractions**: Mix popular tourist spots with hidden gems. Research \
         free walking tours.\n\n\
         \u{1f697} **Transport**: Public transportation is usually more economical than \
         taxis. Consider getting a travel pass.\n\n\
         \u{1f4a1} **Tip**: Book major attractions online in advance to save time and money.",
        destination = prompt.destination,
    )
}

/// Recommendation service implementing the recommendation command and query
/// ports over the repository and the generation gateway.
#[derive(Clone)]
pub struct RecommendationService<R, S> {
    recommendation_repo: Arc<R>,
    source: Arc<S>,
}

impl<R, S> RecommendationService<R, S> {
    /// Create a new recommendation service.
    pub fn new(recommendation_repo: Arc<R>, source: Arc<S>) -> Self {
        Self {
            recommendation_repo,
            source,
        }
    }
}

#[async_trait]
impl<R, S> RecommendationsCommand for RecommendationService<R, S>
where
    R: RecommendationRepository,
    S: RecommendationSource,
{
    async fn generate(
        &self,
        request: GenerateRecommendationRequest,
    ) -> Result<RecommendationPayload, Error> {
        if request.destination.trim().is_empty() {
            return Err(Error::invalid_request("destination must not be blank"));
        }

        let prompt = RecommendationPrompt {
            destination: request.destination.clone(),
            budget_range: request.budget_range.clone(),
            preferences: request.preferences,
        };

        let content = match self.source.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(
                    destination = %prompt.destination,
                    "generation returned empty text, using local fallback"
                );
                fallback_content(&prompt)
            }
            Err(err) => {
                tracing::warn!(
                    destination = %prompt.destination,
                    error = %err,
                    "generation gateway failed, using local fallback"
                );
                fallback_content(&prompt)
            }
        };

        let record = NewRecommendation::new(
            request.caller,
            content,
            request.destination,
            request.budget_range,
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        let stored = self
            .recommendation_repo
            .insert(&record)
            .await
            .map_err(map_repository_error)?;

        Ok(RecommendationPayload::from(stored))
    }

    async fn delete_recommendation(
        &self,
        request: DeleteRecommendationRequest,
    ) -> Result<(), Error> {
        let record = self
            .recommendation_repo
            .find_by_id(request.recommendation_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "recommendation {} not found",
                    request.recommendation_id
                ))
            })?;

        ensure_owner(&record, request.caller)?;

        self.recommendation_repo
            .delete(record.id)
            .await
            .map_err(map_repository_error)?;

        Ok(())
    }
}

#[async_trait]
impl<R, S> RecommendationsQuery for RecommendationService<R, S>
where
    R: RecommendationRepository,
    S: RecommendationSource,
{
    async fn list_recommendations(
        &self,
        request: ListRecommendationsRequest,
    ) -> Result<Vec<RecommendationPayload>, Error> {
        let records = self
            .recommendation_repo
            .list_for_owner(request.caller)
            .await
            .map_err(map_repository_error)?;

        Ok(records.into_iter().map(RecommendationPayload::from).collect())
    }
}

#[cfg(test)]
#[path = "recommendation_service_tests.rs"]
mod tests;
