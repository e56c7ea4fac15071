//! Travel recommendation HTTP handlers.
//!
//! ```text
//! POST   /api/v1/recommendations
//! GET    /api/v1/recommendations
//! DELETE /api/v1/recommendations/{recommendation_id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    DeleteRecommendationRequest, GenerateRecommendationRequest, ListRecommendationsRequest,
    RecommendationPayload,
};
use crate::domain::Error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_uuid, FieldName};
use crate::inbound::http::ApiResult;

const RECOMMENDATION_ID_FIELD: FieldName = FieldName::new("recommendationId");

/// Request body for generating a recommendation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBody {
    #[schema(example = "Lisbon")]
    pub destination: String,
    #[schema(example = "$1000-$2000")]
    pub budget_range: Option<String>,
    #[schema(example = "food and museums")]
    pub preferences: Option<String>,
}

/// Generate and persist a recommendation for the caller.
#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    request_body = RecommendationBody,
    responses(
        (status = 201, description = "Recommendation generated", body = RecommendationPayload),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recommendations"],
    operation_id = "generateRecommendation"
)]
#[post("/recommendations")]
pub async fn generate_recommendation(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<RecommendationBody>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let payload = payload.into_inner();
    let recommendation = state
        .recommendations
        .generate(GenerateRecommendationRequest {
            caller,
            destination: payload.destination,
            budget_range: payload.budget_range,
            preferences: payload.preferences,
        })
        .await?;
    Ok(HttpResponse::Created().json(recommendation))
}

/// List the caller's recommendations.
#[utoipa::path(
    get,
    path = "/api/v1/recommendations",
    responses(
        (status = 200, description = "Recommendations", body = [RecommendationPayload]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recommendations"],
    operation_id = "listRecommendations"
)]
#[get("/recommendations")]
pub async fn list_recommendations(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<RecommendationPayload>>> {
    let caller = session.require_user_id()?;
    let recommendations = state
        .recommendations_query
        .list_recommendations(ListRecommendationsRequest { caller })
        .await?;
    Ok(web::Json(recommendations))
}

/// Delete a recommendation.
#[utoipa::path(
    delete,
    path = "/api/v1/recommendations/{recommendation_id}",
    params(("recommendation_id" = String, Path, format = "uuid")),
    responses(
        (status = 204, description = "Recommendation deleted"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recommendations"],
    operation_id = "deleteRecommendation"
)]
#[delete("/recommendations/{recommendation_id}")]
pub async fn delete_recommendation(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let recommendation_id = parse_uuid(&path.into_inner(), RECOMMENDATION_ID_FIELD)?;
    state
        .recommendations
        .delete_recommendation(DeleteRecommendationRequest {
            caller,
            recommendation_id,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test as actix_test, web, App};
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::MockRecommendationsCommand;
    use crate::domain::UserId;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{
        login_and_get_cookie, mock_state_logged_in_as, test_session_middleware,
    };

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(crate::inbound::http::users::login)
                    .service(generate_recommendation)
                    .service(list_recommendations)
                    .service(delete_recommendation),
            )
    }

    #[actix_web::test]
    async fn generate_returns_created_recommendation() {
        let caller = UserId::random();
        let mut commands = MockRecommendationsCommand::new();
        commands.expect_generate().times(1).returning(|request| {
            Ok(RecommendationPayload {
                id: Uuid::new_v4(),
                owner_id: request.caller,
                kind: "TRAVEL".to_owned(),
                content: "Visit Belém early in the morning.".to_owned(),
                destination: request.destination,
                budget_range: request.budget_range,
                created_at: Utc::now(),
            })
        });

        let mut state = mock_state_logged_in_as(caller);
        state.recommendations = Arc::new(commands);

        let app = actix_test::init_service(test_app(state)).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/recommendations")
                .cookie(cookie)
                .set_json(RecommendationBody {
                    destination: "Lisbon".to_owned(),
                    budget_range: Some("$1000-$2000".to_owned()),
                    preferences: None,
                })
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["kind"], "TRAVEL");
        assert_eq!(value["destination"], "Lisbon");
        assert_eq!(value["budgetRange"], "$1000-$2000");
    }

    #[actix_web::test]
    async fn generate_requires_an_authenticated_session() {
        let app =
            actix_test::init_service(test_app(mock_state_logged_in_as(UserId::random()))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/recommendations")
                .set_json(RecommendationBody {
                    destination: "Lisbon".to_owned(),
                    budget_range: None,
                    preferences: None,
                })
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn delete_surfaces_forbidden_for_foreign_records() {
        let caller = UserId::random();
        let mut commands = MockRecommendationsCommand::new();
        commands
            .expect_delete_recommendation()
            .times(1)
            .returning(|_| Err(crate::domain::Error::forbidden("not your recommendation")));

        let mut state = mock_state_logged_in_as(caller);
        state.recommendations = Arc::new(commands);

        let app = actix_test::init_service(test_app(state)).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/recommendations/{}", Uuid::new_v4()))
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
