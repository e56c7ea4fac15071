//! Tests for trip HTTP handlers.

use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web, App};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{MockTripsCommand, MockTripsQuery};
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
                .service(create_trip)
                .service(list_trips)
                .service(get_trip)
                .service(update_trip)
                .service(delete_trip),
        )
}

fn sample_body() -> TripBody {
    TripBody {
        title: "Kyoto in autumn".to_owned(),
        description: None,
        destination: "Kyoto".to_owned(),
        start_date: "2026-11-02".to_owned(),
        end_date: "2026-11-09".to_owned(),
        budget: dec!(1800),
        status: None,
    }
}

fn payload_owned_by(owner: UserId) -> TripPayload {
    let now = Utc::now();
    TripPayload {
        id: Uuid::new_v4(),
        owner_id: owner,
        title: "Kyoto in autumn".to_owned(),
        description: None,
        destination: "Kyoto".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 11, 9).expect("valid date"),
        budget: dec!(1800),
        total_expenses: Decimal::ZERO,
        status: crate::domain::TripStatus::Planning,
        created_at: now,
        updated_at: now,
    }
}

#[actix_web::test]
async fn create_trip_returns_created_payload() {
    let caller = UserId::random();
    let mut trips = MockTripsCommand::new();
    trips
        .expect_create_trip()
        .times(1)
        .returning(move |request| {
            assert_eq!(request.caller, caller);
            Ok(payload_owned_by(request.caller))
        });

    let mut state = mock_state_logged_in_as(caller);
    state.trips = Arc::new(trips);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .cookie(cookie)
            .set_json(sample_body())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["ownerId"], caller.to_string());
    assert_eq!(body["status"], "PLANNING");
    assert_eq!(body["destination"], "Kyoto");
}

#[actix_web::test]
async fn create_trip_rejects_malformed_start_date_with_details() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut body = sample_body();
    body.start_date = "02/11/2026".to_owned();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .cookie(cookie)
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["details"]["field"], "startDate");
    assert_eq!(value["details"]["code"], "invalid_date");
}

#[actix_web::test]
async fn create_trip_rejects_unknown_status() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut body = sample_body();
    body.status = Some("DRAFT".to_owned());

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .cookie(cookie)
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["details"]["code"], "invalid_status");
}

#[actix_web::test]
async fn trips_require_an_authenticated_session() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/trips")
            .set_json(sample_body())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn get_trip_maps_foreign_ownership_to_forbidden() {
    let caller = UserId::random();
    let mut query = MockTripsQuery::new();
    query
        .expect_get_trip()
        .times(1)
        .returning(|_| Err(crate::domain::Error::forbidden("not your trip")));

    let mut state = mock_state_logged_in_as(caller);
    state.trips_query = Arc::new(query);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/trips/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn get_trip_rejects_malformed_id() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/trips/not-a-uuid")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["details"]["field"], "tripId");
}

#[actix_web::test]
async fn delete_trip_returns_no_content() {
    let caller = UserId::random();
    let mut trips = MockTripsCommand::new();
    trips.expect_delete_trip().times(1).returning(|_| Ok(()));

    let mut state = mock_state_logged_in_as(caller);
    state.trips = Arc::new(trips);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/trips/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn list_trips_returns_camel_case_json() {
    let caller = UserId::random();
    let mut query = MockTripsQuery::new();
    query
        .expect_list_trips()
        .times(1)
        .returning(move |_| Ok(vec![payload_owned_by(caller)]));

    let mut state = mock_state_logged_in_as(caller);
    state.trips_query = Arc::new(query);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/trips")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let value: Value = actix_test::read_body_json(response).await;
    let first = &value.as_array().expect("array")[0];
    assert!(first.get("totalExpenses").is_some());
    assert!(first.get("total_expenses").is_none());
}
