//! Tests for expense HTTP handlers.

use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web, App};
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde_json::Value;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{MockExpensesCommand, MockExpensesQuery};
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
                .service(add_expense)
                .service(list_expenses)
                .service(delete_expense),
        )
}

fn sample_body() -> ExpenseBody {
    ExpenseBody {
        title: "Shinkansen tickets".to_owned(),
        description: None,
        amount: dec!(120.50),
        expense_date: "2026-11-03".to_owned(),
        category: "transport".to_owned(),
    }
}

fn stored_payload(trip_id: Uuid) -> ExpensePayload {
    let now = Utc::now();
    ExpensePayload {
        id: Uuid::new_v4(),
        trip_id,
        title: "Shinkansen tickets".to_owned(),
        description: None,
        amount: dec!(120.50),
        expense_date: NaiveDate::from_ymd_opt(2026, 11, 3).expect("valid date"),
        category: "transport".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

#[actix_web::test]
async fn add_expense_returns_expense_and_new_trip_total() {
    let caller = UserId::random();
    let trip_id = Uuid::new_v4();

    let mut expenses = MockExpensesCommand::new();
    expenses
        .expect_add_expense()
        .times(1)
        .returning(move |request| {
            assert_eq!(request.trip_id, trip_id);
            Ok(AddExpenseResponse {
                expense: stored_payload(request.trip_id),
                trip_total: dec!(120.50),
            })
        });

    let mut state = mock_state_logged_in_as(caller);
    state.expenses = Arc::new(expenses);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/trips/{trip_id}/expenses"))
            .cookie(cookie)
            .set_json(sample_body())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["tripTotal"], "120.50");
    assert_eq!(value["expense"]["category"], "transport");
}

#[actix_web::test]
async fn add_expense_rejects_malformed_expense_date() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut body = sample_body();
    body.expense_date = "tomorrow".to_owned();

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/trips/{}/expenses", Uuid::new_v4()))
            .cookie(cookie)
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["details"]["field"], "expenseDate");
}

#[actix_web::test]
async fn expense_routes_require_an_authenticated_session() {
    let caller = UserId::random();
    let app = actix_test::init_service(test_app(mock_state_logged_in_as(caller))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/expenses/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn delete_expense_surfaces_not_found() {
    let caller = UserId::random();
    let mut expenses = MockExpensesCommand::new();
    expenses
        .expect_delete_expense()
        .times(1)
        .returning(|request| {
            Err(crate::domain::Error::not_found(format!(
                "expense {} not found",
                request.expense_id
            )))
        });

    let mut state = mock_state_logged_in_as(caller);
    state.expenses = Arc::new(expenses);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/expenses/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_expenses_maps_foreign_trip_to_forbidden() {
    let caller = UserId::random();
    let mut query = MockExpensesQuery::new();
    query
        .expect_list_expenses()
        .times(1)
        .returning(|_| Err(crate::domain::Error::forbidden("not your trip")));

    let mut state = mock_state_logged_in_as(caller);
    state.expenses_query = Arc::new(query);

    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/trips/{}/expenses", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
