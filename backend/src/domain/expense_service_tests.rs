//! Tests for the expense service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::*;
use crate::domain::expense::{Expense, ExpenseFields};
use crate::domain::ports::{MockExpenseRepository, MockTripRepository};
use crate::domain::trip::TripStatus;
use crate::domain::ErrorCode;

fn trip_owned_by(trip_id: Uuid, owner: UserId) -> Trip {
    let now = Utc::now();
    Trip {
        id: trip_id,
        owner_id: owner,
        title: "Kyoto in autumn".to_owned(),
        description: None,
        destination: "Kyoto".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 11, 9).expect("valid date"),
        budget: dec!(1800),
        total_expenses: Decimal::ZERO,
        status: TripStatus::Planning,
        created_at: now,
        updated_at: now,
    }
}

fn expense_fields(amount: Decimal) -> ExpenseFields {
    ExpenseFields {
        title: "Shinkansen tickets".to_owned(),
        description: None,
        amount,
        expense_date: NaiveDate::from_ymd_opt(2026, 11, 3).expect("valid date"),
        category: "transport".to_owned(),
    }
}

fn stored_expense(new: &NewExpense) -> Expense {
    let now = Utc::now();
    Expense {
        id: new.id,
        trip_id: new.trip_id,
        title: new.title.clone(),
        description: new.description.clone(),
        amount: new.amount,
        expense_date: new.expense_date,
        category: new.category.clone(),
        created_at: now,
        updated_at: now,
    }
}

fn service_with(
    trips: MockTripRepository,
    expenses: MockExpenseRepository,
) -> ExpenseService<MockTripRepository, MockExpenseRepository> {
    ExpenseService::new(Arc::new(trips), Arc::new(expenses))
}

#[tokio::test]
async fn successive_inserts_report_the_running_trip_total() {
    let trip_id = Uuid::new_v4();
    let owner = UserId::random();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(2)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    let mut totals = vec![dec!(120), dec!(200)].into_iter();
    expenses.expect_insert_with_total().times(2).returning(
        move |new| Ok((stored_expense(new), totals.next().expect("total queued"))),
    );

    let service = service_with(trips, expenses);

    let first = service
        .add_expense(AddExpenseRequest {
            caller: owner,
            trip_id,
            fields: expense_fields(dec!(120)),
        })
        .await
        .expect("first insert succeeds");
    assert_eq!(first.trip_total, dec!(120));

    let second = service
        .add_expense(AddExpenseRequest {
            caller: owner,
            trip_id,
            fields: expense_fields(dec!(80)),
        })
        .await
        .expect("second insert succeeds");
    assert_eq!(second.trip_total, dec!(200));
    assert_eq!(second.expense.amount, dec!(80));
}

#[tokio::test]
async fn delete_reports_the_recomputed_total() {
    let trip_id = Uuid::new_v4();
    let owner = UserId::random();
    let expense_id = Uuid::new_v4();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    expenses.expect_find_by_id().times(1).returning(move |id| {
        let new = NewExpense::new(trip_id, expense_fields(dec!(120))).expect("fields validate");
        Ok(Some(Expense {
            id,
            ..stored_expense(&new)
        }))
    });
    expenses
        .expect_delete_with_total()
        .times(1)
        .returning(|_, _| Ok(dec!(80)));

    let service = service_with(trips, expenses);
    let response = service
        .delete_expense(DeleteExpenseRequest {
            caller: owner,
            expense_id,
        })
        .await
        .expect("delete succeeds");

    assert_eq!(response.trip_id, trip_id);
    assert_eq!(response.trip_total, dec!(80));
}

#[tokio::test]
async fn add_expense_for_foreign_trip_is_forbidden_and_does_not_write() {
    let owner = UserId::random();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    expenses.expect_insert_with_total().times(0);

    let service = service_with(trips, expenses);
    let error = service
        .add_expense(AddExpenseRequest {
            caller: UserId::random(),
            trip_id: Uuid::new_v4(),
            fields: expense_fields(dec!(10)),
        })
        .await
        .expect_err("forbidden");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn add_expense_to_missing_trip_is_not_found() {
    let mut trips = MockTripRepository::new();
    trips.expect_find_by_id().times(1).returning(|_| Ok(None));

    let service = service_with(trips, MockExpenseRepository::new());
    let error = service
        .add_expense(AddExpenseRequest {
            caller: UserId::random(),
            trip_id: Uuid::new_v4(),
            fields: expense_fields(dec!(10)),
        })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn add_expense_rejects_non_positive_amount() {
    let trip_id = Uuid::new_v4();
    let owner = UserId::random();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    expenses.expect_insert_with_total().times(0);

    let service = service_with(trips, expenses);
    let error = service
        .add_expense(AddExpenseRequest {
            caller: owner,
            trip_id,
            fields: expense_fields(dec!(0)),
        })
        .await
        .expect_err("invalid request");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn delete_expense_checks_ownership_through_the_parent_trip() {
    let trip_id = Uuid::new_v4();
    let owner = UserId::random();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    expenses.expect_find_by_id().times(1).returning(move |id| {
        let new = NewExpense::new(trip_id, expense_fields(dec!(45))).expect("fields validate");
        Ok(Some(Expense {
            id,
            ..stored_expense(&new)
        }))
    });
    expenses.expect_delete_with_total().times(0);

    let service = service_with(trips, expenses);
    let error = service
        .delete_expense(DeleteExpenseRequest {
            caller: UserId::random(),
            expense_id: Uuid::new_v4(),
        })
        .await
        .expect_err("forbidden");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn list_expenses_maps_connection_error_to_service_unavailable() {
    let trip_id = Uuid::new_v4();
    let owner = UserId::random();

    let mut trips = MockTripRepository::new();
    trips
        .expect_find_by_id()
        .times(1)
        .returning(move |id| Ok(Some(trip_owned_by(id, owner))));

    let mut expenses = MockExpenseRepository::new();
    expenses
        .expect_list_for_trip()
        .times(1)
        .returning(|_| Err(ExpenseRepositoryError::connection("refused")));

    let service = service_with(trips, expenses);
    let error = service
        .list_expenses(ListExpensesRequest {
            caller: owner,
            trip_id,
        })
        .await
        .expect_err("service unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
