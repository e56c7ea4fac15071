//! Expense domain service.
//!
//! Expense ownership is transitive: every operation resolves the parent trip
//! first and checks the caller against the trip's owner. Mutations go through
//! the repository's transactional insert/delete-plus-recompute methods so the
//! trip's cached total never drifts from its expense set.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::expense::NewExpense;
use crate::domain::ports::{
    AddExpenseRequest, AddExpenseResponse, DeleteExpenseRequest, DeleteExpenseResponse,
    ExpensePayload, ExpenseRepository, ExpenseRepositoryError, ExpensesCommand, ExpensesQuery,
    ListExpensesRequest, TripRepository, TripRepositoryError,
};
use crate::domain::trip::Trip;
use crate::domain::{ensure_owner, Error, UserId};

fn map_trip_repository_error(error: TripRepositoryError) -> Error {
    match error {
        TripRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("trip repository unavailable: {message}"))
        }
        TripRepositoryError::Query { message } => {
            Error::internal(format!("trip repository error: {message}"))
        }
    }
}

fn map_expense_repository_error(error: ExpenseRepositoryError) -> Error {
    match error {
        ExpenseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("expense repository unavailable: {message}"))
        }
        ExpenseRepositoryError::Query { message } => {
            Error::internal(format!("expense repository error: {message}"))
        }
    }
}

/// Expense service implementing the expense command and query ports.
#[derive(Clone)]
pub struct ExpenseService<T, E> {
    trip_repo: Arc<T>,
    expense_repo: Arc<E>,
}

impl<T, E> ExpenseService<T, E> {
    /// Create a new expense service over the trip and expense repositories.
    pub fn new(trip_repo: Arc<T>, expense_repo: Arc<E>) -> Self {
        Self {
            trip_repo,
            expense_repo,
        }
    }
}

impl<T, E> ExpenseService<T, E>
where
    T: TripRepository,
{
    /// Resolve the parent trip and verify the caller owns it.
    async fn owned_trip(&self, trip_id: Uuid, caller: UserId) -> Result<Trip, Error> {
        let trip = self
            .trip_repo
            .find_by_id(trip_id)
            .await
            .map_err(map_trip_repository_error)?
            .ok_or_else(|| Error::not_found(format!("trip {trip_id} not found")))?;
        ensure_owner(&trip, caller)?;
        Ok(trip)
    }
}

#[async_trait]
impl<T, E> ExpensesCommand for ExpenseService<T, E>
where
    T: TripRepository,
    E: ExpenseRepository,
{
    async fn add_expense(&self, request: AddExpenseRequest) -> Result<AddExpenseResponse, Error> {
        let trip = self.owned_trip(request.trip_id, request.caller).await?;

        let expense = NewExpense::new(trip.id, request.fields)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let (stored, trip_total) = self
            .expense_repo
            .insert_with_total(&expense)
            .await
            .map_err(map_expense_repository_error)?;

        tracing::info!(
            expense_id = %stored.id,
            trip_id = %trip.id,
            %trip_total,
            "expense recorded"
        );
        Ok(AddExpenseResponse {
            expense: ExpensePayload::from(stored),
            trip_total,
        })
    }

    async fn delete_expense(
        &self,
        request: DeleteExpenseRequest,
    ) -> Result<DeleteExpenseResponse, Error> {
        let expense = self
            .expense_repo
            .find_by_id(request.expense_id)
            .await
            .map_err(map_expense_repository_error)?
            .ok_or_else(|| Error::not_found(format!("expense {} not found", request.expense_id)))?;

        let trip = self.owned_trip(expense.trip_id, request.caller).await?;

        let trip_total = self
            .expense_repo
            .delete_with_total(expense.id, trip.id)
            .await
            .map_err(map_expense_repository_error)?;

        tracing::info!(
            expense_id = %expense.id,
            trip_id = %trip.id,
            %trip_total,
            "expense deleted"
        );
        Ok(DeleteExpenseResponse {
            trip_id: trip.id,
            trip_total,
        })
    }
}

#[async_trait]
impl<T, E> ExpensesQuery for ExpenseService<T, E>
where
    T: TripRepository,
    E: ExpenseRepository,
{
    async fn list_expenses(
        &self,
        request: ListExpensesRequest,
    ) -> Result<Vec<ExpensePayload>, Error> {
        let trip = self.owned_trip(request.trip_id, request.caller).await?;

        let expenses = self
            .expense_repo
            .list_for_trip(trip.id)
            .await
            .map_err(map_expense_repository_error)?;

        Ok(expenses.into_iter().map(ExpensePayload::from).collect())
    }
}

#[cfg(test)]
#[path = "expense_service_tests.rs"]
mod tests;
