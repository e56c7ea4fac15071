//! Dashboard domain service.
//!
//! Assembles the fixed dashboard composition for one caller: trip count, the
//! budget summary, and the upcoming trips. "Today" comes from the injected
//! clock so the strict start-date cutoff is testable.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use rust_decimal::Decimal;

use crate::domain::ports::{
    DashboardQuery, DashboardRequest, DashboardSnapshot, ExpenseRepository,
    ExpenseRepositoryError, TripPayload, TripRepository, TripRepositoryError,
};
use crate::domain::{BudgetSummary, Error};

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

/// Dashboard service implementing the dashboard query port.
#[derive(Clone)]
pub struct DashboardService<T, E> {
    trip_repo: Arc<T>,
    expense_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<T, E> DashboardService<T, E> {
    /// Create a new dashboard service over both repositories and a clock.
    pub fn new(trip_repo: Arc<T>, expense_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            trip_repo,
            expense_repo,
            clock,
        }
    }
}

#[async_trait]
impl<T, E> DashboardQuery for DashboardService<T, E>
where
    T: TripRepository,
    E: ExpenseRepository,
{
    async fn snapshot(&self, request: DashboardRequest) -> Result<DashboardSnapshot, Error> {
        let trips = self
            .trip_repo
            .list_for_owner(request.caller)
            .await
            .map_err(map_trip_repository_error)?;

        let total_budget: Decimal = trips.iter().map(|trip| trip.budget).sum();

        let total_spent = self
            .expense_repo
            .sum_for_owner(request.caller)
            .await
            .map_err(map_expense_repository_error)?;

        let today = self.clock.utc().date_naive();
        let upcoming = self
            .trip_repo
            .list_upcoming(request.caller, today)
            .await
            .map_err(map_trip_repository_error)?;

        Ok(DashboardSnapshot {
            total_trips: trips.len() as u64,
            total_expenses: total_spent,
            budget_summary: BudgetSummary::compute(total_budget, total_spent),
            upcoming_trips: upcoming.into_iter().map(TripPayload::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "dashboard_service_tests.rs"]
mod tests;
