//! Port for expense persistence and the synchronous trip-total recompute.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::expense::{Expense, NewExpense};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by expense repository adapters.
    pub enum ExpenseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "expense repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "expense repository query failed: {message}",
    }
}

/// Port for writing expenses and reading expense aggregates.
///
/// The two mutating methods re-derive the parent trip's cached total from
/// the full expense set and write it back in the same transaction as the
/// mutation, so the cached value never observes a half-committed state. The
/// recompute is a re-sum, not an increment: concurrent writers to one trip
/// can race and the last committed total wins, self-healing on the next
/// write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert an expense, recompute the parent trip's total, and return the
    /// stored expense together with the new total.
    async fn insert_with_total(
        &self,
        expense: &NewExpense,
    ) -> Result<(Expense, Decimal), ExpenseRepositoryError>;

    /// Delete an expense, recompute the parent trip's total, and return the
    /// new total.
    async fn delete_with_total(
        &self,
        expense_id: Uuid,
        trip_id: Uuid,
    ) -> Result<Decimal, ExpenseRepositoryError>;

    /// Find an expense by id.
    async fn find_by_id(&self, expense_id: Uuid)
        -> Result<Option<Expense>, ExpenseRepositoryError>;

    /// All expenses recorded against the trip, newest first.
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Expense>, ExpenseRepositoryError>;

    /// Sum of expense amounts across all trips owned by the user; zero when
    /// none exist.
    async fn sum_for_owner(&self, owner_id: UserId) -> Result<Decimal, ExpenseRepositoryError>;
}
