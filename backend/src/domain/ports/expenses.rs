//! Driving ports for expense use-cases.
//!
//! Expense operations always run in the context of a parent trip: the
//! implementing service resolves the trip, checks transitive ownership, and
//! keeps the trip's cached total in step with every mutation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::expense::{Expense, ExpenseFields};
use crate::domain::{Error, UserId};

/// Serializable expense projection returned by the driving ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    /// Stable identifier.
    pub id: Uuid,
    /// Parent trip.
    pub trip_id: Uuid,
    /// Expense title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Spent amount.
    pub amount: Decimal,
    /// Day the expense occurred.
    pub expense_date: NaiveDate,
    /// Category label.
    pub category: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Expense> for ExpensePayload {
    fn from(value: Expense) -> Self {
        Self {
            id: value.id,
            trip_id: value.trip_id,
            title: value.title,
            description: value.description,
            amount: value.amount,
            expense_date: value.expense_date,
            category: value.category,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Request to record an expense against a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct AddExpenseRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Parent trip.
    pub trip_id: Uuid,
    /// Unvalidated expense fields from the boundary.
    pub fields: ExpenseFields,
}

/// Response from recording an expense: the stored expense plus the trip's
/// recomputed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenseResponse {
    /// The stored expense.
    pub expense: ExpensePayload,
    /// The parent trip's total after the insert committed.
    pub trip_total: Decimal,
}

/// Request to delete an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteExpenseRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Expense to delete.
    pub expense_id: Uuid,
}

/// Response from deleting an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteExpenseResponse {
    /// The parent trip the expense belonged to.
    pub trip_id: Uuid,
    /// The parent trip's total after the delete committed.
    pub trip_total: Decimal,
}

/// Driving port for expense mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpensesCommand: Send + Sync {
    /// Record an expense and recompute the trip total in one transaction;
    /// owner-only via the parent trip.
    async fn add_expense(&self, request: AddExpenseRequest) -> Result<AddExpenseResponse, Error>;

    /// Delete an expense and recompute the trip total in one transaction;
    /// owner-only via the parent trip.
    async fn delete_expense(
        &self,
        request: DeleteExpenseRequest,
    ) -> Result<DeleteExpenseResponse, Error>;
}

/// Request to list a trip's expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListExpensesRequest {
    /// Authenticated caller.
    pub caller: UserId,
    /// Trip whose expenses to list.
    pub trip_id: Uuid,
}

/// Driving port for expense reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpensesQuery: Send + Sync {
    /// List every expense on the trip, newest first; owner-only.
    async fn list_expenses(
        &self,
        request: ListExpensesRequest,
    ) -> Result<Vec<ExpensePayload>, Error>;
}
