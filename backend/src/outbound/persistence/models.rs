//! Row types bridging Diesel and the domain entities.
//!
//! Read rows derive `Queryable`/`Selectable`; insert rows borrow from the
//! validated domain payloads so no field is copied twice. Conversions that
//! cannot fail live here; the trip conversion parses the stored status
//! string and lives with its repository.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::expense::Expense;
use crate::domain::recommendation::Recommendation;
use crate::domain::user::{Role, UserId};

use super::schema::{ai_recommendations, expenses, trips, users};

/// Account row as read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable account row.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

impl UserRow {
    /// Database representation of the account role, defaulting unknown
    /// labels to `USER`.
    pub fn parsed_role(&self) -> Role {
        match self.role.as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Trip row as read from `trips`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trips)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TripRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub total_expenses: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable trip row; `total_expenses` and the timestamps come from the
/// column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = trips)]
pub struct NewTripRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub destination: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub status: &'a str,
}

/// Changeset replacing a trip's mutable fields. Identity, owner, and the
/// cached expense total are deliberately absent.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = trips)]
pub struct TripChangeset<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub destination: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub status: Option<&'a str>,
}

/// Expense row as read from `expenses`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = expenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable expense row.
#[derive(Debug, Insertable)]
#[diesel(table_name = expenses)]
pub struct NewExpenseRow<'a> {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub category: &'a str,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            title: row.title,
            description: row.description,
            amount: row.amount,
            expense_date: row.expense_date,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Recommendation row as read from `ai_recommendations`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ai_recommendations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecommendationRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub kind: String,
    pub content: String,
    pub destination: String,
    pub budget_range: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insertable recommendation row.
#[derive(Debug, Insertable)]
#[diesel(table_name = ai_recommendations)]
pub struct NewRecommendationRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub kind: &'a str,
    pub content: &'a str,
    pub destination: &'a str,
    pub budget_range: Option<&'a str>,
}

impl From<RecommendationRow> for Recommendation {
    fn from(row: RecommendationRow) -> Self {
        Self {
            id: row.id,
            owner_id: UserId::from_uuid(row.owner_id),
            kind: row.kind,
            content: row.content,
            destination: row.destination,
            budget_range: row.budget_range,
            created_at: row.created_at,
        }
    }
}
