//! PostgreSQL-backed `ExpenseRepository` implementation using Diesel.
//!
//! Both mutating methods recompute the parent trip's cached total inside the
//! same transaction as the mutation. The recompute is a full `SUM` over the
//! trip's expenses rather than an increment, so the cached value self-heals
//! on every write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::expense::{Expense, NewExpense};
use crate::domain::ports::{ExpenseRepository, ExpenseRepositoryError};
use crate::domain::user::UserId;

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExpenseRow, NewExpenseRow};
use super::pool::{DbPool, PoolError};
use super::schema::{expenses, trips};

/// Diesel-backed implementation of the expense repository port.
#[derive(Clone)]
pub struct DieselExpenseRepository {
    pool: DbPool,
}

impl DieselExpenseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ExpenseRepositoryError {
    map_pool_error(error, ExpenseRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ExpenseRepositoryError {
    map_diesel_error(
        error,
        ExpenseRepositoryError::query,
        ExpenseRepositoryError::connection,
    )
}

/// Re-sum the trip's expenses and write the result back to the cached
/// `total_expenses` column. Must run inside the caller's transaction.
async fn recompute_trip_total(
    conn: &mut AsyncPgConnection,
    trip_id: Uuid,
) -> Result<Decimal, diesel::result::Error> {
    let total: Option<Decimal> = expenses::table
        .filter(expenses::trip_id.eq(trip_id))
        .select(diesel::dsl::sum(expenses::amount))
        .first(conn)
        .await?;
    let total = total.unwrap_or(Decimal::ZERO);

    diesel::update(trips::table.find(trip_id))
        .set((
            trips::total_expenses.eq(total),
            trips::updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)
        .await?;

    Ok(total)
}

#[async_trait]
impl ExpenseRepository for DieselExpenseRepository {
    async fn insert_with_total(
        &self,
        expense: &NewExpense,
    ) -> Result<(Expense, Decimal), ExpenseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let new_row = NewExpenseRow {
            id: expense.id,
            trip_id: expense.trip_id,
            title: &expense.title,
            description: expense.description.as_deref(),
            amount: expense.amount,
            expense_date: expense.expense_date,
            category: &expense.category,
        };

        let trip_id = expense.trip_id;
        let (row, total) = conn
            .transaction(|conn| {
                async move {
                    let row: ExpenseRow = diesel::insert_into(expenses::table)
                        .values(&new_row)
                        .returning(ExpenseRow::as_returning())
                        .get_result(conn)
                        .await?;
                    let total = recompute_trip_total(conn, trip_id).await?;
                    Ok::<_, diesel::result::Error>((row, total))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        Ok((Expense::from(row), total))
    }

    async fn delete_with_total(
        &self,
        expense_id: Uuid,
        trip_id: Uuid,
    ) -> Result<Decimal, ExpenseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(expenses::table.find(expense_id))
                    .execute(conn)
                    .await?;
                recompute_trip_total(conn, trip_id).await
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }

    async fn find_by_id(
        &self,
        expense_id: Uuid,
    ) -> Result<Option<Expense>, ExpenseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = expenses::table
            .find(expense_id)
            .select(ExpenseRow::as_select())
            .first::<ExpenseRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(Expense::from))
    }

    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Expense>, ExpenseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<ExpenseRow> = expenses::table
            .filter(expenses::trip_id.eq(trip_id))
            .order(expenses::created_at.desc())
            .select(ExpenseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn sum_for_owner(&self, owner_id: UserId) -> Result<Decimal, ExpenseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let total: Option<Decimal> = expenses::table
            .inner_join(trips::table)
            .filter(trips::owner_id.eq(owner_id.as_uuid()))
            .select(diesel::dsl::sum(expenses::amount))
            .first(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(total.unwrap_or(Decimal::ZERO))
    }
}
