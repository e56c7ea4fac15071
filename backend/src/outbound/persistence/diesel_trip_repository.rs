//! PostgreSQL-backed `TripRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{TripRepository, TripRepositoryError};
use crate::domain::trip::{NewTrip, Trip, TripChanges, TripStatus};
use crate::domain::user::UserId;

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTripRow, TripChangeset, TripRow};
use super::pool::{DbPool, PoolError};
use super::schema::{expenses, trips};

/// Diesel-backed implementation of the trip repository port.
#[derive(Clone)]
pub struct DieselTripRepository {
    pool: DbPool,
}

impl DieselTripRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> TripRepositoryError {
    map_pool_error(error, TripRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> TripRepositoryError {
    map_diesel_error(
        error,
        TripRepositoryError::query,
        TripRepositoryError::connection,
    )
}

/// Convert a database row into a domain trip; fails when the stored status
/// string is not a known lifecycle status.
fn row_to_trip(row: TripRow) -> Result<Trip, TripRepositoryError> {
    let status = TripStatus::parse(&row.status).ok_or_else(|| {
        TripRepositoryError::query(format!("unknown trip status: {}", row.status))
    })?;

    Ok(Trip {
        id: row.id,
        owner_id: UserId::from_uuid(row.owner_id),
        title: row.title,
        description: row.description,
        destination: row.destination,
        start_date: row.start_date,
        end_date: row.end_date,
        budget: row.budget,
        total_expenses: row.total_expenses,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn rows_to_trips(rows: Vec<TripRow>) -> Result<Vec<Trip>, TripRepositoryError> {
    rows.into_iter().map(row_to_trip).collect()
}

/// The upcoming-trip window: trips starting strictly after `after`, ascending
/// by start date. A trip starting on `after` itself is not upcoming.
fn upcoming_window(trips: Vec<Trip>, after: chrono::NaiveDate) -> Vec<Trip> {
    let mut upcoming: Vec<Trip> = trips
        .into_iter()
        .filter(|trip| trip.start_date > after)
        .collect();
    upcoming.sort_by_key(|trip| trip.start_date);
    upcoming
}

#[async_trait]
impl TripRepository for DieselTripRepository {
    async fn create(&self, trip: &NewTrip) -> Result<Trip, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let new_row = NewTripRow {
            id: trip.id,
            owner_id: *trip.owner_id.as_uuid(),
            title: &trip.title,
            description: trip.description.as_deref(),
            destination: &trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            budget: trip.budget,
            status: trip.status.as_str(),
        };

        let row: TripRow = diesel::insert_into(trips::table)
            .values(&new_row)
            .returning(TripRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        row_to_trip(row)
    }

    async fn update(
        &self,
        trip_id: Uuid,
        changes: &TripChanges,
    ) -> Result<Trip, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let changeset = TripChangeset {
            title: &changes.title,
            description: changes.description.as_deref(),
            destination: &changes.destination,
            start_date: changes.start_date,
            end_date: changes.end_date,
            budget: changes.budget,
            status: changes.status.map(TripStatus::as_str),
        };

        let row: TripRow = diesel::update(trips::table.find(trip_id))
            .set((&changeset, trips::updated_at.eq(diesel::dsl::now)))
            .returning(TripRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        row_to_trip(row)
    }

    async fn delete_with_expenses(&self, trip_id: Uuid) -> Result<(), TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        // Children first, then the parent, atomically.
        conn.transaction(|conn| {
            async move {
                diesel::delete(expenses::table.filter(expenses::trip_id.eq(trip_id)))
                    .execute(conn)
                    .await?;
                diesel::delete(trips::table.find(trip_id))
                    .execute(conn)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)
    }

    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = trips::table
            .find(trip_id)
            .select(TripRow::as_select())
            .first::<TripRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_trip).transpose()
    }

    async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<TripRow> = trips::table
            .filter(trips::owner_id.eq(owner_id.as_uuid()))
            .order(trips::created_at.desc())
            .select(TripRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_trips(rows)
    }

    async fn list_upcoming(
        &self,
        owner_id: UserId,
        after: chrono::NaiveDate,
    ) -> Result<Vec<Trip>, TripRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        // The query pre-filters; upcoming_window owns the boundary rule.
        let rows: Vec<TripRow> = trips::table
            .filter(
                trips::owner_id
                    .eq(owner_id.as_uuid())
                    .and(trips::start_date.gt(after)),
            )
            .order(trips::start_date.asc())
            .select(TripRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(upcoming_window(rows_to_trips(rows)?, after))
    }
}
