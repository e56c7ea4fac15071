//! Driving port for the dashboard aggregation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BudgetSummary, Error, UserId};

use super::trips::TripPayload;

/// Request to assemble the caller's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequest {
    /// Authenticated caller.
    pub caller: UserId,
}

/// The fixed dashboard composition: trip count, total spend, budget summary,
/// and the caller's upcoming trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Number of trips the caller owns.
    pub total_trips: u64,
    /// Sum of expense amounts across all of the caller's trips. Repeats
    /// `budget_summary.total_spent` at the top level.
    #[schema(value_type = String, example = "80.00")]
    pub total_expenses: Decimal,
    /// Budget aggregates over all of the caller's trips.
    pub budget_summary: BudgetSummary,
    /// Trips starting strictly after today, ascending by start date.
    pub upcoming_trips: Vec<TripPayload>,
}

/// Driving port for the dashboard read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Assemble the caller's dashboard snapshot.
    async fn snapshot(&self, request: DashboardRequest) -> Result<DashboardSnapshot, Error>;
}
