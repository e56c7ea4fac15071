//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DashboardQuery, ExpensesCommand, ExpensesQuery, LoginService, RecommendationsCommand,
    RecommendationsQuery, TripsCommand, TripsQuery, UserOnboarding,
};

/// Dependency bundle of port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Authentication port.
    pub login: Arc<dyn LoginService>,
    /// Registration port.
    pub onboarding: Arc<dyn UserOnboarding>,
    /// Trip mutations.
    pub trips: Arc<dyn TripsCommand>,
    /// Trip reads.
    pub trips_query: Arc<dyn TripsQuery>,
    /// Expense mutations.
    pub expenses: Arc<dyn ExpensesCommand>,
    /// Expense reads.
    pub expenses_query: Arc<dyn ExpensesQuery>,
    /// Recommendation mutations.
    pub recommendations: Arc<dyn RecommendationsCommand>,
    /// Recommendation reads.
    pub recommendations_query: Arc<dyn RecommendationsQuery>,
    /// Dashboard aggregation.
    pub dashboard: Arc<dyn DashboardQuery>,
}
