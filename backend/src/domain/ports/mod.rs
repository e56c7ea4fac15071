//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod dashboard;
mod expense_repository;
mod expenses;
mod login_service;
mod recommendation_repository;
mod recommendation_source;
mod recommendations;
mod trip_repository;
mod trips;
mod user_onboarding;

#[cfg(test)]
pub use dashboard::MockDashboardQuery;
pub use dashboard::{DashboardQuery, DashboardRequest, DashboardSnapshot};
#[cfg(test)]
pub use expense_repository::MockExpenseRepository;
pub use expense_repository::{ExpenseRepository, ExpenseRepositoryError};
#[cfg(test)]
pub use expenses::{MockExpensesCommand, MockExpensesQuery};
pub use expenses::{
    AddExpenseRequest, AddExpenseResponse, DeleteExpenseRequest, DeleteExpenseResponse,
    ExpensePayload, ExpensesCommand, ExpensesQuery, ListExpensesRequest,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginCredentials, LoginService};
#[cfg(test)]
pub use recommendation_repository::MockRecommendationRepository;
pub use recommendation_repository::{RecommendationRepository, RecommendationRepositoryError};
#[cfg(test)]
pub use recommendation_source::MockRecommendationSource;
pub use recommendation_source::{
    RecommendationPrompt, RecommendationSource, RecommendationSourceError,
};
#[cfg(test)]
pub use recommendations::{MockRecommendationsCommand, MockRecommendationsQuery};
pub use recommendations::{
    DeleteRecommendationRequest, GenerateRecommendationRequest, ListRecommendationsRequest,
    RecommendationPayload, RecommendationsCommand, RecommendationsQuery,
};
#[cfg(test)]
pub use trip_repository::MockTripRepository;
pub use trip_repository::{TripRepository, TripRepositoryError};
#[cfg(test)]
pub use trips::{MockTripsCommand, MockTripsQuery};
pub use trips::{
    CreateTripRequest, DeleteTripRequest, GetTripRequest, ListTripsRequest, TripPayload,
    TripsCommand, TripsQuery, UpdateTripRequest,
};
#[cfg(test)]
pub use user_onboarding::MockUserOnboarding;
pub use user_onboarding::{MIN_PASSWORD_LENGTH, Registration, UserOnboarding};
