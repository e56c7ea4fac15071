//! Domain entities, budget arithmetic, and the services behind the HTTP API.
//!
//! Types here are transport and storage agnostic. Entities validate their
//! invariants in constructors; services implement the driving ports in
//! [`ports`] against repository and gateway traits, so adapters stay thin.

pub mod budget;
pub mod error;
pub mod expense;
pub mod ownership;
pub mod ports;
pub mod recommendation;
pub mod trip;
pub mod user;

mod dashboard_service;
mod expense_service;
mod recommendation_service;
mod trip_service;

pub use self::budget::BudgetSummary;
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode};
pub use self::expense::{Expense, ExpenseValidationError, NewExpense};
pub use self::expense_service::ExpenseService;
pub use self::ownership::{ensure_owner, Owned};
pub use self::recommendation::{NewRecommendation, Recommendation, RecommendationValidationError};
pub use self::recommendation_service::RecommendationService;
pub use self::trip::{NewTrip, Trip, TripChanges, TripStatus, TripValidationError};
pub use self::trip_service::TripService;
pub use self::user::{Email, Role, User, UserId, UserValidationError};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
