//! PostgreSQL persistence adapters.
//!
//! Each repository port has a Diesel-backed implementation operating on the
//! shared [`pool::DbPool`]. Row types and conversions live in [`models`];
//! the table definitions in [`schema`] must match the migrations exactly.

pub mod diesel_error_mapping;
pub mod diesel_expense_repository;
pub mod diesel_login_service;
pub mod diesel_recommendation_repository;
pub mod diesel_trip_repository;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_expense_repository::DieselExpenseRepository;
pub use diesel_login_service::DieselLoginService;
pub use diesel_recommendation_repository::DieselRecommendationRepository;
pub use diesel_trip_repository::DieselTripRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
