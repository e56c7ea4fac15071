//! HTTP inbound adapter exposing REST endpoints.

pub mod dashboard;
pub mod error;
pub mod expenses;
pub mod recommendations;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod trips;
pub mod users;
pub mod validation;

pub use error::ApiResult;
