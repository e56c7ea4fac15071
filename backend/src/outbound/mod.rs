//! Outbound adapters implementing the domain's driven ports.
//!
//! `persistence` talks to PostgreSQL through Diesel; `gemini` talks to the
//! Gemini generation API over HTTP.

pub mod gemini;
pub mod persistence;
