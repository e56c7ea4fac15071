//! Travel-planning backend library.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, budget
//! arithmetic, the ownership guard, and the ports its services are written
//! against; `inbound` adapts HTTP requests onto driving ports; `outbound`
//! implements driven ports against PostgreSQL and the Gemini generation API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use doc::ApiDoc;
