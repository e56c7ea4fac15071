//! Gemini generation API adapter.
//!
//! [`GeminiHttpSource`] implements the domain's `RecommendationSource` port
//! over the `generateContent` REST endpoint; `dto` holds the wire types.

pub mod dto;
pub mod http_source;

pub use http_source::{GeminiConfig, GeminiHttpSource};
