//! # API Shared
//!
//! Shared wire types for the saga presentation adapters.
//!
//! Contains:
//! - JSON request/response types with OpenAPI schemas (`wire` module)
//! - Conversions from core projections into wire types
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
