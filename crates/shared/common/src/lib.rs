//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling for HTTP handlers
//! - The ordered in-memory record store
//! - Request extractors and the health payload
//! - Configuration structures, tracing setup and server lifecycle helpers

pub mod config;
pub mod error;
pub mod extractors;
pub mod health;
pub mod server;
pub mod store;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use extractors::{RecordId, ValidatedJson};
pub use health::HealthResponse;
pub use store::{Record, RecordStore};
