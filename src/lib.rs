//! # LuxMed Client
//!
//! This crate provides a client for the LuxMed Patient Portal mobile API.
//! It authenticates with stored patient credentials, discovers the entities
//! a booking search can be scoped by (cities, services, clinics) and queries
//! available appointment slots for a city, service and date range, returning
//! the results grouped by calendar day.
//!
//! The portal only talks to its own mobile application, so the client
//! reproduces that application's protocol:
//! - Form-encoded credential exchange for a short-lived bearer token
//! - Fixed mobile headers with a synthetic installation fingerprint
//! - Per-endpoint API versions (3.0 for discovery, 2.0 for visit search)
//!
//! Each operation authenticates on its own; no token is cached between
//! calls.
//!
//! ## Example
//! ```no_run
//! use chrono::NaiveDate;
//! use luxmed_client::client::LuxmedClient;
//! use luxmed_client::config::Config;
//! use luxmed_client::error::AppError;
//! use luxmed_client::model::requests::VisitSearchRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::from_env()?;
//!     let client = LuxmedClient::new(config);
//!
//!     for (id, name) in client.get_cities().await? {
//!         println!("{id}: {name}");
//!     }
//!
//!     let request = VisitSearchRequest::new(
//!         1,
//!         4480,
//!         NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
//!         NaiveDate::from_ymd_opt(2025, 9, 7).expect("valid date"),
//!     );
//!
//!     for day in client.get_visits(&request).await? {
//!         println!("{day}");
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Authentication against the token endpoint
pub mod auth;
/// High level API client
pub mod client;
/// Configuration loading
pub mod config;
/// Protocol constants of the Patient Portal mobile API
pub mod constants;
/// Error types
pub mod error;
/// Synthetic mobile client identity
pub mod identity;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Caller-facing presentation types
pub mod presentation;
/// Helper utilities
pub mod utils;

/// Current version of the crate, as in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
