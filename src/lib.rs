//! # KIS Client
//!
//! Client for the Korea Investment & Securities Open API (domestic and overseas stock
//! trading).
//!
//! The broker speaks in cryptic upper/lower case field codes (`CANO`, `OVRS_EXCG_CD`,
//! `ctx_area_nk200`...). This crate keeps them out of user code: every payload and
//! record is a plain Rust struct with readable field names, and a static alias table
//! per struct maps those names to the wire codes in both directions.
//!
//! ## Layers
//!
//! - [`model::schema`]: alias tables, wire rendering and decoding
//! - [`model::validation`]: field rules checked before any network call
//! - [`model::requests`]: one payload per broker operation
//! - [`model::http`]: request descriptors and raw dispatch
//! - [`model::responses`]: envelope checks and typed responses
//! - [`model::pagination`]: continuation markers and cursors
//! - [`application::client`]: the asynchronous client (hashkey signing, pagination driver)
//! - [`application::blocking`]: a synchronous facade
//!
//! ## Example
//!
//! ```rust,no_run
//! use kis_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Config::new();
//! let client = Client::new(config)?;
//! let token = client.issue_token().await?;
//! let client = client.with_access_token(token.access_token);
//!
//! let quote = client.get_oversea_quote("AAPL", PriceMarketCode::Nasdaq).await?;
//! info!("{}", quote);
//! # Ok(())
//! # }
//! ```

/// Client, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Schema, payloads, responses and transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Response records and venue codes
pub mod presentation;
/// Logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
