//! # Propex Server
//!
//! HTTP surface of the Propex listing catalog.
//!
//! ## Overview
//!
//! Propex Server exposes a searchable, paginated catalog of real-estate
//! listings backed by Postgres:
//!
//! - **Search**: filter by name/address fragments and a price range, with
//!   bounded pagination and deterministic ordering
//! - **Lookup**: resolve a single listing by its opaque identifier
//! - **Enrichment**: every returned listing carries its primary image
//!   reference, or an explicit `null` when it has none
//! - **Health**: liveness and store-readiness probes
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - PostgreSQL for persistent storage (via `propex-core`'s repositories)
//! - `tracing` for structured request logging
//!
//! All decision logic lives in `propex-core`; handlers here only translate
//! between HTTP and the catalog service.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

#[cfg(test)]
mod tests;

pub use errors::{AppError, AppResult};
pub use infra::app_state::AppState;
pub use infra::config::{Args, Config};
pub use routes::create_router;
