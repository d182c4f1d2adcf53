//! Core library for the Propex listing catalog.
//!
//! This crate owns the decision logic of the system: turning an untrusted
//! search request into a bounded, deterministic query ([`query`]), executing
//! it against the store through repository ports ([`database`]), enriching
//! each returned row with its primary image, and assembling the public page
//! shape ([`api_types`]). The [`service`] module ties the pieces together.

pub mod api_types;
pub mod database;
pub mod error;
pub mod query;
pub mod service;

pub use api_types::{ListingView, PagedResult};
pub use error::{CatalogError, Result};
pub use query::{ListingQuery, SearchFilter, SortCriteria, SortField, SortOrder};
pub use service::ListingService;
