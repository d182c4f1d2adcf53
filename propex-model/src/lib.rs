//! Core data model definitions shared across Propex crates.

pub mod error;
pub mod ids;
pub mod listing;

pub use error::{ModelError, Result as ModelResult};
pub use ids::{ImageId, ListingId, OwnerId, RECORD_ID_LEN};
pub use listing::{Listing, ListingImage};
