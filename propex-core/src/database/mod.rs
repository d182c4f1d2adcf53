//! Store boundary: repository ports and the Postgres adapters behind them.

pub mod ports;
pub mod postgres;
pub mod repositories;

pub use ports::{ListingImageRepository, ListingRepository};
pub use postgres::PostgresDatabase;
pub use repositories::{
    PostgresListingImageRepository, PostgresListingRepository,
};
