pub mod images;
pub mod listings;

pub use images::PostgresListingImageRepository;
pub use listings::PostgresListingRepository;
