pub mod error;
pub mod export;
pub mod extract;
pub mod listing;
pub mod query;

pub use error::{Error, Result};
pub use export::{DEFAULT_EXPORT_FILE, ListingReader, ListingWriter};
pub use extract::{ListingExtractor, Selectors};
pub use listing::{JobListing, MAX_LISTINGS, NOT_SPECIFIED, truncate_listings};
pub use query::{DEFAULT_BASE_URL, SearchQuery};
