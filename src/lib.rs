//! Vinyl-Only Finder - Discogs seller inventory filter
//!
//! Walks a seller's Discogs inventory, looks up every version of each listed
//! release and keeps only the listings whose release never appeared in a
//! digital format (CD, file, download, ...).

pub mod config;
pub mod discogs;
pub mod error;
pub mod finder;
pub mod formats;
pub mod rate_limit;
pub mod report;
pub mod seller_url;

pub use config::FinderConfig;
pub use discogs::{DiscogsClient, Listing, ReleaseRecord, VariantFormat};
pub use error::{FinderError, Result};
pub use finder::{RunSummary, SkippedListing, VinylOnlyFinder};
pub use formats::{DigitalFormatFilter, DEFAULT_DIGITAL_KEYWORDS};
pub use rate_limit::{Clock, ManualClock, RequestPacer, SystemClock};
pub use report::{Reporter, VinylOnlyResult};
pub use seller_url::{parse_seller_url, SellerQuery};
