//! Catalog Scraper Library
//!
//! Retrieves artists, genres, albums and change events from a catalog site that
//! only exposes server-rendered pages and a paginated AJAX endpoint.

pub mod albums;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod homepage;
pub mod resolve;
pub mod transport;

// Re-export commonly used types for convenience
pub use albums::{AlbumQuery, FetchRequest, SearchQuery, PAGE_SIZE};
pub use catalog::{Album, Change, ChangeKind, Tag, TagKind};
pub use client::CatalogScraper;
pub use config::{AppConfig, CliConfig, FileConfig};
pub use error::{Result, ScrapeError};
pub use resolve::ArtistQuery;
pub use transport::{HttpTransport, Transport};
