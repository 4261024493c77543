//! Album retrieval through the AJAX endpoint.

mod extract;
mod pagination;
mod payload;
mod request;

pub use extract::{extract_albums, ExtractedPage, LabelResolver};
pub use pagination::{FetchRun, PaginatedFetch, DEFAULT_MAX_PAGES};
pub use payload::{decode_page, sanitize, PagePayload};
pub use request::{AlbumQuery, FetchRequest, SearchQuery, AJAX_PATH, PAGE_SIZE};
