//! Request shapes accepted by the AJAX album endpoint.

use crate::error::{Result, ScrapeError};

/// Maximum number of albums the endpoint returns per call.
pub const PAGE_SIZE: usize = 25;

/// Path of the AJAX endpoint, relative to the site root.
pub const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";

const AJAX_ACTION: &str = "album_fetch";

/// Server-side search filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text terms, sent space-joined.
    pub terms: Vec<String>,
    pub artist: Option<u64>,
    pub include_genres: Vec<u64>,
    pub exclude_genres: Vec<u64>,
}

impl SearchQuery {
    pub fn text(terms: &str) -> Self {
        Self {
            terms: terms.split_whitespace().map(str::to_string).collect(),
            ..Default::default()
        }
    }

    pub fn by_artist(artist_id: u64) -> Self {
        Self {
            artist: Some(artist_id),
            ..Default::default()
        }
    }

    pub fn with_genre(mut self, genre_id: u64) -> Self {
        self.include_genres.push(genre_id);
        self
    }

    pub fn without_genre(mut self, genre_id: u64) -> Self {
        self.exclude_genres.push(genre_id);
        self
    }

    /// True when no criterion is set at all.
    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(|t| t.trim().is_empty())
            && self.artist.is_none()
            && self.include_genres.is_empty()
            && self.exclude_genres.is_empty()
    }
}

/// Exactly one of the three request shapes the endpoint understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    Search(SearchQuery),
    ByIds(Vec<u64>),
    /// Chronological browsing; `offset` counts albums and is page aligned.
    Newest { offset: usize },
}

impl FetchRequest {
    /// Reject requests the endpoint cannot answer meaningfully.
    pub fn validate(&self) -> Result<()> {
        match self {
            FetchRequest::Search(query) if query.is_empty() => Err(ScrapeError::Config(
                "search needs at least one of terms, artist or genre filters".to_string(),
            )),
            FetchRequest::ByIds(ids) if ids.is_empty() => Err(ScrapeError::Config(
                "album id list must not be empty".to_string(),
            )),
            FetchRequest::Newest { offset } if offset % PAGE_SIZE != 0 => {
                Err(ScrapeError::Config(format!(
                    "newest offset {} is not a multiple of the page size {}",
                    offset, PAGE_SIZE
                )))
            }
            _ => Ok(()),
        }
    }

    /// Form fields for this request, `action` included.
    pub fn form_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("action".to_string(), AJAX_ACTION.to_string())];
        match self {
            FetchRequest::Search(query) => {
                let terms = query.terms.join(" ");
                if !terms.trim().is_empty() {
                    params.push(("query".to_string(), terms));
                }
                if let Some(artist) = query.artist {
                    params.push(("artist".to_string(), artist.to_string()));
                }
                for genre in &query.include_genres {
                    params.push(("genre_in[]".to_string(), genre.to_string()));
                }
                for genre in &query.exclude_genres {
                    params.push(("genre_out[]".to_string(), genre.to_string()));
                }
            }
            FetchRequest::ByIds(ids) => {
                for id in ids {
                    params.push(("ids[]".to_string(), id.to_string()));
                }
            }
            FetchRequest::Newest { offset } => {
                params.push(("offset".to_string(), offset.to_string()));
            }
        }
        params
    }

    pub fn mode(&self) -> &'static str {
        match self {
            FetchRequest::Search(_) => "search",
            FetchRequest::ByIds(_) => "by-id",
            FetchRequest::Newest { .. } => "newest",
        }
    }
}

/// Loosely shaped album query, as it arrives from a CLI or config.
///
/// Converting it into a [`FetchRequest`] enforces that exactly one shape is
/// present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumQuery {
    pub search: Option<SearchQuery>,
    pub ids: Option<Vec<u64>>,
    pub offset: Option<usize>,
}

impl TryFrom<AlbumQuery> for FetchRequest {
    type Error = ScrapeError;

    fn try_from(query: AlbumQuery) -> Result<Self> {
        let request = match (query.search, query.ids, query.offset) {
            (Some(search), None, None) => FetchRequest::Search(search),
            (None, Some(ids), None) => FetchRequest::ByIds(ids),
            (None, None, Some(offset)) => FetchRequest::Newest { offset },
            (None, None, None) => {
                return Err(ScrapeError::Config(
                    "album query needs a search filter, an id list or an offset".to_string(),
                ))
            }
            _ => {
                return Err(ScrapeError::Config(
                    "album query must use only one of search filter, id list or offset"
                        .to_string(),
                ))
            }
        };
        request.validate()?;
        Ok(request)
    }
}
