//! Public entry point tying transport, homepage caches and the album engine together.

use std::sync::Arc;
use tracing::info;

use crate::albums::{
    AlbumQuery, FetchRequest, FetchRun, PaginatedFetch, SearchQuery, AJAX_PATH, DEFAULT_MAX_PAGES,
};
use crate::catalog::{Album, Change, Tag, TagKind};
use crate::config::AppConfig;
use crate::error::Result;
use crate::homepage::Homepage;
use crate::resolve::{resolve_artist, ArtistQuery};
use crate::transport::{HttpTransport, Transport};

/// Strip a leading `http://`/`https://` and any trailing slash from `host`.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let lower = host.to_ascii_lowercase();
    let host = if lower.starts_with("https://") {
        &host["https://".len()..]
    } else if lower.starts_with("http://") {
        &host["http://".len()..]
    } else {
        host
    };
    host.trim_end_matches('/').to_string()
}

/// Scraper for one catalog site.
///
/// Calls are blocking and must not overlap: the homepage snapshot and the
/// identifier caches are plain mutable state owned by this value.
pub struct CatalogScraper {
    base_url: String,
    ajax_url: String,
    transport: Arc<dyn Transport>,
    homepage: Homepage,
    max_pages: usize,
}

impl CatalogScraper {
    /// Create a scraper for `host` (scheme optional) using `transport`.
    pub fn new(host: &str, transport: Arc<dyn Transport>) -> Self {
        let base_url = format!("https://{}", normalize_host(host));
        Self {
            ajax_url: format!("{}{}", base_url, AJAX_PATH),
            homepage: Homepage::new(format!("{}/", base_url)),
            base_url,
            transport,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout_sec)?;
        Ok(Self::new(&config.host, Arc::new(transport)).with_max_pages(config.max_pages))
    }

    /// Bound the number of pages a single album fetch may request.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn artists(&mut self) -> Result<Vec<Tag>> {
        self.tags(TagKind::Artist)
    }

    pub fn genres(&mut self) -> Result<Vec<Tag>> {
        self.tags(TagKind::Genre)
    }

    pub fn tags(&mut self, kind: TagKind) -> Result<Vec<Tag>> {
        self.homepage.tags(self.transport.as_ref(), kind)
    }

    /// Catalog ID of the tag named `name`, from the cached identifier table.
    pub fn tag_id(&mut self, kind: TagKind, name: &str) -> Result<Option<u64>> {
        self.homepage.resolve(self.transport.as_ref(), kind, name)
    }

    /// All albums of an artist.
    ///
    /// `Ok(None)` when a name or pattern matches no artist, in which case no
    /// album request is made, or when the endpoint answer cannot be decoded.
    pub fn albums_by_artist(&mut self, query: impl Into<ArtistQuery>) -> Result<Option<Vec<Album>>> {
        let query = query.into();
        let Some(artist_id) = resolve_artist(&query, &mut self.homepage, self.transport.as_ref())?
        else {
            return Ok(None);
        };
        self.fetch_albums_for(&FetchRequest::Search(SearchQuery::by_artist(artist_id)))
    }

    /// One page of the most recent albums; `offset` must be a multiple of the page size.
    pub fn newest(&mut self, offset: usize) -> Result<Option<Vec<Album>>> {
        self.fetch_albums_for(&FetchRequest::Newest { offset })
    }

    pub fn search(&mut self, query: SearchQuery) -> Result<Option<Vec<Album>>> {
        self.fetch_albums_for(&FetchRequest::Search(query))
    }

    pub fn albums_from_ids(&mut self, ids: &[u64]) -> Result<Option<Vec<Album>>> {
        self.fetch_albums_for(&FetchRequest::ByIds(ids.to_vec()))
    }

    /// Fetch albums for a loosely shaped query, rejecting ambiguous shapes
    /// before any request is sent.
    pub fn fetch_albums(&mut self, query: AlbumQuery) -> Result<Option<Vec<Album>>> {
        let request = FetchRequest::try_from(query)?;
        self.fetch_albums_for(&request)
    }

    /// Run the paginated fetch and report page and label statistics.
    pub fn fetch(&mut self, request: &FetchRequest) -> Result<Option<FetchRun>> {
        let engine = PaginatedFetch::new(self.transport.as_ref(), &self.ajax_url, self.max_pages);
        let mut resolver = self.homepage.resolver(self.transport.as_ref());
        engine.run(request, &mut resolver)
    }

    fn fetch_albums_for(&mut self, request: &FetchRequest) -> Result<Option<Vec<Album>>> {
        Ok(self.fetch(request)?.map(|run| run.albums))
    }

    /// Latest edit/broken status per album from the homepage comment feed.
    pub fn changes(&mut self) -> Result<Vec<Change>> {
        self.homepage.changes(self.transport.as_ref())
    }

    /// Forget the homepage and everything derived from it.
    pub fn refresh(&mut self) {
        info!("Invalidating homepage snapshot for {}", self.base_url);
        self.homepage.invalidate();
    }

    pub fn is_homepage_cached(&self) -> bool {
        self.homepage.is_loaded()
    }
}
