//! Artist query resolution.

use regex::Regex;
use tracing::debug;

use crate::catalog::TagKind;
use crate::error::{Result, ScrapeError};
use crate::homepage::Homepage;
use crate::transport::Transport;

/// How a caller refers to an artist.
#[derive(Clone, Debug)]
pub enum ArtistQuery {
    /// Catalog ID, used as is.
    Id(u64),
    /// Exact display name.
    Name(String),
    /// First artist in listing order whose name matches.
    Pattern(Regex),
}

impl ArtistQuery {
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(ArtistQuery::Pattern)
            .map_err(|e| ScrapeError::Config(format!("invalid artist pattern: {}", e)))
    }
}

impl From<u64> for ArtistQuery {
    fn from(id: u64) -> Self {
        ArtistQuery::Id(id)
    }
}

impl From<&str> for ArtistQuery {
    fn from(name: &str) -> Self {
        ArtistQuery::Name(name.to_string())
    }
}

impl From<String> for ArtistQuery {
    fn from(name: String) -> Self {
        ArtistQuery::Name(name)
    }
}

impl From<Regex> for ArtistQuery {
    fn from(pattern: Regex) -> Self {
        ArtistQuery::Pattern(pattern)
    }
}

/// Resolve `query` to an artist ID, `None` when nothing matches.
pub fn resolve_artist(
    query: &ArtistQuery,
    homepage: &mut Homepage,
    transport: &dyn Transport,
) -> Result<Option<u64>> {
    let resolved = match query {
        ArtistQuery::Id(id) => Some(*id),
        ArtistQuery::Name(name) => homepage.resolve(transport, TagKind::Artist, name)?,
        ArtistQuery::Pattern(pattern) => homepage
            .tags(transport, TagKind::Artist)?
            .into_iter()
            .find(|tag| pattern.is_match(&tag.name))
            .map(|tag| tag.id),
    };
    if resolved.is_none() {
        debug!("No artist matches {:?}", query);
    }
    Ok(resolved)
}
