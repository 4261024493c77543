//! Catalog records produced by the scraper.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScrapeError;

// =============================================================================
// Enumerations
// =============================================================================

/// Namespace of a tag. Artists and genres share a shape but not an ID space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Artist,
    Genre,
}

impl TagKind {
    /// Value of the `data-type` attribute marking this kind in the homepage listing
    pub fn markup_type(&self) -> &'static str {
        match self {
            TagKind::Artist => "artist",
            TagKind::Genre => "genre",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup_type())
    }
}

impl FromStr for TagKind {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" | "artists" => Ok(TagKind::Artist),
            "genre" | "genres" => Ok(TagKind::Genre),
            other => Err(ScrapeError::Config(format!("unknown tag kind '{}'", other))),
        }
    }
}

/// Status reported for an album in the recent-changes feed
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Edit,
    Broken,
}

// =============================================================================
// Records
// =============================================================================

/// An artist or a genre as listed on the homepage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub id: u64,
}

/// An album as returned by the AJAX endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub title: String,
    /// Download link, `None` when the site flags it as broken.
    pub url: Option<String>,
    pub cover: String,
    /// Resolved genre IDs, in source order.
    pub genres: Vec<u64>,
    /// Resolved artist IDs, in source order.
    pub artists: Vec<u64>,
}

impl Album {
    pub fn is_broken(&self) -> bool {
        self.url.is_none()
    }
}

/// Latest known status of an album.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub album_id: u64,
    pub kind: ChangeKind,
}
