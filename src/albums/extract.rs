//! Album record extraction from an AJAX page fragment.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::catalog::{Album, TagKind};
use crate::error::{Result, ScrapeError};

const BROKEN_MARKER: &str = "please fix";

lazy_static! {
    static ref ALBUM: Selector =
        Selector::parse("div.album").expect("Failed to parse album selector");
    static ref TITLE: Selector =
        Selector::parse(".album-title").expect("Failed to parse title selector");
    static ref COVER: Selector =
        Selector::parse("img.album-cover").expect("Failed to parse cover selector");
    static ref DOWNLOAD: Selector =
        Selector::parse("a.album-download").expect("Failed to parse download selector");
    static ref OVERLAY: Selector =
        Selector::parse(".overlay-text").expect("Failed to parse overlay selector");
    static ref GENRES: Selector =
        Selector::parse(".album-genres").expect("Failed to parse genres selector");
    static ref ARTISTS: Selector =
        Selector::parse(".album-artists").expect("Failed to parse artists selector");
}

/// Maps a genre or artist label to its catalog ID.
pub trait LabelResolver {
    fn resolve(&mut self, kind: TagKind, name: &str) -> Result<Option<u64>>;
}

/// Albums of one page, plus how many labels could not be resolved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub albums: Vec<Album>,
    pub dropped_labels: usize,
}

/// Album fields as they appear in markup, before label resolution.
struct RawAlbum {
    id: u64,
    title: String,
    cover: String,
    download: Option<String>,
    broken: bool,
    genres: String,
    artists: String,
}

fn text_of(node: &ElementRef, selector: &Selector) -> Option<String> {
    node.select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
}

fn read_album(node: ElementRef) -> Result<RawAlbum> {
    let raw_id = node
        .value()
        .attr("data-post-id")
        .ok_or_else(|| ScrapeError::Parse("album node without data-post-id".to_string()))?;
    let id = raw_id
        .trim()
        .parse::<u64>()
        .map_err(|_| ScrapeError::Parse(format!("album id '{}' is not numeric", raw_id)))?;

    let title = text_of(&node, &TITLE)
        .ok_or_else(|| ScrapeError::Parse(format!("album {} has no title", id)))?;
    let cover = node
        .select(&COVER)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| src.trim().to_string())
        .ok_or_else(|| ScrapeError::Parse(format!("album {} has no cover", id)))?;

    let broken = text_of(&node, &OVERLAY)
        .map(|text| text.to_lowercase().contains(BROKEN_MARKER))
        .unwrap_or(false);

    Ok(RawAlbum {
        id,
        title,
        cover,
        download: text_of(&node, &DOWNLOAD).filter(|link| !link.is_empty()),
        broken,
        genres: text_of(&node, &GENRES).unwrap_or_default(),
        artists: text_of(&node, &ARTISTS).unwrap_or_default(),
    })
}

/// Resolve each comma-separated label, omitting the ones the resolver misses.
fn resolve_labels(
    labels: &str,
    kind: TagKind,
    resolver: &mut dyn LabelResolver,
    dropped: &mut usize,
) -> Result<Vec<u64>> {
    let mut ids = Vec::new();
    for label in labels.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        match resolver.resolve(kind, label)? {
            Some(id) => ids.push(id),
            None => {
                debug!("Dropping unresolved {} label '{}'", kind, label);
                *dropped += 1;
            }
        }
    }
    Ok(ids)
}

/// Turn one page fragment into albums, in document order.
pub fn extract_albums(fragment: &str, resolver: &mut dyn LabelResolver) -> Result<ExtractedPage> {
    let document = Html::parse_fragment(fragment);
    let raw_albums: Vec<RawAlbum> = document
        .select(&ALBUM)
        .map(read_album)
        .collect::<Result<_>>()?;

    let mut page = ExtractedPage::default();
    for raw in raw_albums {
        let url = if raw.broken {
            None
        } else {
            Some(raw.download.ok_or_else(|| {
                ScrapeError::Parse(format!("album {} has no download link", raw.id))
            })?)
        };
        let genres = resolve_labels(
            &raw.genres,
            TagKind::Genre,
            resolver,
            &mut page.dropped_labels,
        )?;
        let artists = resolve_labels(
            &raw.artists,
            TagKind::Artist,
            resolver,
            &mut page.dropped_labels,
        )?;

        page.albums.push(Album {
            id: raw.id,
            title: raw.title,
            url,
            cover: raw.cover,
            genres,
            artists,
        });
    }
    Ok(page)
}
