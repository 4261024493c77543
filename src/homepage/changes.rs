//! Recent-changes feed parsing.
//!
//! The homepage comment widget doubles as a maintenance log: moderators post
//! "#<id> has been editted." or "#<id> is broken." under the album.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashMap;
use tracing::debug;

use crate::catalog::{Change, ChangeKind};

const EDITED_PHRASE: &str = "has been editted";
const BROKEN_PHRASE: &str = "is broken";

lazy_static! {
    static ref COMMENT: Selector =
        Selector::parse("#recent-comments li").expect("Failed to parse comment selector");
    static ref COMMENT_LINK: Selector =
        Selector::parse("a[href]").expect("Failed to parse comment link selector");
    static ref TRAILING_ID: Regex = Regex::new(r"(\d+)$").expect("Failed to compile id regex");
}

fn classify(text: &str) -> Option<ChangeKind> {
    if text.contains(EDITED_PHRASE) {
        Some(ChangeKind::Edit)
    } else if text.contains(BROKEN_PHRASE) {
        Some(ChangeKind::Broken)
    } else {
        None
    }
}

/// Numeric suffix of a link, ignoring any `#fragment` and trailing slash.
fn album_id_from_href(href: &str) -> Option<u64> {
    let path = href.split('#').next()?.trim_end_matches('/');
    TRAILING_ID.captures(path)?.get(1)?.as_str().parse().ok()
}

/// Latest status per album, in the order albums first appear in the feed.
pub fn parse_changes(document: &Html) -> Vec<Change> {
    let mut order: Vec<u64> = Vec::new();
    let mut latest: HashMap<u64, ChangeKind> = HashMap::new();

    for comment in document.select(&COMMENT) {
        let Some(album_id) = comment
            .select(&COMMENT_LINK)
            .next()
            .and_then(|link| link.value().attr("href"))
            .and_then(album_id_from_href)
        else {
            debug!("Skipping comment without an album link");
            continue;
        };

        let text = comment.text().collect::<String>();
        let Some(kind) = classify(&text) else {
            debug!("Skipping unrecognised comment for album {}", album_id);
            continue;
        };

        if latest.insert(album_id, kind).is_none() {
            order.push(album_id);
        }
    }

    order
        .into_iter()
        .filter_map(|album_id| {
            latest
                .get(&album_id)
                .map(|&kind| Change { album_id, kind })
        })
        .collect()
}
