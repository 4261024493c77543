//! End-to-end tests for homepage-derived data
//!
//! Tag listings, identifier lookups, the change feed and snapshot refresh.

mod common;

use catalog_scraper::{Change, ChangeKind, ScrapeError, Tag, TagKind};
use common::*;

#[test]
fn test_artists_and_genres_listing() {
    let transport = StubTransport::with_homepage(homepage_html());
    let mut scraper = transport.scraper();

    let artists = scraper.artists().unwrap();
    let genres = scraper.genres().unwrap();

    assert_eq!(
        artists,
        vec![
            Tag {
                name: ARTIST_1_NAME.to_string(),
                id: ARTIST_1_ID
            },
            Tag {
                name: ARTIST_2_NAME.to_string(),
                id: ARTIST_2_ID
            },
            Tag {
                name: ARTIST_3_NAME.to_string(),
                id: ARTIST_3_ID
            },
        ]
    );
    assert_eq!(genres.len(), 2);
    assert_eq!(genres[1].id, GENRE_2_ID);
    // One homepage fetch serves both listings
    assert_eq!(transport.get_count(), 1);
    assert_eq!(transport.get_urls(), vec![format!("{}/", TEST_BASE_URL)]);
}

#[test]
fn test_tag_id_lookup() {
    let transport = StubTransport::with_homepage(homepage_html());
    let mut scraper = transport.scraper();

    assert_eq!(
        scraper.tag_id(TagKind::Genre, GENRE_1_NAME).unwrap(),
        Some(GENRE_1_ID)
    );
    // Namespaces stay apart
    assert_eq!(scraper.tag_id(TagKind::Artist, GENRE_1_NAME).unwrap(), None);
}

#[test]
fn test_invalid_tag_kind_is_config_error() {
    let err = "composer".parse::<TagKind>().unwrap_err();
    assert!(matches!(err, ScrapeError::Config(_)));
}

#[test]
fn test_changes_last_write_wins() {
    let homepage = homepage_with_comments(&[
        (123, "#123 has been editted."),
        (456, "#456 is broken."),
        (123, "#123 is broken."),
    ]);
    let transport = StubTransport::with_homepage(homepage);
    let mut scraper = transport.scraper();

    let changes = scraper.changes().unwrap();

    assert_eq!(
        changes,
        vec![
            Change {
                album_id: 123,
                kind: ChangeKind::Broken
            },
            Change {
                album_id: 456,
                kind: ChangeKind::Broken
            },
        ]
    );
}

#[test]
fn test_changes_skip_chatter() {
    let homepage = homepage_with_comments(&[
        (10, "Thanks for the upload!"),
        (11, "#11 has been editted."),
    ]);
    let transport = StubTransport::with_homepage(homepage);
    let mut scraper = transport.scraper();

    let changes = scraper.changes().unwrap();
    assert_eq!(
        changes,
        vec![Change {
            album_id: 11,
            kind: ChangeKind::Edit
        }]
    );
}

#[test]
fn test_snapshot_is_cached_until_refresh() {
    let transport = StubTransport::with_homepage(homepage_html());
    let mut scraper = transport.scraper();

    scraper.artists().unwrap();
    scraper.tag_id(TagKind::Artist, ARTIST_1_NAME).unwrap();
    scraper.changes().unwrap();
    assert_eq!(transport.get_count(), 1);
    assert!(scraper.is_homepage_cached());

    scraper.refresh();
    assert!(!scraper.is_homepage_cached());

    scraper.genres().unwrap();
    assert_eq!(transport.get_count(), 2);
}

#[test]
fn test_refresh_rebuilds_identifier_cache() {
    let transport = StubTransport::with_homepage(homepage_html());
    let mut scraper = transport.scraper();

    assert_eq!(scraper.tag_id(TagKind::Artist, "Newcomer").unwrap(), None);

    transport.set_homepage(homepage_html().replace(ARTIST_3_NAME, "Newcomer"));
    // Stale snapshot still answers from the old listing
    assert_eq!(scraper.tag_id(TagKind::Artist, "Newcomer").unwrap(), None);
    assert_eq!(transport.get_count(), 1);

    scraper.refresh();
    assert_eq!(
        scraper.tag_id(TagKind::Artist, "Newcomer").unwrap(),
        Some(ARTIST_3_ID)
    );
    assert_eq!(transport.get_count(), 2);
}
