//! Markup and response fixtures mirroring what the catalog site serves.

#![allow(dead_code)]

use super::constants::*;

fn tag(kind: &str, id: u64, name: &str) -> String {
    format!(r#"<li><a class="tag" data-type="{kind}" data-id="{id}" href="/tag/{id}">{name}</a></li>"#)
}

/// Homepage with the fixture artists/genres and the given comment feed.
///
/// Each comment is `(album_id, text)`; the link points at the album post.
pub fn homepage_with_comments(comments: &[(u64, &str)]) -> String {
    let artists = [
        tag("artist", ARTIST_1_ID, ARTIST_1_NAME),
        tag("artist", ARTIST_2_ID, ARTIST_2_NAME),
        tag("artist", ARTIST_3_ID, ARTIST_3_NAME),
    ]
    .concat();
    let genres = [
        tag("genre", GENRE_1_ID, GENRE_1_NAME),
        tag("genre", GENRE_2_ID, GENRE_2_NAME),
    ]
    .concat();
    let feed: String = comments
        .iter()
        .enumerate()
        .map(|(n, (album_id, text))| {
            format!(
                r#"<li class="recentcomments"><span class="comment-author-link">mod</span> on <a href="{TEST_BASE_URL}/?p={album_id}#comment-{n}">{text}</a></li>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Catalog</title></head>
<body>
  <aside>
    <h3>Artists</h3><ul class="tag-list">{artists}</ul>
    <h3>Genres</h3><ul class="tag-list">{genres}</ul>
    <h3>Recent Comments</h3><ul id="recent-comments">{feed}</ul>
  </aside>
</body>
</html>"#
    )
}

pub fn homepage_html() -> String {
    homepage_with_comments(&[])
}

/// One album node as rendered in the AJAX fragment.
pub fn album_node(id: u64, broken: bool, genres: &str, artists: &str) -> String {
    let overlay = if broken { "Please fix" } else { "" };
    format!(
        r#"<div class="album" data-post-id="{id}">
  <a href="{TEST_BASE_URL}/?p={id}"><img class="album-cover" src="{TEST_BASE_URL}/covers/{id}.jpg"></a>
  <div class="overlay-text">{overlay}</div>
  <h2 class="album-title">Album {id}</h2>
  <p>Genres: <span class="album-genres">{genres}</span></p>
  <p>Artists: <span class="album-artists">{artists}</span></p>
  <a class="album-download" href="{TEST_BASE_URL}/dl?p={id}">https://files.example.org/{id}.zip</a>
</div>"#
    )
}

/// AJAX response body with one plain album node per ID in `ids`.
pub fn page_body(array_set: Option<&[u64]>, ids: &[u64]) -> String {
    let fragment: String = ids
        .iter()
        .map(|&id| album_node(id, false, GENRE_1_NAME, ARTIST_1_NAME))
        .collect();
    let mut body = serde_json::json!({ "album": fragment });
    if let Some(set) = array_set {
        body["arraySet"] = serde_json::json!(set);
    }
    body.to_string()
}
