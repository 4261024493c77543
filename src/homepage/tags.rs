//! Tag listings and the name → ID lookup built from them.

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use std::collections::HashMap;
use tracing::debug;

use crate::catalog::{Tag, TagKind};

lazy_static! {
    static ref ARTIST_TAG: Selector = Selector::parse(r#"a.tag[data-type="artist"][data-id]"#)
        .expect("Failed to parse artist tag selector");
    static ref GENRE_TAG: Selector = Selector::parse(r#"a.tag[data-type="genre"][data-id]"#)
        .expect("Failed to parse genre tag selector");
}

fn selector_for(kind: TagKind) -> &'static Selector {
    match kind {
        TagKind::Artist => &ARTIST_TAG,
        TagKind::Genre => &GENRE_TAG,
    }
}

/// Read every tag of `kind` listed in the homepage, in document order.
pub fn parse_tags(document: &Html, kind: TagKind) -> Vec<Tag> {
    document
        .select(selector_for(kind))
        .filter_map(|element| {
            let raw_id = element.value().attr("data-id")?.trim();
            let Ok(id) = raw_id.parse::<u64>() else {
                debug!("Skipping {} tag with non-numeric id '{}'", kind, raw_id);
                return None;
            };
            let name = element.text().collect::<String>().trim().to_string();
            Some(Tag { name, id })
        })
        .collect()
}

/// Name → ID map for one tag kind, tied to a snapshot generation.
pub struct IdentifierCache {
    kind: TagKind,
    built_for: Option<u64>,
    ids: HashMap<String, u64>,
}

impl IdentifierCache {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            built_for: None,
            ids: HashMap::new(),
        }
    }

    /// Whether the map was built from the snapshot at `generation`.
    pub fn is_current(&self, generation: u64) -> bool {
        self.built_for == Some(generation)
    }

    pub fn rebuild(&mut self, document: &Html, generation: u64) {
        self.ids.clear();
        for tag in parse_tags(document, self.kind) {
            // First listing wins on duplicate names
            self.ids.entry(tag.name).or_insert(tag.id);
        }
        self.built_for = Some(generation);
        debug!(
            "Built {} identifier cache with {} entries (generation {})",
            self.kind,
            self.ids.len(),
            generation
        );
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.ids.get(name.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
