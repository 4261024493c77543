//! Homepage-derived state: the cached document, the tag listings and
//! identifier caches built from it, and the recent-changes feed.

mod changes;
mod snapshot;
mod tags;

pub use changes::parse_changes;
pub use snapshot::HomepageSnapshot;
pub use tags::{parse_tags, IdentifierCache};

use crate::albums::LabelResolver;
use crate::catalog::{Change, Tag, TagKind};
use crate::error::Result;
use crate::transport::Transport;

/// Homepage snapshot plus the two identifier caches derived from it.
///
/// Invalidation is a single generation bump on the snapshot, so the caches
/// can never outlive the document they were built from.
pub struct Homepage {
    snapshot: HomepageSnapshot,
    artists: IdentifierCache,
    genres: IdentifierCache,
}

impl Homepage {
    pub fn new(url: String) -> Self {
        Self {
            snapshot: HomepageSnapshot::new(url),
            artists: IdentifierCache::new(TagKind::Artist),
            genres: IdentifierCache::new(TagKind::Genre),
        }
    }

    /// Tags of `kind` read straight from the current snapshot, in listing order.
    pub fn tags(&mut self, transport: &dyn Transport, kind: TagKind) -> Result<Vec<Tag>> {
        let document = self.snapshot.get(transport)?;
        Ok(parse_tags(document, kind))
    }

    /// Look `name` up in the identifier cache for `kind`, building it if stale.
    pub fn resolve(
        &mut self,
        transport: &dyn Transport,
        kind: TagKind,
        name: &str,
    ) -> Result<Option<u64>> {
        let generation = self.snapshot.generation();
        let cache = match kind {
            TagKind::Artist => &mut self.artists,
            TagKind::Genre => &mut self.genres,
        };
        if !cache.is_current(generation) {
            let document = self.snapshot.get(transport)?;
            cache.rebuild(document, generation);
        }
        Ok(cache.get(name))
    }

    pub fn changes(&mut self, transport: &dyn Transport) -> Result<Vec<Change>> {
        let document = self.snapshot.get(transport)?;
        Ok(parse_changes(document))
    }

    pub fn invalidate(&mut self) {
        self.snapshot.invalidate();
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_loaded()
    }

    /// Borrow this homepage as a label resolver for the record extractor.
    pub fn resolver<'a>(&'a mut self, transport: &'a dyn Transport) -> HomepageResolver<'a> {
        HomepageResolver {
            homepage: self,
            transport,
        }
    }
}

/// [`LabelResolver`] backed by the homepage identifier caches.
pub struct HomepageResolver<'a> {
    homepage: &'a mut Homepage,
    transport: &'a dyn Transport,
}

impl LabelResolver for HomepageResolver<'_> {
    fn resolve(&mut self, kind: TagKind, name: &str) -> Result<Option<u64>> {
        self.homepage.resolve(self.transport, kind, name)
    }
}
