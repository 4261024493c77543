use scraper::Html;
use tracing::{debug, info};

use crate::error::Result;
use crate::transport::Transport;

/// Lazily fetched, parsed homepage.
///
/// Every invalidation bumps `generation`; caches derived from the document
/// remember the generation they were built from and rebuild when it moves.
pub struct HomepageSnapshot {
    url: String,
    document: Option<Html>,
    generation: u64,
}

impl HomepageSnapshot {
    pub fn new(url: String) -> Self {
        Self {
            url,
            document: None,
            generation: 0,
        }
    }

    /// Return the parsed homepage, fetching it on first use.
    pub fn get(&mut self, transport: &dyn Transport) -> Result<&Html> {
        let document = match self.document.take() {
            Some(document) => document,
            None => {
                info!("Fetching homepage {}", self.url);
                let body = transport.get(&self.url)?;
                debug!("Homepage body is {} bytes", body.len());
                Html::parse_document(&body)
            }
        };
        let document: &Html = self.document.insert(document);
        Ok(document)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Drop the cached document and stale every derived cache.
    pub fn invalidate(&mut self) {
        self.document = None;
        self.generation += 1;
    }
}
