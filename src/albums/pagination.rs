//! Paginated retrieval against the AJAX album endpoint.
//!
//! The first response fixes the authoritative ID set for the run (the caller's
//! list in by-ID mode). After every page the first [`PAGE_SIZE`] IDs are
//! removed from that set, and the run continues with a by-ID request for the
//! remainder until nothing is left.

use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, warn};

use super::extract::{extract_albums, LabelResolver};
use super::payload::decode_page;
use super::request::{FetchRequest, PAGE_SIZE};
use crate::catalog::Album;
use crate::error::{Result, ScrapeError};
use crate::transport::Transport;

/// Default bound on pages per run.
pub const DEFAULT_MAX_PAGES: usize = 400;

/// Outcome of a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchRun {
    pub albums: Vec<Album>,
    pub pages: usize,
    /// Genre/artist labels omitted because they did not resolve.
    pub dropped_labels: usize,
}

pub struct PaginatedFetch<'a> {
    transport: &'a dyn Transport,
    endpoint: &'a str,
    max_pages: usize,
}

impl<'a> PaginatedFetch<'a> {
    pub fn new(transport: &'a dyn Transport, endpoint: &'a str, max_pages: usize) -> Self {
        Self {
            transport,
            endpoint,
            max_pages,
        }
    }

    /// Fetch every album the request matches.
    ///
    /// Returns `Ok(None)` as soon as a response body cannot be decoded; albums
    /// gathered up to that point are discarded.
    pub fn run(
        &self,
        request: &FetchRequest,
        resolver: &mut dyn LabelResolver,
    ) -> Result<Option<FetchRun>> {
        request.validate()?;

        let mut remaining: Option<VecDeque<u64>> = match request {
            FetchRequest::ByIds(ids) => Some(ids.iter().copied().collect()),
            _ => None,
        };
        let mut allowed: Option<HashSet<u64>> = None;
        let mut params = request.form_params();
        let mut run = FetchRun::default();

        info!("Starting {} album fetch", request.mode());

        loop {
            if run.pages >= self.max_pages {
                warn!(
                    "Giving up {} fetch after {} pages with albums still pending",
                    request.mode(),
                    run.pages
                );
                return Err(ScrapeError::PageLimit {
                    max_pages: self.max_pages,
                });
            }

            let body = self.transport.post_form(self.endpoint, &params)?;
            run.pages += 1;

            let Some(payload) = decode_page(&body) else {
                warn!(
                    "Page {} of {} fetch could not be decoded, aborting run",
                    run.pages,
                    request.mode()
                );
                return Ok(None);
            };

            let page = extract_albums(&payload.fragment, resolver)?;

            let pending = remaining.get_or_insert_with(|| match payload.array_set {
                Some(ids) => ids.into_iter().collect(),
                None => page.albums.iter().map(|album| album.id).collect(),
            });
            let allowed = allowed.get_or_insert_with(|| pending.iter().copied().collect());

            debug!(
                "Page {} returned {} albums, {} IDs pending",
                run.pages,
                page.albums.len(),
                pending.len()
            );

            for album in page.albums {
                if allowed.contains(&album.id) {
                    run.albums.push(album);
                } else {
                    warn!("Dropping album {} outside the requested ID set", album.id);
                }
            }
            run.dropped_labels += page.dropped_labels;

            let consumed = pending.len().min(PAGE_SIZE);
            pending.drain(..consumed);
            if pending.is_empty() {
                break;
            }

            params = FetchRequest::ByIds(pending.iter().copied().collect()).form_params();
        }

        info!(
            "Fetched {} albums in {} pages ({} unresolved labels)",
            run.albums.len(),
            run.pages,
            run.dropped_labels
        );
        Ok(Some(run))
    }
}
