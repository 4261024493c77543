//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{StubTransport, homepage_html};
//!
//! #[test]
//! fn test_artists() {
//!     let transport = StubTransport::with_homepage(homepage_html());
//!     let mut scraper = transport.scraper();
//!     assert!(!scraper.artists().unwrap().is_empty());
//! }
//! ```

mod constants;
mod fixtures;
mod stub_transport;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{album_node, homepage_html, homepage_with_comments, page_body};
pub use stub_transport::StubTransport;
