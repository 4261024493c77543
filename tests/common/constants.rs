//! Shared constants for end-to-end tests
//!
//! When the fixture homepage changes, update only this file.

#![allow(dead_code)]

pub const TEST_HOST: &str = "https://music.example.org/";

pub const TEST_BASE_URL: &str = "https://music.example.org";

pub const AJAX_URL: &str = "https://music.example.org/wp-admin/admin-ajax.php";

// ============================================================================
// Homepage artists
// ============================================================================

pub const ARTIST_1_ID: u64 = 42;
pub const ARTIST_1_NAME: &str = "Sawano Hiroyuki";

pub const ARTIST_2_ID: u64 = 43;
pub const ARTIST_2_NAME: &str = "Kajiura Yuki";

pub const ARTIST_3_ID: u64 = 44;
pub const ARTIST_3_NAME: &str = "Kanno Yoko";

// ============================================================================
// Homepage genres
// ============================================================================

pub const GENRE_1_ID: u64 = 7;
pub const GENRE_1_NAME: &str = "Soundtrack";

pub const GENRE_2_ID: u64 = 8;
pub const GENRE_2_NAME: &str = "Orchestral";
