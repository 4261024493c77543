//! In-memory transport serving a fixed homepage and scripted AJAX bodies.

#![allow(dead_code)]

use catalog_scraper::{CatalogScraper, Result, ScrapeError, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::constants::TEST_HOST;

pub struct StubTransport {
    homepage: Mutex<String>,
    post_bodies: Mutex<VecDeque<String>>,
    gets: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl StubTransport {
    pub fn with_homepage(homepage: String) -> Arc<Self> {
        Arc::new(Self {
            homepage: Mutex::new(homepage),
            post_bodies: Mutex::new(VecDeque::new()),
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        })
    }

    /// Scraper for [`TEST_HOST`] using this transport.
    pub fn scraper(self: &Arc<Self>) -> CatalogScraper {
        CatalogScraper::new(TEST_HOST, self.clone())
    }

    pub fn set_homepage(&self, homepage: String) {
        *self.homepage.lock().unwrap() = homepage;
    }

    /// Queue the body returned by the next POST.
    pub fn push_post_body(&self, body: String) {
        self.post_bodies.lock().unwrap().push_back(body);
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }

    pub fn get_urls(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn post_url(&self, index: usize) -> String {
        self.posts.lock().unwrap()[index].0.clone()
    }

    /// Every value sent under `key` in the `index`-th POST.
    pub fn post_field(&self, index: usize, key: &str) -> Vec<String> {
        self.posts.lock().unwrap()[index]
            .1
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn posted_ids(&self, index: usize) -> Vec<u64> {
        self.post_field(index, "ids[]")
            .iter()
            .map(|v| v.parse().unwrap())
            .collect()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.gets.lock().unwrap().push(url.to_string());
        Ok(self.homepage.lock().unwrap().clone())
    }

    fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), params.to_vec()));
        self.post_bodies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ScrapeError::Transport(format!("no scripted response for {}", url)))
    }
}
