//! `reqwest` blocking implementation of [`Transport`].

use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

use super::Transport;
use crate::error::{Result, ScrapeError};

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given user agent and request timeout.
    ///
    /// The timeout is the only bound on a hung request; the scraper itself
    /// never cancels a call.
    pub fn new(user_agent: &str, timeout_sec: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self { client })
    }

    fn read_body(url: &str, response: Response) -> Result<String> {
        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        Self::read_body(url, response)
    }

    fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        debug!("POST {} ({} form fields)", url, params.len());
        let response = self.client.post(url).form(params).send()?;
        Self::read_body(url, response)
    }
}
