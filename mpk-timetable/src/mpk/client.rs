//! HTTP client for the MPK Kraków timetable pages.

use std::time::Duration;

use tracing::debug;

use crate::fetcher::{TimetableSession, TimetableSource};

use super::error::MpkError;
use super::request::TimetableRequest;

/// Default base URL of the timetable server.
const DEFAULT_BASE_URL: &str = "https://rozklady.mpk.krakow.pl/";

/// Default page language.
const DEFAULT_LANG: &str = "PL";

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct MpkConfig {
    /// Base URL; every page is a query against it
    pub base_url: String,
    /// Value of the `lang` query parameter
    pub lang: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl MpkConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MpkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Timetable server client.
///
/// Holds configuration only. Each query opens its own [`MpkSession`].
#[derive(Debug, Clone)]
pub struct MpkClient {
    config: MpkConfig,
}

impl MpkClient {
    pub fn new(config: MpkConfig) -> Self {
        Self { config }
    }
}

/// One cookie-carrying session against the timetable server.
#[derive(Debug, Clone)]
pub struct MpkSession {
    http: reqwest::Client,
    base_url: String,
    lang: String,
}

/// Turn a non-success status into an error.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, MpkError> {
    let status = response.status();
    if !status.is_success() {
        return Err(MpkError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

impl TimetableSource for MpkClient {
    type Session = MpkSession;

    /// Build a fresh cookie store and warm it up with a plain GET of the
    /// base URL, as a browser landing on the site would.
    async fn open_session(&self) -> Result<MpkSession, MpkError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(self.config.user_agent.as_str())
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()?;

        debug!(url = %self.config.base_url, "opening timetable session");
        let response = http.get(&self.config.base_url).send().await?;
        check_status(response)?;

        Ok(MpkSession {
            http,
            base_url: self.config.base_url.clone(),
            lang: self.config.lang.clone(),
        })
    }
}

impl TimetableSession for MpkSession {
    async fn fetch_page(&self, request: &TimetableRequest) -> Result<String, MpkError> {
        debug!(linia = %request.selector, date = %request.date, "fetching timetable page");

        let response = self
            .http
            .get(&self.base_url)
            .query(&request.query(&self.lang))
            .send()
            .await?;

        let body = check_status(response)?.text().await?;
        Ok(body)
    }
}
