use anyhow::Result;
use log::{debug, error};
use reqwest::blocking::Client;
use scraper::Html;

pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/91.0.4472.124 Safari/537.36",
);
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Something that can turn a URL into a parsed page.
///
/// `None` means the page could not be retrieved and the URL should be skipped.
pub trait PageSource {
    fn fetch_document(&self, url: &str) -> Option<Html>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn fetch_html(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send()?
            .error_for_status()?
            .text()
    }
}

impl PageSource for HttpFetcher {
    fn fetch_document(&self, url: &str) -> Option<Html> {
        match self.fetch_html(url) {
            Ok(html) => {
                debug!("Fetched {} bytes from {}", html.len(), url);
                Some(Html::parse_document(&html))
            }
            Err(e) => {
                error!("Error fetching URL {}: {}", url, e);
                None
            }
        }
    }
}
