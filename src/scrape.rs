use anyhow::Result;
use log::{info, warn};

use crate::archiver;
use crate::config::ScrapeConfig;
use crate::fetcher::PageSource;
use crate::models::Product;
use crate::parser;

/// Fetches and parses one product page; `None` if the fetch failed.
pub fn scrape_product(source: &impl PageSource, url: &str) -> Option<Product> {
    let doc = source.fetch_document(url)?;
    Some(parser::parse_product(&doc))
}

/// Scrapes every configured URL in order and persists the successful ones.
///
/// Returns how many records were saved. An empty batch writes nothing.
pub fn scrape_products(source: &impl PageSource, config: &ScrapeConfig) -> Result<usize> {
    let mut products = Vec::with_capacity(config.urls.len());
    for (i, url) in config.urls.iter().enumerate() {
        info!("Scraping {}/{}: {}", i + 1, config.urls.len(), url);
        if let Some(product) = scrape_product(source, url) {
            products.push(product);
        }
    }

    if products.is_empty() {
        warn!("No data scraped.");
        return Ok(0);
    }

    archiver::save_batch(&products, &config.output)?;
    Ok(products.len())
}
