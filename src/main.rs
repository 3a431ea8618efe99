mod archiver;
mod config;
mod fetcher;
mod logger;
mod models;
mod parser;
mod pricing;
mod scrape;

use anyhow::Result;
use log::info;

use crate::config::ScrapeConfig;
use crate::fetcher::HttpFetcher;

fn main() -> Result<()> {
    logger::init();

    let config = ScrapeConfig::default();
    let fetcher = HttpFetcher::new()?;

    let saved = scrape::scrape_products(&fetcher, &config)?;
    info!("Scraped {} of {} products.", saved, config.urls.len());
    Ok(())
}
