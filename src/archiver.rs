use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::config::OutputPaths;
use crate::models::{PriceView, Product, ReviewView};

/// Serializes `rows` as CSV into `writer`, with a header row only if asked.
pub fn write_rows<W, T, I>(writer: W, rows: I, with_header: bool) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Appends products to the historical table, creating it with a header row
/// the first time.
pub fn append_products(products: &[Product], path: &Path) -> Result<()> {
    let file_exists = path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    write_rows(file, products, !file_exists)
        .with_context(|| format!("appending to {}", path.display()))?;
    info!("Data saved to {}", path.display());
    Ok(())
}

/// Replaces the file at `path` with `rows`, header included.
fn overwrite<T: Serialize>(rows: impl IntoIterator<Item = T>, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, rows, true).with_context(|| format!("writing {}", path.display()))
}

pub fn write_price_view(products: &[Product], path: &Path) -> Result<()> {
    overwrite(products.iter().map(PriceView::from), path)
}

pub fn write_review_view(products: &[Product], path: &Path) -> Result<()> {
    overwrite(products.iter().map(ReviewView::from), path)
}

/// Persists one batch: appended to the primary table, and both views
/// rewritten from this batch alone.
pub fn save_batch(products: &[Product], paths: &OutputPaths) -> Result<()> {
    append_products(products, &paths.primary)?;
    write_price_view(products, &paths.price_view)?;
    write_review_view(products, &paths.review_view)?;
    Ok(())
}
