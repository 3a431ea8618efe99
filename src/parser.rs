use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime};
use scraper::{Html, Selector};

use crate::models::Product;
use crate::pricing::calculate_mrp;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_AVAILABILITY: &str = "In Stock";
pub const NO_REVIEW: &str = "No reviews available";
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span#productTitle").unwrap());
static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());
static RATING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());
static REVIEW_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span#acrCustomerReviewText").unwrap());
static AVAILABILITY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div#availability").unwrap());
static REVIEW_BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[data-hook="review-body"]"#).unwrap());

/// Text of the first element matching `selector`, each text node trimmed and
/// joined without separators. `None` when nothing matches.
fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|e| e.text().map(str::trim).collect())
}

pub fn extract_title(doc: &Html) -> Option<String> {
    first_text(doc, &TITLE)
}

pub fn extract_price(doc: &Html) -> Option<String> {
    first_text(doc, &PRICE)
}

pub fn extract_rating(doc: &Html) -> Option<String> {
    first_text(doc, &RATING)
}

pub fn extract_review_count(doc: &Html) -> Option<String> {
    first_text(doc, &REVIEW_COUNT)
}

/// May be `Some("")` when the block exists but carries no text.
pub fn extract_availability(doc: &Html) -> Option<String> {
    first_text(doc, &AVAILABILITY)
}

pub fn extract_one_review(doc: &Html) -> Option<String> {
    first_text(doc, &REVIEW_BODY)
}

fn availability_or_default(found: Option<String>) -> String {
    match found {
        Some(text) if text.is_empty() => DEFAULT_AVAILABILITY.into(),
        Some(text) => text,
        None => NOT_AVAILABLE.into(),
    }
}

pub fn parse_product(doc: &Html) -> Product {
    parse_product_at(doc, Local::now().naive_local())
}

/// Builds a record from a product page. Missing elements fall back to their
/// field defaults; this never fails.
pub fn parse_product_at(doc: &Html, captured_at: NaiveDateTime) -> Product {
    let or_na = |found: Option<String>| found.unwrap_or_else(|| NOT_AVAILABLE.into());

    let price = or_na(extract_price(doc));
    let mrp_price = calculate_mrp(&price);

    Product {
        title: or_na(extract_title(doc)),
        price,
        mrp_price,
        rating: or_na(extract_rating(doc)),
        review_count: or_na(extract_review_count(doc)),
        availability: availability_or_default(extract_availability(doc)),
        one_review: extract_one_review(doc).unwrap_or_else(|| NO_REVIEW.into()),
        date: captured_at.format(DATE_FORMAT).to_string(),
    }
}
