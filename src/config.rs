use std::path::{Path, PathBuf};

pub const PRIMARY_FILE: &str = "amazon_products.csv";
pub const PRICE_VIEW_FILE: &str = "price_data.csv";
pub const REVIEW_VIEW_FILE: &str = "review_data.csv";

const DEFAULT_URLS: [&str; 3] = [
    "https://www.amazon.in/boAt-Rockerz-480-Bluetooth-Headphones/dp/B0DGTSRX3R",
    "https://www.amazon.in/HP-i5-13420H-15-6-inch-Backlit-fa1319TX/dp/B0D1YJR2ZY",
    "https://www.amazon.in/Samsung-Galaxy-Ultra-Titanium-Storage/dp/B0DSKMKJV5",
];

/// Where a batch is written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    /// Historical table, appended to on every run.
    pub primary: PathBuf,
    /// Current batch only.
    pub price_view: PathBuf,
    /// Current batch only.
    pub review_view: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            primary: dir.join(PRIMARY_FILE),
            price_view: dir.join(PRICE_VIEW_FILE),
            review_view: dir.join(REVIEW_VIEW_FILE),
        }
    }
}

impl Default for OutputPaths {
    /// The three default file names in the working directory.
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub urls: Vec<String>,
    pub output: OutputPaths,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            output: OutputPaths::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_to_cwd() {
        let config = ScrapeConfig::default();
        assert_eq!(config.urls.len(), 3);
        assert_eq!(config.output.primary, PathBuf::from("amazon_products.csv"));
        assert_eq!(config.output.price_view, PathBuf::from("price_data.csv"));
        assert_eq!(config.output.review_view, PathBuf::from("review_data.csv"));
    }

    #[test]
    fn in_dir_joins_file_names() {
        let paths = OutputPaths::in_dir(Path::new("/tmp/run"));
        assert_eq!(paths.primary, PathBuf::from("/tmp/run/amazon_products.csv"));
        assert_eq!(paths.review_view, PathBuf::from("/tmp/run/review_data.csv"));
    }
}
