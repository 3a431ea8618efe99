use serde::Serialize;

/// One scraped product page, in primary-table column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "MRP Price")]
    pub mrp_price: Option<f64>,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Review Count")]
    pub review_count: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "One Review")]
    pub one_review: String,
    #[serde(rename = "Date")]
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct PriceView<'a> {
    #[serde(rename = "Date")]
    pub date: &'a str,
    #[serde(rename = "Title")]
    pub title: &'a str,
    #[serde(rename = "Price")]
    pub price: &'a str,
    #[serde(rename = "MRP Price")]
    pub mrp_price: Option<f64>,
    #[serde(rename = "Availability")]
    pub availability: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ReviewView<'a> {
    #[serde(rename = "Date")]
    pub date: &'a str,
    #[serde(rename = "Title")]
    pub title: &'a str,
    #[serde(rename = "Rating")]
    pub rating: &'a str,
    #[serde(rename = "Review Count")]
    pub review_count: &'a str,
    #[serde(rename = "One Review")]
    pub one_review: &'a str,
    #[serde(rename = "Availability")]
    pub availability: &'a str,
}

impl<'a> From<&'a Product> for PriceView<'a> {
    fn from(p: &'a Product) -> Self {
        PriceView {
            date: &p.date,
            title: &p.title,
            price: &p.price,
            mrp_price: p.mrp_price,
            availability: &p.availability,
        }
    }
}

impl<'a> From<&'a Product> for ReviewView<'a> {
    fn from(p: &'a Product) -> Self {
        ReviewView {
            date: &p.date,
            title: &p.title,
            rating: &p.rating,
            review_count: &p.review_count,
            one_review: &p.one_review,
            availability: &p.availability,
        }
    }
}
