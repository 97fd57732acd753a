//! Named disclosure feeds offered by the filings source.

use crate::domain::error::InsiderError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    LatestPurchases,
    LatestSales,
    PurchasesOver25k,
    SalesOver100k,
    CeoCfoPurchasesOver25k,
}

impl Feed {
    pub const ALL: [Feed; 5] = [
        Feed::LatestPurchases,
        Feed::LatestSales,
        Feed::PurchasesOver25k,
        Feed::SalesOver100k,
        Feed::CeoCfoPurchasesOver25k,
    ];

    /// Human-readable label, carried on records as their source.
    pub fn label(&self) -> &'static str {
        match self {
            Feed::LatestPurchases => "Latest Insider Purchases",
            Feed::LatestSales => "Latest Insider Sales",
            Feed::PurchasesOver25k => "Purchases > $25 K",
            Feed::SalesOver100k => "Sales > $100 K",
            Feed::CeoCfoPurchasesOver25k => "CEO/CFO Purchases > $25 K",
        }
    }

    /// Stable identifier used in config files and data file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Feed::LatestPurchases => "latest-purchases",
            Feed::LatestSales => "latest-sales",
            Feed::PurchasesOver25k => "purchases-25k",
            Feed::SalesOver100k => "sales-100k",
            Feed::CeoCfoPurchasesOver25k => "ceo-cfo-purchases-25k",
        }
    }

    /// Query path on the filings site.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Feed::LatestPurchases => "insider-purchases",
            Feed::LatestSales => "insider-sells",
            Feed::PurchasesOver25k => "insider-purchases?pfl=25",
            Feed::SalesOver100k => "insider-sells?pfl=100",
            Feed::CeoCfoPurchasesOver25k => "insider-purchases?plm=25&pft=CEO,CFO",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Feed, InsiderError> {
        let wanted = slug.trim().to_lowercase();
        Feed::ALL
            .into_iter()
            .find(|f| f.slug() == wanted)
            .ok_or_else(|| InsiderError::UnknownFeed(slug.trim().to_string()))
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a comma-separated feed list, dropping duplicates.
pub fn parse_feeds(input: &str) -> Result<Vec<Feed>, InsiderError> {
    let mut feeds = Vec::new();
    for token in input.split(',').filter(|t| !t.trim().is_empty()) {
        let feed = Feed::from_slug(token)?;
        if !feeds.contains(&feed) {
            feeds.push(feed);
        }
    }
    Ok(feeds)
}
