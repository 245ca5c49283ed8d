//! Seller profile URL parsing
//!
//! Turns `https://www.discogs.com/seller/<name>/profile?format=Vinyl` into a
//! username plus the query filters to forward to the inventory endpoint.

use url::Url;

use crate::error::{FinderError, Result};

/// Seller and inventory filters taken from a profile URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerQuery {
    pub username: String,
    /// Query pairs in URL order, percent-decoded
    pub filters: Vec<(String, String)>,
}

impl SellerQuery {
    /// First value of a filter, if present
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a seller profile URL. The scheme may be omitted.
pub fn parse_seller_url(input: &str) -> Result<SellerQuery> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FinderError::InvalidUrl("empty URL".to_string()));
    }

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}"))?,
        Err(e) => return Err(e.into()),
    };

    let username = url
        .path_segments()
        .and_then(|mut segments| {
            segments.find(|s| *s == "seller")?;
            segments.next()
        })
        .filter(|name| !name.is_empty())
        .map(|name| {
            urlencoding::decode(name)
                .map(|n| n.into_owned())
                .unwrap_or_else(|_| name.to_string())
        })
        .ok_or_else(|| FinderError::InvalidUrl(format!("no seller username in {input}")))?;

    let filters = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    Ok(SellerQuery { username, filters })
}

#[cfg(test)]
#[path = "seller_url_tests.rs"]
mod tests;
