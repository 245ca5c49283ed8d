//! Seller inventory paging

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::models::{InventoryResponse, Listing};
use super::DiscogsClient;
use crate::error::Result;
use crate::seller_url::SellerQuery;

/// Query keys the pager sets itself; `limit` is the website's page size.
const PAGER_PARAMS: &[&str] = &["page", "per_page", "limit"];

fn is_pager_param(key: &str) -> bool {
    PAGER_PARAMS.iter().any(|p| key.eq_ignore_ascii_case(p))
}

/// One fetched inventory page
#[derive(Debug)]
pub(crate) struct InventoryPage {
    pub listings: Vec<Listing>,
    pub has_more: bool,
}

impl DiscogsClient {
    /// Lazily pages through a seller's listings, starting at page 1.
    ///
    /// Paging keys copied from the seller URL (`page`, `per_page`, `limit`)
    /// are dropped in favor of the pager's own.
    pub fn inventory<'a>(&'a self, query: &'a SellerQuery) -> InventoryPages<'a> {
        for (key, value) in query.filters.iter().filter(|(k, _)| is_pager_param(k)) {
            log::warn!("Ignoring URL parameter {}={}", key, value);
        }
        InventoryPages {
            client: self,
            query,
            next_page: Some(1),
            buffered: VecDeque::new(),
        }
    }

    pub(crate) fn fetch_inventory_page(
        &self,
        query: &SellerQuery,
        page: u32,
    ) -> Result<InventoryPage> {
        let path = format!(
            "/users/{}/inventory",
            urlencoding::encode(&query.username)
        );

        let mut params: Vec<(String, String)> = query
            .filters
            .iter()
            .filter(|(k, _)| !is_pager_param(k))
            .cloned()
            .collect();
        params.push(("page".to_string(), page.to_string()));
        params.push(("per_page".to_string(), self.per_page.to_string()));

        let response: InventoryResponse = self.get_json(&path, &params)?;
        let has_more = response.pagination.has_more(page);

        Ok(InventoryPage {
            listings: response.listings.into_iter().map(Listing::from).collect(),
            has_more,
        })
    }
}

/// Listings of one seller, fetched a page at a time.
///
/// Ends after the last page, after an empty page, or right after yielding an
/// error.
pub struct InventoryPages<'a> {
    client: &'a DiscogsClient,
    query: &'a SellerQuery,
    next_page: Option<u32>,
    buffered: VecDeque<Listing>,
}

impl Iterator for InventoryPages<'_> {
    type Item = Result<Listing>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(listing) = self.buffered.pop_front() {
                return Some(Ok(listing));
            }

            let page = self.next_page.take()?;
            log::info!("Fetching page {}...", page);

            match self.client.fetch_inventory_page(self.query, page) {
                Ok(fetched) => {
                    log::info!(
                        "  -> Page {}: {} listings fetched",
                        page,
                        fetched.listings.len()
                    );
                    if fetched.listings.is_empty() {
                        return None;
                    }
                    if fetched.has_more {
                        self.next_page = Some(page + 1);
                    }
                    self.buffered.extend(fetched.listings);
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl FusedIterator for InventoryPages<'_> {}
