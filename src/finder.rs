//! The inventory → release → filter → report pipeline

use std::io::Write;

use crate::config::FinderConfig;
use crate::discogs::{DiscogsClient, Listing, ReleaseRecord};
use crate::error::Result;
use crate::formats::DigitalFormatFilter;
use crate::rate_limit::Clock;
use crate::report::Reporter;
use crate::seller_url::{parse_seller_url, SellerQuery};

/// A listing dropped because its release could not be inspected
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedListing {
    /// 1-based position in the inventory
    pub position: usize,
    pub listing_id: u64,
    pub release_id: u64,
    pub reason: String,
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub fetched: usize,
    pub inspected: usize,
    pub genre_mismatches: usize,
    /// Releases dropped because they are not themselves on vinyl
    pub not_vinyl: usize,
    pub vinyl_only: usize,
    pub skipped: Vec<SkippedListing>,
}

/// Finds the vinyl-only listings of a seller
#[derive(Debug)]
pub struct VinylOnlyFinder {
    client: DiscogsClient,
    filter: DigitalFormatFilter,
    genre: Option<String>,
    require_vinyl: bool,
}

impl VinylOnlyFinder {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        Ok(Self::from_parts(DiscogsClient::new(config)?, config))
    }

    /// Like [`VinylOnlyFinder::new`], pacing requests on the given clock
    pub fn with_clock(config: &FinderConfig, clock: Box<dyn Clock>) -> Result<Self> {
        Ok(Self::from_parts(
            DiscogsClient::with_clock(config, clock)?,
            config,
        ))
    }

    fn from_parts(client: DiscogsClient, config: &FinderConfig) -> Self {
        Self {
            client,
            filter: DigitalFormatFilter::new(&config.digital_keywords),
            genre: config
                .genre
                .as_deref()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string),
            require_vinyl: config.require_vinyl,
        }
    }

    /// Walk the inventory and collect vinyl-only listings into `reporter`.
    ///
    /// Inventory errors abort the run. A failed release lookup only skips
    /// that listing.
    pub fn run(&self, query: &SellerQuery, reporter: &mut Reporter) -> Result<RunSummary> {
        log::info!("Fetching inventory for seller: {}", query.username);
        for (key, value) in &query.filters {
            log::info!("Inventory filter: {}={}", key, value);
        }
        if let Some(genre) = &self.genre {
            log::info!("Genre filter: {}", genre);
        }
        if self.require_vinyl {
            log::info!("Skipping releases that are not on vinyl");
        }

        let mut summary = RunSummary::default();

        for (index, listing) in self.client.inventory(query).enumerate() {
            let listing = listing?;
            let position = index + 1;
            summary.fetched += 1;

            if let Some(skipped) = self.check_listing(position, listing, reporter, &mut summary) {
                log::warn!(
                    "Skipping listing #{} ({}, release {}): {}",
                    skipped.position,
                    skipped.listing_id,
                    skipped.release_id,
                    skipped.reason
                );
                summary.skipped.push(skipped);
            }
        }

        summary.vinyl_only = reporter.len();
        Ok(summary)
    }

    fn check_listing(
        &self,
        position: usize,
        listing: Listing,
        reporter: &mut Reporter,
        summary: &mut RunSummary,
    ) -> Option<SkippedListing> {
        let record = match self.client.inspect_release(listing.release_id) {
            Ok(record) => record,
            Err(e) => {
                return Some(SkippedListing {
                    position,
                    listing_id: listing.listing_id,
                    release_id: listing.release_id,
                    reason: e.to_string(),
                })
            }
        };
        summary.inspected += 1;

        if self.require_vinyl && !record.has_vinyl() {
            summary.not_vinyl += 1;
            log::info!(
                "[{}] not vinyl ({}) | {} - {}",
                position,
                record.release_formats.join(", "),
                listing.artist,
                listing.title
            );
            return None;
        }

        if let Some(genre) = &self.genre {
            let genres = self.genres_for(&record);
            if !genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
                summary.genre_mismatches += 1;
                log::info!(
                    "[{}] not {} ({}) | {} - {}",
                    position,
                    genre,
                    genres.join(", "),
                    listing.artist,
                    listing.title
                );
                return None;
            }
        }

        match self.filter.find_digital(&record) {
            Some(found) => {
                log::info!(
                    "[{}] has digital version ({} matches \"{}\", {} versions) | {} - {}",
                    position,
                    found.descriptor,
                    found.keyword,
                    record.variants.len(),
                    listing.artist,
                    listing.title
                );
            }
            None => {
                log::info!(
                    "[{}] VINYL-ONLY ({} versions) | {} - {} | {}",
                    position,
                    record.variants.len(),
                    listing.artist,
                    listing.title,
                    listing.price
                );
                reporter.push(listing);
            }
        }
        None
    }

    /// Genres of the master when the release has one, else the release's own.
    ///
    /// A failed master lookup falls back to the release's genres.
    fn genres_for(&self, record: &ReleaseRecord) -> Vec<String> {
        let Some(master_id) = record.master_id else {
            return record.genres.clone();
        };
        match self.client.master_genres(master_id) {
            Ok(genres) if !genres.is_empty() => genres,
            Ok(_) => record.genres.clone(),
            Err(e) => {
                log::warn!(
                    "Could not fetch master {} genres, using release {}: {}",
                    master_id,
                    record.release_id,
                    e
                );
                record.genres.clone()
            }
        }
    }

    /// Parse `seller_url`, run the finder and write the report to `out`.
    ///
    /// Nothing is written to `out` unless the whole run succeeds.
    pub fn report_to<W: Write>(&self, seller_url: &str, out: &mut W) -> Result<RunSummary> {
        let query = parse_seller_url(seller_url)?;
        let mut reporter = Reporter::new();
        let summary = self.run(&query, &mut reporter)?;

        out.write_all(reporter.format_report().as_bytes())?;
        out.flush()?;
        Ok(summary)
    }
}
