//! Discogs API payloads and the records the finder works with
//!
//! Wire types mirror the JSON the API returns; deserializing into them is the
//! validation step, so a missing required field fails as a parse error right
//! at the HTTP boundary.

use serde::Deserialize;
use std::collections::BTreeSet;

/// Pagination block shared by all paginated endpoints
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub pages: u32,
}

impl Pagination {
    /// Whether a page after `requested` exists. Uses the requested page, not
    /// the one the server echoes back.
    pub fn has_more(&self, requested: u32) -> bool {
        requested < self.pages
    }
}

/// `GET /users/{username}/inventory`
#[derive(Debug, Deserialize)]
pub(crate) struct InventoryResponse {
    #[serde(default)]
    pub pagination: Pagination,
    pub listings: Vec<ListingJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingJson {
    pub id: u64,
    pub condition: String,
    pub price: PriceJson,
    #[serde(default)]
    pub uri: Option<String>,
    pub release: ListingReleaseJson,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceJson {
    pub value: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingReleaseJson {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// `GET /releases/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseJson {
    pub id: u64,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub formats: Vec<ReleaseFormatJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseFormatJson {
    pub name: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// `GET /masters/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct MasterJson {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// `GET /masters/{id}/versions`
#[derive(Debug, Deserialize)]
pub(crate) struct VersionsResponse {
    #[serde(default)]
    pub pagination: Pagination,
    pub versions: Vec<VersionJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersionJson {
    /// Free text such as "LP, Album, RE" or "File, FLAC"
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub major_formats: Vec<String>,
}

/// One seller listing
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub listing_id: u64,
    pub release_id: u64,
    pub title: String,
    pub artist: String,
    /// Formatted as "<value> <currency>"
    pub price: String,
    pub condition: String,
    pub listing_url: String,
}

impl From<ListingJson> for Listing {
    fn from(json: ListingJson) -> Self {
        let title = json
            .release
            .title
            .or(json.release.description)
            .unwrap_or_else(|| "Unknown".to_string());
        let artist = json
            .release
            .artist
            .unwrap_or_else(|| "Unknown".to_string());
        let price = format!("{:.2} {}", json.price.value, json.price.currency)
            .trim()
            .to_string();
        let listing_url = json
            .uri
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| format!("https://www.discogs.com/sell/item/{}", json.id));

        Self {
            listing_id: json.id,
            release_id: json.release.id,
            title,
            artist,
            price,
            condition: json.condition,
            listing_url,
        }
    }
}

/// Format tokens of one version of a release
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantFormat {
    pub descriptors: BTreeSet<String>,
}

impl VariantFormat {
    /// Build from raw tokens, dropping blank ones
    pub fn new<I, S>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            descriptors: descriptors
                .into_iter()
                .map(Into::into)
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

impl From<ReleaseFormatJson> for VariantFormat {
    fn from(format: ReleaseFormatJson) -> Self {
        VariantFormat::new(
            std::iter::once(format.name)
                .chain(format.descriptions)
                .chain(format.text),
        )
    }
}

impl From<VersionJson> for VariantFormat {
    fn from(version: VersionJson) -> Self {
        VariantFormat::new(version.major_formats.into_iter().chain(version.format))
    }
}

/// A release together with every known version's formats
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseRecord {
    pub release_id: u64,
    pub master_id: Option<u64>,
    pub genres: Vec<String>,
    /// Format names of this release itself, e.g. "Vinyl"
    pub release_formats: Vec<String>,
    pub variants: Vec<VariantFormat>,
}

impl ReleaseRecord {
    /// Whether the release itself (not its other versions) is on vinyl
    pub fn has_vinyl(&self) -> bool {
        self.release_formats
            .iter()
            .any(|name| name.trim().eq_ignore_ascii_case("vinyl"))
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre.trim()))
    }
}
