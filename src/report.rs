//! Final report formatting

use crate::discogs::Listing;

/// A listing whose release has no digital version
#[derive(Debug, Clone, PartialEq)]
pub struct VinylOnlyResult {
    pub listing: Listing,
}

/// Collects results in discovery order and renders the stdout report
#[derive(Debug, Default)]
pub struct Reporter {
    results: Vec<VinylOnlyResult>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listing: Listing) {
        self.results.push(VinylOnlyResult { listing });
    }

    pub fn results(&self) -> &[VinylOnlyResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// One block per result, then the total count line
    pub fn format_report(&self) -> String {
        let mut output = String::new();

        for (i, result) in self.results.iter().enumerate() {
            let listing = &result.listing;
            output.push_str(&format!("[{}]\n", i + 1));
            output.push_str(&format!("Title:     {}\n", listing.title));
            output.push_str(&format!("Artist:    {}\n", listing.artist));
            output.push_str(&format!("Price:     {}\n", listing.price));
            output.push_str(&format!("Condition: {}\n", listing.condition));
            output.push_str(&format!("URL:       {}\n", listing.listing_url));
            output.push('\n');
        }

        output.push_str(&format!("Total vinyl-only listings: {}\n", self.results.len()));
        output
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
