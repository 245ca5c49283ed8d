//! Digital-format detection
//!
//! A release counts as vinyl-only when no descriptor of any of its versions
//! contains a digital keyword. Matching is a case-insensitive substring test,
//! so "CDr", "SACD" and "FLAC, Digital" all count as digital.

use crate::discogs::ReleaseRecord;

/// Keywords marking a digital version. CD is treated as digital.
pub const DEFAULT_DIGITAL_KEYWORDS: &[&str] = &[
    "cd", "mp3", "wav", "flac", "aac", "digital", "file", "download",
];

/// First descriptor of a record that matched a digital keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalMatch<'a> {
    pub descriptor: &'a str,
    pub keyword: &'a str,
}

/// Case-insensitive keyword filter over release variants
#[derive(Debug, Clone)]
pub struct DigitalFormatFilter {
    keywords: Vec<String>,
}

impl Default for DigitalFormatFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITAL_KEYWORDS)
    }
}

impl DigitalFormatFilter {
    /// Blank keywords are dropped, they would match everything.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Keyword contained in `descriptor`, if any
    pub fn matching_keyword(&self, descriptor: &str) -> Option<&str> {
        let descriptor = descriptor.to_lowercase();
        self.keywords
            .iter()
            .find(|k| descriptor.contains(k.as_str()))
            .map(String::as_str)
    }

    /// First digital descriptor across all variants, in variant order
    pub fn find_digital<'a>(&'a self, record: &'a ReleaseRecord) -> Option<DigitalMatch<'a>> {
        record
            .variants
            .iter()
            .flat_map(|variant| variant.descriptors.iter())
            .find_map(|descriptor| {
                self.matching_keyword(descriptor).map(|keyword| DigitalMatch {
                    descriptor: descriptor.as_str(),
                    keyword,
                })
            })
    }

    /// True when no variant has a digital descriptor. A record without
    /// variants is vinyl-only.
    pub fn is_vinyl_only(&self, record: &ReleaseRecord) -> bool {
        self.find_digital(record).is_none()
    }
}

#[cfg(test)]
#[path = "formats_tests.rs"]
mod tests;
