//! Release lookup: one release plus every version of its master

use super::models::{
    MasterJson, ReleaseJson, ReleaseRecord, VariantFormat, VersionJson, VersionsResponse,
};
use super::DiscogsClient;
use crate::error::Result;

impl DiscogsClient {
    /// Fetch a release and the formats of all its versions.
    ///
    /// Releases that belong to a master are expanded to every version of that
    /// master; a standalone release contributes its own format entries.
    pub fn inspect_release(&self, release_id: u64) -> Result<ReleaseRecord> {
        let release: ReleaseJson = self.get_json(&format!("/releases/{release_id}"), &[])?;
        let master_id = release.master_id.filter(|&id| id != 0);
        let release_formats = release.formats.iter().map(|f| f.name.clone()).collect();

        let variants = match master_id {
            Some(master_id) => self
                .master_versions(master_id)?
                .into_iter()
                .map(VariantFormat::from)
                .collect(),
            None => release.formats.into_iter().map(VariantFormat::from).collect(),
        };

        Ok(ReleaseRecord {
            release_id: release.id,
            master_id,
            genres: release.genres,
            release_formats,
            variants,
        })
    }

    /// Genres of a master release
    pub fn master_genres(&self, master_id: u64) -> Result<Vec<String>> {
        let master: MasterJson = self.get_json(&format!("/masters/{master_id}"), &[])?;
        Ok(master.genres)
    }

    fn master_versions(&self, master_id: u64) -> Result<Vec<VersionJson>> {
        let path = format!("/masters/{master_id}/versions");
        let mut versions = Vec::new();
        let mut page = 1;

        loop {
            let params = [
                ("page".to_string(), page.to_string()),
                ("per_page".to_string(), self.per_page.to_string()),
            ];
            let response: VersionsResponse = self.get_json(&path, &params)?;
            if response.versions.is_empty() {
                break;
            }
            versions.extend(response.versions);

            if !response.pagination.has_more(page) {
                break;
            }
            page += 1;
        }

        log::debug!("Master {} has {} versions", master_id, versions.len());
        Ok(versions)
    }
}
