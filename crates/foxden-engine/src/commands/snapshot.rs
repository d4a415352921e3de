//! Static site snapshot with digest manifest.
//!
//! Renders every route to a standalone HTML file and records a
//! `manifest.json` with per-page SHA256 digests plus a site digest over
//! the ordered page digests. The site digest excludes the timestamp, so
//! two snapshots of the same configuration always agree on it.

use std::path::Path;

use foxden_core::render;
use foxden_core::{Result, SiteConfig};
use sha2::{Digest, Sha256};

use serde::{Deserialize, Serialize};

/// Manifest schema version
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// One rendered page in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Route path the page was rendered for
    pub path: String,
    /// View id slug
    pub view: String,
    /// File name the page was written to
    pub file: String,
    /// Title the page publishes
    pub title: String,
    /// Hex-encoded SHA256 digest of the page HTML
    pub digest: String,
}

/// Snapshot manifest schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    /// Manifest schema version (currently 1)
    pub manifest_schema_version: u32,

    /// RFC3339 timestamp of snapshot creation
    pub generated_at: String,

    /// Site name the pages were rendered under
    pub site_name: String,

    /// Ordered page entries, one per route
    pub pages: Vec<PageEntry>,

    /// Digest over the ordered page digests; excludes `generated_at`,
    /// so identical configurations produce identical site digests
    pub site_digest: String,
}

/// Compute the hex SHA256 digest of one rendered page
pub fn compute_page_digest(html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(html.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the site digest over ordered page digests
///
/// # Errors
///
/// Returns `Serialization` if the digest list cannot be serialized.
pub fn compute_site_digest(page_digests: &[String]) -> Result<String> {
    let canonical = serde_json::to_string(page_digests)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Build the manifest for a configuration without touching the disk
///
/// # Errors
///
/// Returns `Serialization` if digest computation fails.
pub fn build_manifest(config: &SiteConfig) -> Result<SnapshotManifest> {
    let table = foxden_core::RouteTable::site_default();

    let mut pages = Vec::with_capacity(table.routes().len());
    for route in table.routes() {
        let html = render::render_page(route.view, config);
        let metadata = render::view_metadata(route.view);
        pages.push(PageEntry {
            path: route.path.as_str().to_string(),
            view: route.view.to_string(),
            file: format!("{}.html", route.view.slug()),
            title: metadata.title,
            digest: compute_page_digest(&html),
        });
    }

    let digests: Vec<String> = pages.iter().map(|p| p.digest.clone()).collect();
    let site_digest = compute_site_digest(&digests)?;

    Ok(SnapshotManifest {
        manifest_schema_version: MANIFEST_SCHEMA_VERSION,
        generated_at: chrono::Utc::now().to_rfc3339(),
        site_name: config.brand.clone(),
        pages,
        site_digest,
    })
}

/// Render every route into `out_dir` and write `manifest.json`
///
/// # Errors
///
/// Returns `Io` if the directory or a file cannot be written, or
/// `Serialization` if the manifest cannot be encoded.
pub fn write_snapshot(config: &SiteConfig, out_dir: &Path) -> Result<SnapshotManifest> {
    std::fs::create_dir_all(out_dir)?;

    let table = foxden_core::RouteTable::site_default();
    let manifest = build_manifest(config)?;

    for (route, entry) in table.routes().iter().zip(&manifest.pages) {
        let html = render::render_page(route.view, config);
        std::fs::write(out_dir.join(&entry.file), html)?;
    }

    let encoded = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(out_dir.join("manifest.json"), encoded)?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_covers_every_route() {
        let manifest = build_manifest(&SiteConfig::default()).expect("manifest should build");

        assert_eq!(manifest.manifest_schema_version, MANIFEST_SCHEMA_VERSION);
        assert_eq!(manifest.pages.len(), 5);
        assert_eq!(manifest.pages[0].file, "home.html");
        assert_eq!(manifest.pages[0].path, "/");
    }

    #[test]
    fn test_site_digest_is_deterministic() {
        let config = SiteConfig::default();
        let first = build_manifest(&config).unwrap();
        let second = build_manifest(&config).unwrap();

        // Timestamps differ; digests must not
        assert_eq!(first.site_digest, second.site_digest);
        for (a, b) in first.pages.iter().zip(&second.pages) {
            assert_eq!(a.digest, b.digest);
        }
    }

    #[test]
    fn test_site_digest_tracks_content() {
        let mut config = SiteConfig::default();
        let original = build_manifest(&config).unwrap();

        config.brand = "Другая Нора".to_string();
        let changed = build_manifest(&config).unwrap();

        assert_ne!(original.site_digest, changed.site_digest);
    }

    #[test]
    fn test_page_digest_is_sha256_hex() {
        let digest = compute_page_digest("<html></html>");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
