pub mod render;
pub mod routes;
pub mod snapshot;
pub mod walk;

use std::path::PathBuf;

use foxden_core::SiteConfig;

/// Load the site configuration, falling back to the production defaults
pub(crate) fn load_config(
    path: Option<PathBuf>,
) -> Result<SiteConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(SiteConfig::load(&path)?),
        None => Ok(SiteConfig::default()),
    }
}
