//! Snapshot command
//!
//! Usage: foxden snapshot [--output-dir <DIR>]

use clap::Args;
use std::path::PathBuf;

use foxden_engine::commands::snapshot;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Output directory for pages and manifest.json
    #[arg(short, long, default_value = "site-snapshot")]
    pub output_dir: PathBuf,

    /// Site configuration TOML (default: built-in production values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute snapshot command
pub fn execute(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config)?;

    let manifest = snapshot::write_snapshot(&config, &args.output_dir)?;

    println!(
        "✓ Snapshot written to {} ({} pages, site digest {})",
        args.output_dir.display(),
        manifest.pages.len(),
        &manifest.site_digest[..12]
    );

    Ok(())
}
