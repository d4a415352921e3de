//! Render command
//!
//! Usage: foxden render page <PATH> [--output <FILE>]
//!        foxden render site --output-dir <DIR>

use clap::{Args, Subcommand};
use std::path::PathBuf;

use foxden_engine::SiteEngine;

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,
}

#[derive(Debug, Subcommand)]
pub enum RenderCommand {
    /// Render a single route to HTML
    Page(RenderPageArgs),
    /// Render every route into a directory
    Site(RenderSiteArgs),
}

#[derive(Debug, Args)]
pub struct RenderPageArgs {
    /// Route path to render (e.g. /menu)
    pub path: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Site configuration TOML (default: built-in production values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderSiteArgs {
    /// Output directory for the rendered pages
    #[arg(short, long, default_value = "site")]
    pub output_dir: PathBuf,

    /// Site configuration TOML (default: built-in production values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RenderCommand::Page(page_args) => execute_render_page(page_args),
        RenderCommand::Site(site_args) => execute_render_site(site_args),
    }
}

/// Execute render page command
fn execute_render_page(args: RenderPageArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config)?;
    let engine = SiteEngine::new(config);

    let html = engine.render_route(&args.path)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, html)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", html);
    }

    Ok(())
}

/// Execute render site command
fn execute_render_site(args: RenderSiteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config)?;
    let engine = SiteEngine::new(config);

    std::fs::create_dir_all(&args.output_dir)?;

    for route in engine.table().routes() {
        let html = engine.render_route(route.path.as_str())?;
        let file = args.output_dir.join(format!("{}.html", route.view.slug()));
        std::fs::write(&file, html)?;
    }

    println!(
        "✓ Rendered {} pages to {}",
        engine.table().routes().len(),
        args.output_dir.display()
    );

    Ok(())
}
