//! Routes command
//!
//! Usage: foxden routes [--json]

use clap::Args;

use foxden_engine::SiteEngine;

#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute routes command
pub fn execute(args: RoutesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let engine = SiteEngine::default();
    let overview = engine.routes_overview();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    for row in overview {
        println!("{:<12} {:<10} {}", row.path, row.view, row.title);
    }

    Ok(())
}
