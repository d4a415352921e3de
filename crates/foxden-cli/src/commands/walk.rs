//! Walk command
//!
//! Replays a navigation sequence against the transition machine and
//! prints what happened at each step. Each in-flight handoff is
//! completed before the next path is fed in, so the trace shows the
//! full started → entered cycle per navigation.
//!
//! Usage: foxden walk /menu /bbq /contacts [--json]

use clap::Args;
use std::path::PathBuf;

use foxden_core::NavigateOutcome;
use foxden_engine::{NavigationReport, SiteEngine};

#[derive(Debug, Args)]
pub struct WalkArgs {
    /// Paths to navigate through, in order
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Print the collected reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Site configuration TOML (default: built-in production values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute walk command
pub fn execute(args: WalkArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config)?;
    let mut engine = SiteEngine::new(config);

    let mut reports: Vec<NavigationReport> = Vec::with_capacity(args.paths.len());

    for path in &args.paths {
        let report = engine.navigate(path)?;

        if !args.json {
            print_step(&report);
        }

        if !report.completed {
            let entered = engine.exit_complete()?;
            if !args.json {
                println!(
                    "  ✓ entered {} — «{}»",
                    entered.view,
                    engine.head().title()
                );
            }
        }

        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn print_step(report: &NavigationReport) {
    let suffix = if report.redirected {
        " (unmatched, redirected home)"
    } else {
        ""
    };

    match &report.outcome {
        NavigateOutcome::AlreadyCurrent => {
            println!("→ {}: already current{}", report.requested, suffix);
        }
        NavigateOutcome::Started { from, to } => {
            println!(
                "→ {}: started ({} → {}){}",
                report.requested, from.view, to.view, suffix
            );
        }
        NavigateOutcome::Retargeted { outgoing, to } => {
            println!(
                "→ {}: retargeted while {} exits (now → {}){}",
                report.requested, outgoing.view, to.view, suffix
            );
        }
    }
}
