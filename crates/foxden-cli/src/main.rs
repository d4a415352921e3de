//! Foxden CLI
//!
//! Command-line driver for the «Лисья Нора» site kernel

use clap::{Parser, Subcommand};
use foxden_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "foxden")]
#[command(about = "Foxden - Restaurant site kernel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render operations (single page or the whole site to HTML)
    Render(commands::render::RenderArgs),
    /// List the route table
    Routes(commands::routes::RoutesArgs),
    /// Replay a navigation sequence through the transition machine
    Walk(commands::walk::WalkArgs),
    /// Write a static snapshot with a digest manifest
    Snapshot(commands::snapshot::SnapshotArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Routes(args) => commands::routes::execute(args),
        Commands::Walk(args) => commands::walk::execute(args),
        Commands::Snapshot(args) => commands::snapshot::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
