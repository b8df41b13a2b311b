//! PlayR CLI - bracket management from the command line
//!
//! Commands:
//! - create: build a single-elimination bracket from a roster file
//! - report: record a match result and advance the winner
//! - show: display bracket state, progress and champion

use clap::{Parser, Subcommand};

mod create_cmd;
mod report_cmd;
mod show_cmd;
mod store;

#[derive(Parser)]
#[command(name = "playr")]
#[command(about = "PlayR single-elimination bracket manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a bracket from a roster file
    Create(create_cmd::CreateArgs),
    /// Record a match result and advance the winner
    Report(report_cmd::ReportArgs),
    /// Display bracket state
    Show(show_cmd::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create(args) => create_cmd::run(args),
        Commands::Report(args) => report_cmd::run(args),
        Commands::Show(args) => show_cmd::run(args),
    }
}
