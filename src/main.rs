use clap::{Parser, Subcommand};
use puttforge::config::GlobalParams;
use puttforge::PuttForgeError;
use std::process;
use tracing::{debug, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Strokes-gained putting tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalParams,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a practice round and score your putts on it.
    Simulate(cmd::simulate::SimulateArgs),
    /// Score a real round from an on-course card.
    Oncourse(cmd::oncourse::OnCourseArgs),
    /// Show saved sessions, averages and trends.
    History(cmd::history::HistoryArgs),
    /// Delete all saved sessions.
    Clear(cmd::clear::ClearArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.global.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("CLI: {:?}", cli);

    let outcome = match cli.command {
        Commands::Simulate(args) => cmd::simulate::run(args, &cli.global),
        Commands::Oncourse(args) => cmd::oncourse::run(args, &cli.global),
        Commands::History(args) => cmd::history::run(args, &cli.global),
        Commands::Clear(args) => cmd::clear::run(args, &cli.global),
    };

    if let Err(e) = outcome {
        match e {
            PuttForgeError::IncompleteInput { .. } => {
                eprintln!("⚠️  {}", e);
                process::exit(2);
            }
            _ => {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        }
    }
}
