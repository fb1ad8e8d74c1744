//! LabShip CLI
//!
//! Runs shipment contract invocations against a local state file

use clap::{Parser, Subcommand};
use labship_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "labship")]
#[command(about = "LabShip - supply-chain shipment contract", long_about = None)]
struct Cli {
    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one contract invocation
    Invoke(commands::invoke::InvokeArgs),
    /// Instantiate the contract and print its version
    Init(commands::init::InitArgs),
    /// Print the effective configuration
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Invoke(args) => commands::invoke::execute(args),
        Commands::Init(args) => commands::init::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
