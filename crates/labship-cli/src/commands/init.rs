//! Contract instantiation command

use std::path::PathBuf;

use clap::Args;
use labship_core::host::MemoryLedger;
use labship_core::Dispatcher;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Contract configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = Dispatcher::new(super::load_config(args.config.as_deref())?);
    let mut ledger = MemoryLedger::new();
    ledger.begin(["init"]);

    let response = dispatcher.init(&mut ledger);
    if !response.is_success() {
        return Err(response.message.into());
    }

    println!("{}", response.payload_str());
    Ok(())
}
