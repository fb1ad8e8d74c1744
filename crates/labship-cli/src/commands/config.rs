//! Effective configuration command

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Contract configuration (TOML); defaults apply to absent sections
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
