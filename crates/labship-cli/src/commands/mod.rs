pub mod config;
pub mod init;
pub mod invoke;
pub mod state;

use std::path::Path;

use labship_core::{ContractConfig, Result};

/// Configuration from `path`, or the built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<ContractConfig> {
    match path {
        Some(path) => ContractConfig::load(path),
        None => Ok(ContractConfig::default()),
    }
}
