//! Contract invocation command

use std::path::PathBuf;

use clap::Args;
use labship_core::host::{MemoryLedger, StaticIdentity};
use labship_core::{CommandKind, Dispatcher};

use super::state;

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// World state file (JSON, base64 values)
    #[arg(long, default_value = ".labship/state.json")]
    pub state: PathBuf,

    /// Caller organization; omitted means the identity cannot be read
    #[arg(long)]
    pub msp_id: Option<String>,

    /// Caller `role` attribute
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub caller_id: Option<String>,

    /// Extra certificate attribute, `name=value`
    #[arg(long = "attr", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,

    /// Contract configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Function name followed by its arguments
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl InvokeArgs {
    fn identity(&self) -> StaticIdentity {
        let mut identity = match &self.msp_id {
            Some(msp_id) => StaticIdentity::new(msp_id.as_str()),
            None => StaticIdentity::anonymous(),
        };
        if let Some(caller_id) = &self.caller_id {
            identity = identity.with_id(caller_id.as_str());
        }
        for (name, value) in &self.attributes {
            identity = identity.with_attribute(name.as_str(), value.as_str());
        }
        if let Some(role) = &self.role {
            identity = identity.with_role(role.as_str());
        }
        identity
    }
}

/// Whether the named function writes world state
fn is_mutating(args: &[String]) -> bool {
    args.first()
        .and_then(|name| CommandKind::lookup(name))
        .is_some_and(|kind| kind.spec().mutating)
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

pub fn execute(args: InvokeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = Dispatcher::new(super::load_config(args.config.as_deref())?);
    let identity = args.identity();

    let mut ledger = MemoryLedger::from_state(state::load(&args.state)?);
    ledger.begin(&args.args);

    let response = dispatcher.invoke(&mut ledger, &identity);
    if !response.is_success() {
        return Err(response.message.into());
    }

    if is_mutating(&args.args) {
        state::save(&args.state, ledger.state())?;
    }

    println!("{}", response.payload_str());
    Ok(())
}
