//! LabShip Core - supply-chain shipment contract
//!
//! Transaction logic for a package moving through a fixed custody chain
//! (supplier -> carrier -> consumer) on a permissioned ledger:
//! - Command dispatch over a closed command table with typed arguments
//! - Organization/role access control through asserted identity claims
//! - Package validation, persistence and status updates
//! - Injected lifecycle policies (status transitions, existing packages)
//! - Structured logging facility and TOML configuration
//!
//! The ledger and the identity infrastructure are consumed through the
//! narrow traits in [`host`]; an in-memory implementation is provided for
//! tests and local runs.

pub mod access_control;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod host;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod response;
pub mod rules;

// Re-export commonly used types
pub use access_control::{check_authorization, AccessDecision, AccessMatrix, DenyReason};
pub use commands::{Command, CommandKind};
pub use config::{CommandAccess, ContractConfig};
pub use dispatch::Dispatcher;
pub use errors::{ExError, ExErrorKind, LabshipError, Result};
pub use model::{Package, PackageStatus, PackageStatusView};
pub use ops::PackageStore;
pub use policy::{
    ExistingPackagePolicy, NoopStatusTransitionHook, SequentialStatusTransitionHook,
    StatusTransitionHook, TransitionMode,
};
pub use response::{MutationReceipt, Response};
