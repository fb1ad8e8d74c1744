//! Contract configuration
//!
//! The built-in defaults reproduce the shipment workflow: suppliers of org1
//! order, carriers of org2 ship, consumers of org1 acknowledge, and all three
//! may read the status. A TOML file may override any section; absent
//! sections keep their defaults.
//!
//! ```toml
//! version = "1.2.0"
//! on_existing_package = "reject"
//! transitions = "sequential"
//!
//! [access.ship]
//! org2 = ["carrier", "dispatcher"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::access_control::AccessMatrix;
use crate::commands::CommandKind;
use crate::errors::{LabshipError, Result};
use crate::policy::{ExistingPackagePolicy, TransitionMode};

/// Authorization matrix of every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandAccess {
    pub order_shipment: AccessMatrix,
    pub ship: AccessMatrix,
    pub acknowledgement: AccessMatrix,
    pub get_package_status: AccessMatrix,
}

impl CommandAccess {
    pub fn matrix_for(&self, kind: CommandKind) -> &AccessMatrix {
        match kind {
            CommandKind::OrderShipment => &self.order_shipment,
            CommandKind::Ship => &self.ship,
            CommandKind::Acknowledgement => &self.acknowledgement,
            CommandKind::GetPackageStatus => &self.get_package_status,
        }
    }
}

impl Default for CommandAccess {
    fn default() -> Self {
        Self {
            order_shipment: AccessMatrix::new().allow("org1", ["supplier"]),
            ship: AccessMatrix::new().allow("org2", ["carrier"]),
            acknowledgement: AccessMatrix::new().allow("org1", ["consumer"]),
            get_package_status: AccessMatrix::new()
                .allow("org1", ["supplier", "consumer"])
                .allow("org2", ["carrier"]),
        }
    }
}

/// Top-level contract configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    /// Version string returned by `init`
    pub version: String,
    pub on_existing_package: ExistingPackagePolicy,
    pub transitions: TransitionMode,
    pub access: CommandAccess,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            on_existing_package: ExistingPackagePolicy::default(),
            transitions: TransitionMode::default(),
            access: CommandAccess::default(),
        }
    }
}

impl ContractConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    /// `Config` if the document is not valid TOML, or has unknown keys or values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LabshipError::Config {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// `Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| LabshipError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&source)
    }

    /// Render as TOML
    ///
    /// # Errors
    /// `Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| LabshipError::Config {
            reason: e.to_string(),
        })
    }
}
