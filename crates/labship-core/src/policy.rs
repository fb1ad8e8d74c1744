//! Lifecycle policies
//!
//! Two decisions are left open by the shipment workflow and are therefore
//! injected rather than hard-coded:
//! - whether a Ship/Acknowledgement status is a legal successor of the
//!   current one ([`StatusTransitionHook`])
//! - whether OrderShipment may replace a package that already exists
//!   ([`ExistingPackagePolicy`])

use serde::{Deserialize, Serialize};

use crate::errors::{LabshipError, Result};
use crate::model::PackageStatus;

/// Status transition hook: allow or deny a status change before any write.
pub trait StatusTransitionHook: Send + Sync {
    /// Check whether `package_id` may move from `current` to `next`.
    ///
    /// # Errors
    ///
    /// Returns `IllegalTransition` or `UnknownStatus` if denied.
    fn check(&self, package_id: &str, current: &str, next: &str) -> Result<()>;
}

/// Always allows; any caller-supplied status is stored as given.
pub struct NoopStatusTransitionHook;

impl StatusTransitionHook for NoopStatusTransitionHook {
    fn check(&self, _: &str, _: &str, _: &str) -> Result<()> {
        Ok(())
    }
}

/// Enforces READY -> SHIPMENT -> SHIPPED -> DELIVERED one step at a time.
pub struct SequentialStatusTransitionHook;

impl StatusTransitionHook for SequentialStatusTransitionHook {
    fn check(&self, package_id: &str, current: &str, next: &str) -> Result<()> {
        let next_status =
            PackageStatus::parse(next).ok_or_else(|| LabshipError::UnknownStatus {
                package_id: package_id.to_string(),
                status: next.to_string(),
            })?;

        let expected = PackageStatus::parse(current).and_then(|s| s.successor());
        if expected == Some(next_status) {
            Ok(())
        } else {
            Err(LabshipError::IllegalTransition {
                package_id: package_id.to_string(),
                current: current.to_string(),
                next: next.to_string(),
            })
        }
    }
}

/// Which transition hook a contract runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    #[default]
    Unchecked,
    Sequential,
}

impl TransitionMode {
    pub fn hook(&self) -> Box<dyn StatusTransitionHook> {
        match self {
            TransitionMode::Unchecked => Box::new(NoopStatusTransitionHook),
            TransitionMode::Sequential => Box::new(SequentialStatusTransitionHook),
        }
    }
}

/// What OrderShipment does when the package id is already stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingPackagePolicy {
    /// Overwrite the stored package (create-or-replace)
    #[default]
    Replace,
    /// Fail with `AlreadyExists`
    Reject,
}
