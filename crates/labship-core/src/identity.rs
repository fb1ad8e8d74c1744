//! Caller identity claims
//!
//! Thin adapter over the host [`ClientIdentity`]. Roles are only ever checked
//! through the host's assertion primitive; the raw attribute value is read
//! for diagnostics and never compared by the contract.

use crate::errors::{LabshipError, Result};
use crate::host::ClientIdentity;

/// Attribute carrying the caller's role claim
pub const ROLE_ATTRIBUTE: &str = "role";

/// Claims of the invoking caller
pub struct CallerClaims<'a> {
    identity: &'a dyn ClientIdentity,
}

impl<'a> CallerClaims<'a> {
    pub fn new(identity: &'a dyn ClientIdentity) -> Self {
        Self { identity }
    }

    /// Organization (MSP id) of the caller
    ///
    /// # Errors
    /// `IdentityUnavailable` if the host cannot report it.
    pub fn organization(&self) -> Result<String> {
        self.identity
            .msp_id()
            .map_err(|e| LabshipError::IdentityUnavailable {
                reason: e.to_string(),
            })
    }

    /// Caller id, or `None` when the host cannot report it
    pub fn caller_id(&self) -> Option<String> {
        self.identity.id().ok()
    }

    /// Ask the host to prove the caller's role claim equals `role`
    pub fn asserts_role(&self, role: &str) -> bool {
        self.identity
            .assert_attribute_value(ROLE_ATTRIBUTE, role)
            .is_ok()
    }

    /// Role claim as read from the certificate, for log output only
    pub fn role_hint(&self) -> Option<String> {
        self.identity
            .attribute_value(ROLE_ATTRIBUTE)
            .ok()
            .flatten()
    }
}
