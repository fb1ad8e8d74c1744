//! Organization/role access control
//!
//! An [`AccessMatrix`] maps an organization (MSP id) to the ordered list of
//! role values it may act with. [`check_authorization`] walks that list in
//! order and asks the identity layer to assert each value; the first
//! successful assertion authorizes the caller.

use std::collections::BTreeMap;

use labship_core_types::schema::{FIELD_MSP_ID, FIELD_ROLE};
use serde::{Deserialize, Serialize};

use crate::errors::{LabshipError, Result};
use crate::identity::CallerClaims;

/// Authorization matrix for one operation: organization -> ordered roles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessMatrix {
    entries: BTreeMap<String, Vec<String>>,
}

impl AccessMatrix {
    /// Create an empty matrix (denies everyone)
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `organization` with the given roles, tried in the given order
    ///
    /// Calling this again for the same organization appends to its list.
    pub fn allow<I, S>(mut self, organization: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(organization.into())
            .or_default()
            .extend(roles.into_iter().map(Into::into));
        self
    }

    /// Ordered role list for `organization`, if it is listed
    pub fn roles_for(&self, organization: &str) -> Option<&[String]> {
        self.entries.get(organization).map(Vec::as_slice)
    }

    /// Listed organizations
    pub fn organizations(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a caller was denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    OrganizationNotAuthorized { msp_id: String },
    RoleNotAuthorized { msp_id: String },
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Caller asserted `role`
    Allow { role: String },
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow { .. })
    }

    /// Convert into the matched role or the corresponding error
    ///
    /// # Errors
    /// `OrganizationNotAuthorized` or `RoleNotAuthorized` on deny.
    pub fn into_result(self) -> Result<String> {
        match self {
            AccessDecision::Allow { role } => Ok(role),
            AccessDecision::Deny(DenyReason::OrganizationNotAuthorized { msp_id }) => {
                Err(LabshipError::OrganizationNotAuthorized { msp_id })
            }
            AccessDecision::Deny(DenyReason::RoleNotAuthorized { msp_id }) => {
                Err(LabshipError::RoleNotAuthorized { msp_id })
            }
        }
    }
}

/// Evaluate `matrix` against the caller's claims
///
/// # Errors
/// `IdentityUnavailable` if the caller's organization cannot be read. A
/// denial is not an error here; see [`AccessDecision::into_result`].
pub fn check_authorization(claims: &CallerClaims<'_>, matrix: &AccessMatrix) -> Result<AccessDecision> {
    let msp_id = claims.organization()?;
    tracing::debug!(
        { FIELD_MSP_ID } = msp_id.as_str(),
        caller_id = claims.caller_id().as_deref().unwrap_or(""),
        "checking caller access"
    );

    let Some(roles) = matrix.roles_for(&msp_id) else {
        tracing::warn!({ FIELD_MSP_ID } = msp_id.as_str(), "caller organization is not authorized");
        return Ok(AccessDecision::Deny(DenyReason::OrganizationNotAuthorized {
            msp_id,
        }));
    };

    for (index, role) in roles.iter().enumerate() {
        tracing::debug!(index, { FIELD_ROLE } = role.as_str(), "asserting role");
        if claims.asserts_role(role) {
            return Ok(AccessDecision::Allow { role: role.clone() });
        }
    }

    tracing::warn!(
        { FIELD_MSP_ID } = msp_id.as_str(),
        { FIELD_ROLE } = claims.role_hint().as_deref().unwrap_or("<none>"),
        "caller role is not authorized"
    );
    Ok(AccessDecision::Deny(DenyReason::RoleNotAuthorized { msp_id }))
}

/// [`check_authorization`] folded into a single `Result`
///
/// # Errors
/// Identity or authorization failure.
pub fn authorize(claims: &CallerClaims<'_>, matrix: &AccessMatrix) -> Result<String> {
    check_authorization(claims, matrix)?.into_result()
}
