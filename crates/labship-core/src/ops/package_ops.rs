use labship_core_types::schema::{FIELD_PACKAGE_ID, FIELD_STATUS, FIELD_TX_ID};

use super::store::PackageStore;
use crate::errors::{LabshipError, Result};
use crate::model::{Package, PackageStatus, PackageStatusView};
use crate::policy::{ExistingPackagePolicy, StatusTransitionHook};
use crate::response::MutationReceipt;
use crate::rules::validation;

/// Create (or replace) a package with status READY
///
/// The incoming `status` is ignored. Validation and the existing-package
/// policy run before the single write.
///
/// # Arguments
/// * `store` - Package store for this invocation
/// * `package` - Decoded OrderShipment payload
/// * `on_existing` - Behavior when the id is already stored
/// * `tx_id` - Host transaction id, echoed in the receipt
///
/// # Errors
/// * `MissingFields` - required fields are empty
/// * `AlreadyExists` - id is stored and the policy is `Reject`
/// * `LedgerRead` / `EncodeFailed` / `LedgerWrite` - store failures
pub fn order_shipment(
    store: &mut PackageStore<'_>,
    mut package: Package,
    on_existing: ExistingPackagePolicy,
    tx_id: &str,
) -> Result<MutationReceipt> {
    validation::validate_package(&package)?;

    if on_existing == ExistingPackagePolicy::Reject && store.exists(&package.package_id)? {
        return Err(LabshipError::AlreadyExists {
            package_id: package.package_id,
        });
    }

    package.status = PackageStatus::Ready.as_str().to_string();
    store.save(&package)?;

    tracing::info!(
        { FIELD_PACKAGE_ID } = package.package_id.as_str(),
        { FIELD_TX_ID } = tx_id,
        "package ordered"
    );
    Ok(MutationReceipt::new(tx_id))
}

/// Replace the status of an existing package
///
/// Shared by Ship and Acknowledgement, which differ only in who may call
/// them. The transition hook sees the stored status and the requested one.
///
/// # Errors
/// * `PackageNotFound` / `LedgerRead` / `CorruptPackage` - load failures
/// * `IllegalTransition` / `UnknownStatus` - rejected by `transitions`
/// * `EncodeFailed` / `LedgerWrite` - save failures
pub fn update_status(
    store: &mut PackageStore<'_>,
    package_id: &str,
    status: String,
    transitions: &dyn StatusTransitionHook,
    tx_id: &str,
) -> Result<MutationReceipt> {
    let mut package = store.load(package_id)?;
    transitions.check(package_id, &package.status, &status)?;

    let previous = std::mem::replace(&mut package.status, status);
    store.save(&package)?;

    tracing::info!(
        { FIELD_PACKAGE_ID } = package_id,
        from = previous.as_str(),
        { FIELD_STATUS } = package.status.as_str(),
        { FIELD_TX_ID } = tx_id,
        "package status updated"
    );

    Ok(MutationReceipt::new(tx_id))
}

/// Read the id and status of a package
///
/// # Errors
/// Load failures only; nothing is written.
pub fn get_package_status(store: &PackageStore<'_>, package_id: &str) -> Result<PackageStatusView> {
    Ok(store.load(package_id)?.status_view())
}
