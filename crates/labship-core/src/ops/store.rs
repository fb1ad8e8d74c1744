use crate::errors::{LabshipError, Result};
use crate::host::LedgerStub;
use crate::model::Package;

/// Package persistence over the host key/value store
///
/// Packages are stored as JSON under their `package_id`. This adapter is the
/// only code that touches world state: one read per load, one write per save.
pub struct PackageStore<'a> {
    stub: &'a mut dyn LedgerStub,
}

impl<'a> PackageStore<'a> {
    pub fn new(stub: &'a mut dyn LedgerStub) -> Self {
        Self { stub }
    }

    /// Load the package stored under `package_id`
    ///
    /// # Errors
    /// * `LedgerRead` - the host failed to read
    /// * `PackageNotFound` - nothing stored under the key
    /// * `CorruptPackage` - stored bytes are not a package document
    pub fn load(&self, package_id: &str) -> Result<Package> {
        let bytes = self
            .stub
            .get_state(package_id)
            .map_err(|e| LabshipError::LedgerRead {
                package_id: package_id.to_string(),
                reason: e.to_string(),
            })?
            .ok_or_else(|| LabshipError::PackageNotFound {
                package_id: package_id.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| LabshipError::CorruptPackage {
            package_id: package_id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether anything is stored under `package_id`
    ///
    /// # Errors
    /// `LedgerRead` if the host failed to read.
    pub fn exists(&self, package_id: &str) -> Result<bool> {
        self.stub
            .get_state(package_id)
            .map(|bytes| bytes.is_some())
            .map_err(|e| LabshipError::LedgerRead {
                package_id: package_id.to_string(),
                reason: e.to_string(),
            })
    }

    /// Write `package` under its `package_id`
    ///
    /// # Errors
    /// * `EncodeFailed` - the package could not be serialized
    /// * `LedgerWrite` - the host rejected the write
    pub fn save(&mut self, package: &Package) -> Result<()> {
        let bytes = serde_json::to_vec(package).map_err(|e| LabshipError::EncodeFailed {
            reason: e.to_string(),
        })?;

        self.stub
            .put_state(&package.package_id, bytes)
            .map_err(|e| LabshipError::LedgerWrite {
                package_id: package.package_id.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryLedger;

    #[test]
    fn test_save_then_load_round_trips() {
        let mut ledger = MemoryLedger::new();
        let pack = Package::new("P1", "Paris")
            .with_description("books")
            .with_status("READY");

        let mut store = PackageStore::new(&mut ledger);
        store.save(&pack).unwrap();
        assert_eq!(store.load("P1").unwrap(), pack);
        assert!(store.exists("P1").unwrap());
    }

    #[test]
    fn test_load_missing_package() {
        let mut ledger = MemoryLedger::new();
        let store = PackageStore::new(&mut ledger);

        assert_eq!(
            store.load("nope"),
            Err(LabshipError::PackageNotFound {
                package_id: "nope".to_string()
            })
        );
        assert!(!store.exists("nope").unwrap());
    }

    #[test]
    fn test_load_corrupt_package() {
        let mut ledger = MemoryLedger::new();
        ledger.insert_raw("P1", b"not json".to_vec());
        let store = PackageStore::new(&mut ledger);

        assert!(matches!(
            store.load("P1"),
            Err(LabshipError::CorruptPackage { package_id, .. }) if package_id == "P1"
        ));
    }

    #[test]
    fn test_save_with_empty_id_is_write_error() {
        let mut ledger = MemoryLedger::new();
        let mut store = PackageStore::new(&mut ledger);

        assert!(matches!(
            store.save(&Package::new("", "Paris")),
            Err(LabshipError::LedgerWrite { .. })
        ));
    }
}
