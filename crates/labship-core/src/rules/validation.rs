use crate::errors::{LabshipError, Result};
use crate::model::Package;

/// A required package field and how to read it
struct RequiredField {
    name: &'static str,
    value: fn(&Package) -> &str,
}

/// Fields that must be non-empty before a package is ordered
///
/// Extend this table to require more fields; every missing entry is reported
/// in the same error.
const REQUIRED_FIELDS: &[RequiredField] = &[RequiredField {
    name: "Destination",
    value: destination,
}];

fn destination(package: &Package) -> &str {
    &package.destination
}

/// Names of required fields that are empty on `package`, in table order
pub fn missing_fields(package: &Package) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| (field.value)(package).is_empty())
        .map(|field| field.name.to_string())
        .collect()
}

/// Validate an incoming package before creation
///
/// # Errors
/// `MissingFields` listing every missing or empty required field.
pub fn validate_package(package: &Package) -> Result<()> {
    let fields = missing_fields(package);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(LabshipError::MissingFields { fields })
    }
}
