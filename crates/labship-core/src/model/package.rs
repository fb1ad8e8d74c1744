use serde::{Deserialize, Deserializer, Serialize};

/// Package - the shipped asset tracked on the ledger
///
/// Serialized with the camelCase field names used on the wire and in the
/// store. Absent and `null` fields decode as empty strings; unknown fields
/// are ignored. Keys are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    /// Ledger key, assigned by the ordering caller
    #[serde(deserialize_with = "null_as_empty")]
    pub package_id: String,

    /// Free text
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,

    /// Current custody status, normally one of [`PackageStatus`]
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,

    /// Delivery destination, required at creation
    #[serde(deserialize_with = "null_as_empty")]
    pub destination: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Package {
    /// Create a package with the given id and destination
    pub fn new(package_id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Read-only projection returned by GetPackageStatus
    pub fn status_view(&self) -> PackageStatusView {
        PackageStatusView {
            package_id: self.package_id.clone(),
            status: self.status.clone(),
        }
    }
}

/// The ordered status domain of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageStatus {
    Ready,
    Shipment,
    Shipped,
    Delivered,
}

impl PackageStatus {
    /// All statuses in custody order
    pub const ALL: [PackageStatus; 4] = [
        PackageStatus::Ready,
        PackageStatus::Shipment,
        PackageStatus::Shipped,
        PackageStatus::Delivered,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Ready => "READY",
            PackageStatus::Shipment => "SHIPMENT",
            PackageStatus::Shipped => "SHIPPED",
            PackageStatus::Delivered => "DELIVERED",
        }
    }

    /// Parse a wire value; matching is exact
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// The status that directly follows this one, if any
    pub fn successor(&self) -> Option<Self> {
        match self {
            PackageStatus::Ready => Some(PackageStatus::Shipment),
            PackageStatus::Shipment => Some(PackageStatus::Shipped),
            PackageStatus::Shipped => Some(PackageStatus::Delivered),
            PackageStatus::Delivered => None,
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{"PackageID": .., "Status": ..}` response of GetPackageStatus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStatusView {
    #[serde(rename = "PackageID")]
    pub package_id: String,
    #[serde(rename = "Status")]
    pub status: String,
}
