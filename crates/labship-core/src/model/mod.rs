pub mod package;

pub use package::{Package, PackageStatus, PackageStatusView};
