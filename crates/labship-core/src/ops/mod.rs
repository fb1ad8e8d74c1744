pub mod package_ops;
pub mod store;

pub use store::PackageStore;
