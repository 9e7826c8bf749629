pub mod commands;
pub mod error;
pub mod package;
pub mod runtime;

pub use error::PackageError;
pub use package::{Package, Repository};
