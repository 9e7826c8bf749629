//! Domain error types.
//!
//! Filesystem failures are not listed here: they travel as [`anyhow::Error`]
//! values wrapping the original [`std::io::Error`], with the offending path
//! attached as context. Use `err.downcast_ref::<std::io::Error>()` to inspect
//! the kind and `err.downcast_ref::<PackageError>()` for the variants below.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PackageError {
    /// The requested build directory does not exist for the package.
    #[error("Build {version} of package {package} not found")]
    BuildNotFound { package: String, version: String },
}
