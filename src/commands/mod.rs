//! Command implementations behind the `pkgrepo` binary.

mod builds;
pub mod config;
mod list;
mod paths;
mod remove;

pub use builds::builds;
pub use list::{PackageSummary, list, package_summaries};
pub use paths::default_location;
pub use remove::remove;
