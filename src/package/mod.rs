//! Package management module
//!
//! This module provides the repository root and per-package handles used to
//! inspect and prune build history on disk.

mod handle;
mod repository;

pub use handle::Package;
pub use repository::Repository;
