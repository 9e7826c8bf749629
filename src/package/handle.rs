//! A single named package and its build history on disk.

use anyhow::Result;
use log::{debug, warn};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::PackageError;
use crate::runtime::Runtime;

use super::Repository;

/// A named package inside a repository.
///
/// Builds live under `<location>/packages/<name>/builds/<version>/`. Nothing is
/// cached: every query reads the filesystem again, so results are snapshots.
///
/// Packages compare by name only. Two packages with the same name are equal
/// even when they come from different repositories.
pub struct Package<'a, R: Runtime> {
    runtime: &'a R,
    name: String,
    location: PathBuf,
}

impl<'a, R: Runtime> Package<'a, R> {
    /// Create a handle for `name` in `repository`.
    ///
    /// Neither the name nor the repository location is validated here; bad
    /// input shows up as an error from the first filesystem operation.
    pub fn new(name: impl Into<String>, repository: &Repository<'a, R>) -> Self {
        Self {
            runtime: repository.runtime(),
            name: name.into(),
            location: repository.location().to_path_buf(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the repository this package was resolved against.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Returns: `<location>/packages/<name>`
    pub fn package_dir(&self) -> PathBuf {
        self.location.join("packages").join(&self.name)
    }

    /// Returns: `<location>/packages/<name>/builds`
    pub fn builds_dir(&self) -> PathBuf {
        self.package_dir().join("builds")
    }

    /// Returns: `<location>/packages/<name>/builds/<version>`
    pub fn build_dir(&self, version: &str) -> PathBuf {
        self.builds_dir().join(version)
    }

    /// List build versions, newest first.
    ///
    /// Entries starting with `.` are skipped. Ordering is plain reverse string
    /// order, so `"9"` comes before `"10"`.
    ///
    /// Fails if the builds directory is missing or unreadable.
    #[tracing::instrument(skip(self), fields(package = %self.name))]
    pub fn build_versions(&self) -> Result<Vec<String>> {
        let builds_dir = self.builds_dir();

        let mut versions = Vec::new();
        for entry in self.runtime.read_dir(&builds_dir)? {
            match entry.file_name().and_then(|n| n.to_str()) {
                Some(name) if name.starts_with('.') => {}
                Some(name) => versions.push(name.to_string()),
                None => warn!("Skipping build entry with non UTF-8 name: {:?}", entry),
            }
        }

        versions.sort_unstable_by(|a, b| b.cmp(a));
        Ok(versions)
    }

    /// Check whether `version` exists as a build directory.
    ///
    /// A missing build is `Ok(false)`. Only stat failures other than "not
    /// found" are returned as errors.
    pub fn build_exists(&self, version: &str) -> Result<bool> {
        self.runtime.dir_exists(&self.build_dir(version))
    }

    /// Recursively delete the build directory for `version`.
    ///
    /// Returns [`PackageError::BuildNotFound`] without touching the filesystem
    /// if the build does not exist. The existence check and the deletion are
    /// separate steps: a build removed by someone else in between surfaces as
    /// an I/O error from the deletion.
    #[tracing::instrument(skip(self), fields(package = %self.name))]
    pub fn remove_build(&self, version: &str) -> Result<()> {
        if !self.build_exists(version)? {
            return Err(PackageError::BuildNotFound {
                package: self.name.clone(),
                version: version.to_string(),
            }
            .into());
        }

        let build_dir = self.build_dir(version);
        debug!("Removing build directory {:?}", build_dir);
        self.runtime.remove_dir_all(&build_dir)
    }
}

impl<R: Runtime> fmt::Debug for Package<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish()
    }
}

impl<R: Runtime> PartialEq for Package<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R: Runtime> Eq for Package<'_, R> {}

impl<R: Runtime> PartialOrd for Package<'_, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Runtime> Ord for Package<'_, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
