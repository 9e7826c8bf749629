//! Package repository rooted at a directory on disk.

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::Package;

/// A repository of packages stored under a root location.
///
/// Directory structure: `<location>/packages/<name>/builds/<version>/`
pub struct Repository<'a, R: Runtime> {
    runtime: &'a R,
    location: PathBuf,
}

impl<'a, R: Runtime> Repository<'a, R> {
    /// Create a new repository with the given runtime and root location.
    pub fn new(runtime: &'a R, location: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub(crate) fn runtime(&self) -> &'a R {
        self.runtime
    }

    /// Returns: `<location>/packages`
    pub fn packages_dir(&self) -> PathBuf {
        self.location.join("packages")
    }

    /// Get a handle for the package called `name`. The package need not exist.
    pub fn package(&self, name: impl Into<String>) -> Package<'a, R> {
        Package::new(name, self)
    }

    /// List all packages, sorted by name.
    ///
    /// Only directories under `packages/` count; entries starting with `.` are
    /// skipped. Fails if the packages directory is missing or unreadable.
    #[tracing::instrument(skip(self))]
    pub fn list_packages(&self) -> Result<Vec<Package<'a, R>>> {
        let packages_dir = self.packages_dir();

        let mut packages = Vec::new();
        for entry in self.runtime.read_dir(&packages_dir)? {
            let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
                debug!("Skipping package entry with non UTF-8 name: {:?}", entry);
                continue;
            };
            if name.starts_with('.') || !self.runtime.is_dir(&entry) {
                continue;
            }
            packages.push(self.package(name));
        }

        packages.sort();
        debug!("Found {} package(s) in {:?}", packages.len(), packages_dir);
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use mockall::predicate::eq;
    use std::fs;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_packages_dir() {
        let runtime = MockRuntime::new();
        let repo = Repository::new(&runtime, PathBuf::from("/srv/repo"));

        assert_eq!(repo.location(), Path::new("/srv/repo"));
        assert_eq!(repo.packages_dir(), PathBuf::from("/srv/repo/packages"));
    }

    #[test]
    fn test_package_handle_resolves_against_location() {
        let runtime = MockRuntime::new();
        let repo = Repository::new(&runtime, "relative/repo");

        let package = repo.package("hello");
        assert_eq!(package.location(), Path::new("relative/repo"));
        assert_eq!(
            package.builds_dir(),
            PathBuf::from("relative/repo/packages/hello/builds")
        );
    }

    #[test]
    fn test_list_packages_sorted() {
        let mut runtime = MockRuntime::new();
        let packages_dir = PathBuf::from("/srv/repo/packages");

        runtime
            .expect_read_dir()
            .with(eq(packages_dir.clone()))
            .returning(|p| {
                Ok(vec![
                    p.join("zlib"),
                    p.join(".cache"),
                    p.join("bash"),
                    p.join("README"),
                    p.join("curl"),
                ])
            });

        // README is a plain file
        runtime
            .expect_is_dir()
            .returning(|p| !p.ends_with("README"));

        let repo = Repository::new(&runtime, "/srv/repo");
        let packages = repo.list_packages().unwrap();

        let names: Vec<_> = packages.iter().map(Package::name).collect();
        assert_eq!(names, vec!["bash", "curl", "zlib"]);
    }

    #[test]
    fn test_list_packages_on_disk() {
        let dir = tempdir().unwrap();
        for name in ["nginx", "apache", ".trash"] {
            fs::create_dir_all(dir.path().join("packages").join(name).join("builds")).unwrap();
        }

        let runtime = RealRuntime;
        let repo = Repository::new(&runtime, dir.path());
        let packages = repo.list_packages().unwrap();

        let names: Vec<_> = packages.iter().map(Package::name).collect();
        assert_eq!(names, vec!["apache", "nginx"]);
    }

    #[test]
    fn test_list_packages_missing_dir_is_io_error() {
        let dir = tempdir().unwrap();
        let runtime = RealRuntime;
        let repo = Repository::new(&runtime, dir.path());

        let err = repo.list_packages().unwrap_err();
        assert_eq!(
            err.downcast_ref::<std::io::Error>().unwrap().kind(),
            ErrorKind::NotFound
        );
    }
}
