use anyhow::Result;
use log::debug;

use crate::package::Package;
use crate::runtime::Runtime;

use super::config::Config;

/// Remove a single build of a package
#[tracing::instrument(skip(config))]
pub fn remove<R: Runtime>(config: &Config<R>, name: &str, version: &str, yes: bool) -> Result<()> {
    let repo = config.repository();
    let package = repo.package(name);
    debug!("Removing build {} of {}", version, name);

    // A missing build skips the prompt; remove_build reports it below
    if !yes && package.build_exists(version)? {
        show_removal_plan(&package, version);
        if !config.runtime.confirm("Proceed with removal?")? {
            println!("Removal cancelled.");
            return Ok(());
        }
    }

    package.remove_build(version)?;
    println!("Removed build {} of {}", version, package.name());

    Ok(())
}

fn show_removal_plan<R: Runtime>(package: &Package<'_, R>, version: &str) {
    println!();
    println!("=== Removal Plan ===");
    println!();
    println!("Package: {}", package.name());
    println!("Build:   {}", version);
    println!();
    println!("Directories to remove:");
    println!("  [DEL] {}", package.build_dir(version).display());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackageError;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_location;
    use mockall::predicate::eq;

    fn build_dir(version: &str) -> std::path::PathBuf {
        test_location().join("packages/hello/builds").join(version)
    }

    #[test]
    fn test_remove_with_yes_skips_prompt() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_dir_exists()
            .with(eq(build_dir("1.0")))
            .times(1)
            .returning(|_| Ok(true));
        runtime.expect_confirm().never();
        runtime
            .expect_remove_dir_all()
            .with(eq(build_dir("1.0")))
            .times(1)
            .returning(|_| Ok(()));

        let config = Config::new(runtime, Some(test_location())).unwrap();
        remove(&config, "hello", "1.0", true).unwrap();
    }

    #[test]
    fn test_remove_confirmed() {
        let mut runtime = MockRuntime::new();
        runtime.expect_dir_exists().returning(|_| Ok(true));
        runtime
            .expect_confirm()
            .with(eq("Proceed with removal?"))
            .times(1)
            .returning(|_| Ok(true));
        runtime
            .expect_remove_dir_all()
            .with(eq(build_dir("1.0")))
            .times(1)
            .returning(|_| Ok(()));

        let config = Config::new(runtime, Some(test_location())).unwrap();
        remove(&config, "hello", "1.0", false).unwrap();
    }

    #[test]
    fn test_remove_cancelled() {
        let mut runtime = MockRuntime::new();
        runtime.expect_dir_exists().returning(|_| Ok(true));
        runtime.expect_confirm().times(1).returning(|_| Ok(false));
        runtime.expect_remove_dir_all().never();

        let config = Config::new(runtime, Some(test_location())).unwrap();
        remove(&config, "hello", "1.0", false).unwrap();
    }

    #[test]
    fn test_remove_missing_build_does_not_prompt() {
        let mut runtime = MockRuntime::new();
        runtime.expect_dir_exists().returning(|_| Ok(false));
        runtime.expect_confirm().never();
        runtime.expect_remove_dir_all().never();

        let config = Config::new(runtime, Some(test_location())).unwrap();
        let err = remove(&config, "hello", "3.0.0", false).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PackageError>(),
            Some(PackageError::BuildNotFound { version, .. }) if version == "3.0.0"
        ));
    }
}
