use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

use crate::runtime::Runtime;

use super::config::Config;

#[derive(Debug, Serialize)]
struct BuildHistory<'a> {
    package: &'a str,
    builds: &'a [String],
}

/// Show the build history of a package, newest first
#[tracing::instrument(skip(config))]
pub fn builds<R: Runtime>(config: &Config<R>, name: &str, json: bool) -> Result<()> {
    let repo = config.repository();
    let package = repo.package(name);

    let versions = package
        .build_versions()
        .with_context(|| format!("Failed to list builds of package {}", name))?;
    debug!("Found {} build(s) for {}", versions.len(), name);

    if json {
        let history = BuildHistory {
            package: package.name(),
            builds: &versions,
        };
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if versions.is_empty() {
        println!("No builds for package {}.", name);
        return Ok(());
    }

    for version in versions {
        println!("{}", version);
    }

    Ok(())
}
