use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::io::ErrorKind;

use crate::package::{Package, Repository};
use crate::runtime::Runtime;

use super::config::Config;

/// Summary of one package for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub name: String,
    /// Newest build by string order
    pub latest_build: Option<String>,
    pub build_count: usize,
}

/// Summarize every package in the repository, sorted by name.
pub fn package_summaries<R: Runtime>(repo: &Repository<'_, R>) -> Result<Vec<PackageSummary>> {
    repo.list_packages()?
        .iter()
        .map(|package| {
            let builds = builds_or_empty(package)?;
            Ok(PackageSummary {
                name: package.name().to_string(),
                latest_build: builds.first().cloned(),
                build_count: builds.len(),
            })
        })
        .collect()
}

/// A package without a builds directory has no builds yet.
fn builds_or_empty<R: Runtime>(package: &Package<'_, R>) -> Result<Vec<String>> {
    match package.build_versions() {
        Ok(builds) => Ok(builds),
        Err(e)
            if e
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == ErrorKind::NotFound) =>
        {
            debug!("Package {} has no builds directory", package.name());
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// List all packages with their newest build
#[tracing::instrument(skip(config))]
pub fn list<R: Runtime>(config: &Config<R>, json: bool) -> Result<()> {
    let summaries = package_summaries(&config.repository())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    for summary in summaries {
        let latest = summary.latest_build.as_deref().unwrap_or("(no builds)");
        println!("{} {}", summary.name, latest);
    }

    Ok(())
}
