use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Get the default repository location
#[tracing::instrument(skip(runtime))]
pub fn default_location<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if runtime.is_privileged() {
        Ok(system_location())
    } else {
        let home_dir = runtime
            .home_dir()
            .context("Could not find home directory")?;
        Ok(home_dir.join(".pkgrepo"))
    }
}

#[cfg(target_os = "macos")]
fn system_location() -> PathBuf {
    PathBuf::from("/opt/pkgrepo")
}

#[cfg(target_os = "windows")]
fn system_location() -> PathBuf {
    PathBuf::from(r"C:\ProgramData\pkgrepo")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn system_location() -> PathBuf {
    PathBuf::from("/var/lib/pkgrepo")
}
