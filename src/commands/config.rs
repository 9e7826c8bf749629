use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::package::Repository;
use crate::runtime::Runtime;

use super::paths::default_location;

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub location: PathBuf,
}

impl<R: Runtime> Config<R> {
    /// Resolve the repository location. An explicit location (from `--location`
    /// or `PKGREPO_LOCATION`) wins over the default.
    pub fn new(runtime: R, location: Option<PathBuf>) -> Result<Self> {
        let location = match location {
            Some(path) => path,
            None => default_location(&runtime)?,
        };
        debug!("Using repository location: {:?}", location);

        Ok(Self { runtime, location })
    }

    pub fn repository(&self) -> Repository<'_, R> {
        Repository::new(&self.runtime, &self.location)
    }
}
