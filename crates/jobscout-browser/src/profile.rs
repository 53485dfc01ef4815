use crate::Result;
use std::path::Path;
use tempfile::TempDir;

/// Throwaway Chrome user-data directory, removed when dropped
pub struct ProfileDir {
    dir: TempDir,
}

impl ProfileDir {
    pub fn temporary() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("jobscout-profile-")
            .tempdir()?;

        tracing::debug!("Created temporary profile at {}", dir.path().display());

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
