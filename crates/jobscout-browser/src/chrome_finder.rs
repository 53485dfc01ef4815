use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Executable names looked up on PATH, in order of preference
const PATH_CANDIDATES: &[&str] = &["google-chrome", "chromium", "chromium-browser"];

#[cfg(target_os = "macos")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "linux")]
const INSTALL_LOCATIONS: &[&str] = &["/snap/bin/chromium", "/opt/google/chrome/chrome"];

#[cfg(target_os = "windows")]
const INSTALL_LOCATIONS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const INSTALL_LOCATIONS: &[&str] = &[];

/// Resolves which Chrome binary a search runs
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// An explicit path must be usable as given; otherwise PATH is searched
    /// before the usual install locations.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(path) = &self.custom_path {
            return check_executable(path).map(|()| path.clone());
        }

        PATH_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .or_else(|| {
                INSTALL_LOCATIONS
                    .iter()
                    .map(PathBuf::from)
                    .find(|p| check_executable(p).is_ok())
            })
            .inspect(|p| tracing::debug!("Found Chrome at {}", p.display()))
            .ok_or_else(|| {
                Error::Browser(
                    "Chrome not found. Install Chrome or Chromium, or use --chrome-path."
                        .to_string(),
                )
            })
    }
}

fn check_executable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| Error::Browser(format!("Chrome not found at: {}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    if metadata.is_dir() {
        return Err(Error::Browser(format!(
            "Chrome path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn temp_binary(mode: u32) -> tempfile::NamedTempFile {
        use std::os::unix::fs::PermissionsExt;

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(mode)).unwrap();
        file
    }

    #[cfg(unix)]
    #[test]
    fn test_custom_executable_is_used() {
        let binary = temp_binary(0o755);

        let found = ChromeFinder::new(Some(binary.path().to_path_buf())).find().unwrap();
        assert_eq!(found, binary.path());
    }

    #[test]
    fn test_missing_custom_path_is_reported() {
        let err = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome")))
            .find()
            .unwrap_err();

        assert!(err.to_string().contains("Chrome not found at: /nonexistent/chrome"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_custom_path_is_rejected() {
        let binary = temp_binary(0o644);

        let err = ChromeFinder::new(Some(binary.path().to_path_buf()))
            .find()
            .unwrap_err();
        assert!(err.to_string().contains("not executable"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let result = ChromeFinder::new(Some(dir.path().to_path_buf())).find();
        assert!(result.is_err());
    }
}
