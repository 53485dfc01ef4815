use crate::{Error, Result};
use chromiumoxide::browser::BrowserConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

const WINDOW_SIZE: (u32, u32) = (1366, 900);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How a scrape session launches Chrome
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    chrome_path: PathBuf,
    headless: bool,
}

impl LaunchOptions {
    /// Headless launch of the given Chrome binary
    pub fn new(chrome_path: impl Into<PathBuf>) -> Self {
        Self {
            chrome_path: chrome_path.into(),
            headless: true,
        }
    }

    /// Show the browser window instead of running headless
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn chrome_path(&self) -> &Path {
        &self.chrome_path
    }

    /// Build Chrome command-line arguments
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.headless {
            args.push("--headless=new".to_string());
        }

        args.extend(
            [
                "--disable-gpu",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--no-first-run",
                "--no-default-browser-check",
            ]
            .map(String::from),
        );

        args
    }

    /// Browser configuration for chromiumoxide, using `profile` as user-data dir
    pub(crate) fn to_config(&self, profile: &Path) -> Result<BrowserConfig> {
        let (width, height) = WINDOW_SIZE;

        // Headless mode is driven by our own flag, so chromiumoxide must not add its own.
        BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .user_data_dir(profile)
            .with_head()
            .window_size(width, height)
            .request_timeout(REQUEST_TIMEOUT)
            .args(self.args())
            .build()
            .map_err(|e| Error::Browser(format!("Failed to build browser config: {}", e)))
    }
}
