use crate::{LaunchOptions, ProfileDir, Result};
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// HTML of a page after it was given time to render
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL the page ended up on, after any redirects
    pub url: String,
    pub html: String,
}

/// A headless Chrome instance that lives for one search
pub struct ScrapeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    // Held so the profile outlives the browser process.
    _profile: ProfileDir,
}

impl ScrapeSession {
    /// Launch Chrome and start processing CDP messages
    pub async fn open(options: &LaunchOptions) -> Result<Self> {
        let profile = ProfileDir::temporary()?;
        let config = options.to_config(profile.path())?;

        tracing::info!("Launching Chrome from {}", options.chrome_path().display());
        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler must be polled for any browser command to complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        tracing::debug!("Chrome launched, CDP handler running");

        Ok(Self {
            browser,
            handler_task,
            _profile: profile,
        })
    }

    /// Navigate to `url`, wait a fixed `settle` interval, and return the page HTML
    pub async fn fetch(&self, url: &str, settle: Duration) -> Result<RenderedPage> {
        let page = self.browser.new_page("about:blank").await?;

        tracing::info!("Navigating to {}", url);
        page.goto(url).await?;

        tracing::debug!("Waiting {:?} for results to render", settle);
        tokio::time::sleep(settle).await;

        let html = page.content().await?;
        let final_url = page.url().await?.unwrap_or_else(|| url.to_string());
        tracing::debug!("Fetched {} bytes from {}", html.len(), final_url);

        page.close().await?;

        Ok(RenderedPage {
            url: final_url,
            html,
        })
    }

    /// Shut Chrome down and stop the handler task
    pub async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        if closed.is_ok() {
            self.browser.wait().await?;
        }
        self.handler_task.abort();

        tracing::debug!("Chrome session closed");
        closed.map(|_| ()).map_err(Into::into)
    }
}
