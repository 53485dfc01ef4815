use crate::{LaunchOptions, Result, ScrapeSession};
use jobscout_core::{DEFAULT_BASE_URL, JobListing, ListingExtractor, MAX_LISTINGS, SearchQuery};
use std::time::Duration;

/// Fixed delay between navigation and extraction
pub const DEFAULT_WAIT: Duration = Duration::from_secs(3);

/// Runs one search end to end: launch, load, extract, close
pub struct JobScraper {
    options: LaunchOptions,
    base_url: String,
    wait: Duration,
    limit: usize,
    extractor: ListingExtractor,
}

impl JobScraper {
    pub fn new(options: LaunchOptions) -> Self {
        Self {
            options,
            base_url: DEFAULT_BASE_URL.to_string(),
            wait: DEFAULT_WAIT,
            limit: MAX_LISTINGS,
            extractor: ListingExtractor::default(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Maximum listings to return; values above ten are capped
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_LISTINGS);
        self
    }

    /// Search for `query` and return at most `limit` listings.
    ///
    /// The browser is closed before returning, including when navigation fails.
    pub async fn scrape(&self, query: &SearchQuery) -> Result<Vec<JobListing>> {
        let url = query.search_url(&self.base_url)?;

        let session = ScrapeSession::open(&self.options).await?;
        let fetched = session.fetch(&url, self.wait).await;

        if let Err(e) = session.close().await {
            tracing::warn!("Failed to close Chrome cleanly: {}", e);
        }

        let page = fetched?;
        let listings = self.extractor.extract(&page.html, &page.url, self.limit);

        tracing::info!("Found {} listings for '{}'", listings.len(), query.title());
        Ok(listings)
    }
}

// Paths that reach a running Chrome (fetch failures closing the session first)
// need a browser binary and are not covered here.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let scraper = JobScraper::new(LaunchOptions::new("/usr/bin/google-chrome"));

        assert_eq!(scraper.base_url, "https://www.indeed.com");
        assert_eq!(scraper.wait, Duration::from_secs(3));
        assert_eq!(scraper.limit, 10);
    }

    #[test]
    fn test_limit_is_capped() {
        let scraper = JobScraper::new(LaunchOptions::new("/usr/bin/google-chrome")).limit(50);
        assert_eq!(scraper.limit, MAX_LISTINGS);

        let scraper = JobScraper::new(LaunchOptions::new("/usr/bin/google-chrome")).limit(4);
        assert_eq!(scraper.limit, 4);
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_before_launch() {
        let scraper = JobScraper::new(LaunchOptions::new("/nonexistent/chrome")).base_url("nope");
        let query = SearchQuery::new("rust", "").unwrap();

        let result = scraper.scrape(&query).await;
        assert!(matches!(result, Err(Error::Core(_))));
    }

    #[tokio::test]
    async fn test_launch_failure_is_reported() {
        let scraper = JobScraper::new(LaunchOptions::new("/nonexistent/chrome"));
        let query = SearchQuery::new("rust", "Remote").unwrap();

        assert!(scraper.scrape(&query).await.is_err());
    }
}
