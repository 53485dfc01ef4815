use crate::{Error, Result};
use url::Url;

/// Results site searched when no other base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://www.indeed.com";

/// A job search request: a required title or skill and an optional location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    title: String,
    location: String,
}

impl SearchQuery {
    /// Create a query, rejecting a blank title
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::MissingJobTitle);
        }

        Ok(Self {
            title,
            location: location.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Build the results page URL for this query.
    ///
    /// The inputs are concatenated as typed; the browser does any escaping
    /// when it navigates.
    pub fn search_url(&self, base_url: &str) -> Result<String> {
        validate_base_url(base_url)?;
        Ok(format!("{}?q={}&l={}", base_url, self.title, self.location))
    }
}

/// Check that a base URL is an absolute http(s) URL
fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            base_url, scheme
        ))),
    }
}
