use serde::{Deserialize, Serialize};

/// Upper bound on the number of listings a single search returns
pub const MAX_LISTINGS: usize = 10;

/// Salary placeholder for results that carry no salary element
pub const NOT_SPECIFIED: &str = "Not specified";

/// A single job search result.
///
/// The serialized field names double as the display labels and the CSV
/// header, so exported files read the same as the terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "Job Title")]
    pub title: String,

    #[serde(rename = "Company")]
    pub company: String,

    #[serde(rename = "Salary")]
    pub salary: String,

    #[serde(rename = "Link to Apply")]
    pub apply_link: String,
}

impl JobListing {
    /// Column labels in display and export order
    pub const COLUMNS: [&'static str; 4] = ["Job Title", "Company", "Salary", "Link to Apply"];

    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        salary: Option<String>,
        apply_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            salary: salary.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            apply_link: apply_link.into(),
        }
    }
}

/// Keep the first `limit` listings, never more than [`MAX_LISTINGS`].
pub fn truncate_listings(mut listings: Vec<JobListing>, limit: usize) -> Vec<JobListing> {
    let limit = limit.min(MAX_LISTINGS);
    if listings.len() > limit {
        tracing::debug!("Truncating {} listings to {}", listings.len(), limit);
        listings.truncate(limit);
    }
    listings
}
