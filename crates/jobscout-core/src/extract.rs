//! Listing extraction from a rendered results page.
//!
//! The browser hands over the page HTML once it has settled; everything
//! from there on is plain DOM selection, so it can be exercised against
//! saved pages without launching Chrome.

use crate::listing::{JobListing, truncate_listings};
use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// CSS selectors used to pull listings out of a results page
#[derive(Debug, Clone)]
pub struct Selectors {
    container: Selector,
    title: Selector,
    company: Selector,
    salary: Selector,
    link: Selector,
}

impl Selectors {
    pub const CONTAINER: &'static str = "div.job_seen_beacon";
    pub const TITLE: &'static str = "h2.jobTitle";
    pub const COMPANY: &'static str = "span.companyName";
    pub const SALARY: &'static str = "div.salary-snippet";
    pub const LINK: &'static str = "a";

    /// Build a selector set from raw CSS strings
    pub fn new(container: &str, title: &str, company: &str, salary: &str, link: &str) -> Result<Self> {
        Ok(Self {
            container: parse_selector(container)?,
            title: parse_selector(title)?,
            company: parse_selector(company)?,
            salary: parse_selector(salary)?,
            link: parse_selector(link)?,
        })
    }

    /// Selectors for Indeed's results markup
    pub fn indeed() -> Self {
        // The constants are known-good selector strings.
        Self::new(
            Self::CONTAINER,
            Self::TITLE,
            Self::COMPANY,
            Self::SALARY,
            Self::LINK,
        )
        .unwrap_or_else(|e| unreachable!("built-in selectors must parse: {}", e))
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::indeed()
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Maps result containers on a page to [`JobListing`]s
#[derive(Debug, Clone, Default)]
pub struct ListingExtractor {
    selectors: Selectors,
}

impl ListingExtractor {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }

    /// Extract every listing on the page, in document order.
    ///
    /// `page_url` is used to resolve relative application links. Containers
    /// missing a title, company or link are skipped.
    pub fn extract_all(&self, html: &str, page_url: &str) -> Vec<JobListing> {
        let document = Html::parse_document(html);
        let base = Url::parse(page_url).ok();

        let mut listings = Vec::new();
        for (idx, container) in document.select(&self.selectors.container).enumerate() {
            match self.extract_one(container, base.as_ref()) {
                Some(listing) => listings.push(listing),
                None => tracing::warn!("Skipping result {}: missing title, company or link", idx),
            }
        }

        tracing::debug!("Extracted {} listings from {}", listings.len(), page_url);
        listings
    }

    /// Extract listings and keep at most `limit` of them
    pub fn extract(&self, html: &str, page_url: &str, limit: usize) -> Vec<JobListing> {
        truncate_listings(self.extract_all(html, page_url), limit)
    }

    fn extract_one(&self, container: ElementRef<'_>, base: Option<&Url>) -> Option<JobListing> {
        let title = first_text(container, &self.selectors.title)?;
        let company = first_text(container, &self.selectors.company)?;
        let salary = first_text(container, &self.selectors.salary);

        let href = container
            .select(&self.selectors.link)
            .next()
            .and_then(|a| a.value().attr("href"))?;

        Some(JobListing::new(title, company, salary, resolve_link(href, base)))
    }
}

/// Visible text of the first match, whitespace collapsed
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
}

/// Inline tags split text nodes mid-word, so fragments are joined before collapsing.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve an href the way the browser exposes it on the anchor
fn resolve_link(href: &str, base: Option<&Url>) -> String {
    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        _ => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{MAX_LISTINGS, NOT_SPECIFIED};

    const PAGE_URL: &str = "https://www.indeed.com?q=rust&l=Remote";

    fn card(title: &str, company: &str, salary: Option<&str>, href: &str) -> String {
        let salary = salary
            .map(|s| format!(r#"<div class="salary-snippet"><span>{}</span></div>"#, s))
            .unwrap_or_default();
        format!(
            r#"<div class="job_seen_beacon">
                 <h2 class="jobTitle"><a href="{href}"><span>{title}</span></a></h2>
                 <span class="companyName">{company}</span>
                 {salary}
               </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body><div id=\"results\">{}</div></body></html>", cards.join("\n"))
    }

    #[test]
    fn test_extracts_all_fields() {
        let html = page(&[card(
            "Senior Rust Engineer",
            "Ferrous Systems",
            Some("$150,000 - $180,000 a year"),
            "/rc/clk?jk=abc123",
        )]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);

        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.title, "Senior Rust Engineer");
        assert_eq!(listing.company, "Ferrous Systems");
        assert_eq!(listing.salary, "$150,000 - $180,000 a year");
        assert_eq!(listing.apply_link, "https://www.indeed.com/rc/clk?jk=abc123");
    }

    #[test]
    fn test_missing_salary_yields_sentinel() {
        let html = page(&[card("Backend Developer", "Acme", None, "/viewjob?jk=1")]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].salary, NOT_SPECIFIED);
    }

    #[test]
    fn test_absolute_links_are_kept() {
        let html = page(&[card(
            "Data Engineer",
            "Acme",
            None,
            "https://jobs.example.com/apply/42",
        )]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);
        assert_eq!(listings[0].apply_link, "https://jobs.example.com/apply/42");
    }

    #[test]
    fn test_truncates_to_ten_in_page_order() {
        let cards: Vec<String> = (0..15)
            .map(|i| card(&format!("Job {}", i), "Acme", None, &format!("/rc/clk?jk={}", i)))
            .collect();
        let html = page(&cards);

        let extractor = ListingExtractor::default();
        assert_eq!(extractor.extract_all(&html, PAGE_URL).len(), 15);

        let listings = extractor.extract(&html, PAGE_URL, 100);
        assert_eq!(listings.len(), 10);
        assert_eq!(listings[0].title, "Job 0");
        assert_eq!(listings[9].title, "Job 9");
    }

    #[test]
    fn test_empty_page_yields_no_listings() {
        let html = "<html><body><p>No results</p></body></html>";
        let listings = ListingExtractor::default().extract(html, PAGE_URL, MAX_LISTINGS);
        assert!(listings.is_empty());
    }

    #[test]
    fn test_incomplete_cards_are_skipped() {
        let broken = r#"<div class="job_seen_beacon"><h2 class="jobTitle">Orphan</h2></div>"#.to_string();
        let html = page(&[broken, card("Complete", "Acme", None, "/rc/clk?jk=9")]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Complete");
    }

    #[test]
    fn test_text_whitespace_is_collapsed() {
        let html = page(&[card(
            "  Platform\n   Engineer  ",
            "\n Big   Co ",
            None,
            "/rc/clk?jk=1",
        )]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);
        assert_eq!(listings[0].title, "Platform Engineer");
        assert_eq!(listings[0].company, "Big Co");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = page(&[card(
            "<b>Rust</b>acean Developer",
            "Ac<i>me</i>",
            Some("$90,000 <b>a year</b>"),
            "/rc/clk?jk=1",
        )]);

        let listings = ListingExtractor::default().extract(&html, PAGE_URL, MAX_LISTINGS);
        assert_eq!(listings[0].title, "Rustacean Developer");
        assert_eq!(listings[0].company, "Acme");
        assert_eq!(listings[0].salary, "$90,000 a year");
    }

    #[test]
    fn test_unparseable_page_url_keeps_raw_href() {
        let html = page(&[card("Job", "Acme", None, "/rc/clk?jk=1")]);
        let listings = ListingExtractor::default().extract(&html, "not a url", MAX_LISTINGS);
        assert_eq!(listings[0].apply_link, "/rc/clk?jk=1");
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let result = Selectors::new("div[", "h2", "span", "div", "a");
        match result {
            Err(Error::InvalidSelector { selector, .. }) => assert_eq!(selector, "div["),
            other => panic!("expected InvalidSelector, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_custom_selectors() {
        let selectors = Selectors::new("li.job", "h3", ".org", ".pay", "a.apply").unwrap();
        let html = r#"<ul>
            <li class="job"><h3>Welder</h3><em class="org">Forge Inc</em><a href="/x">info</a><a class="apply" href="/apply/1">apply</a></li>
        </ul>"#;

        let listings = ListingExtractor::new(selectors).extract(html, "https://jobs.example.com/search", 5);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].company, "Forge Inc");
        assert_eq!(listings[0].apply_link, "https://jobs.example.com/apply/1");
    }
}
