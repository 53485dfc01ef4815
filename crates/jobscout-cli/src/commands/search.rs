use crate::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use jobscout_browser::{ChromeFinder, JobScraper, LaunchOptions};
use jobscout_core::{
    DEFAULT_BASE_URL, DEFAULT_EXPORT_FILE, JobListing, ListingExtractor, ListingWriter,
    SearchQuery,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shown instead of results when a search comes back empty
pub const NO_RESULTS_WARNING: &str = "No jobs found matching your criteria.";

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Job title or skill to search for
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Location filter (e.g. "New York", "Remote")
    #[arg(short, long, env = "JOBSCOUT_LOCATION", default_value = "")]
    pub location: String,

    /// Maximum number of listings to show (1-10)
    #[arg(
        short = 'n',
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub limit: u8,

    /// Seconds to let the results page render before extracting
    #[arg(long, value_name = "SECS", env = "JOBSCOUT_WAIT", default_value_t = 3)]
    pub wait: u64,

    /// Job site to search
    #[arg(long, env = "JOBSCOUT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to Chrome/Chromium executable
    #[arg(long, env = "JOBSCOUT_CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Show the Chrome window instead of running headless
    #[arg(long, conflicts_with = "html")]
    pub show_browser: bool,

    /// Extract listings from a saved results page instead of launching Chrome
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Export listings as CSV (defaults to job_listings.csv when no file is given)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SearchArgs, format: OutputFormat) -> Result<()> {
    let query = SearchQuery::new(args.title.clone(), args.location.clone())?;
    tracing::debug!(
        "Searching for '{}' in '{}' (format: {})",
        query.title(),
        query.location(),
        format.as_str()
    );

    let listings = match &args.html {
        Some(page) => search_saved_page(&query, &args, page)?,
        None => search_live(&query, &args)?,
    };

    report(&listings, args.output.as_deref(), format)
}

/// Run the search against the live site through headless Chrome
fn search_live(query: &SearchQuery, args: &SearchArgs) -> Result<Vec<JobListing>> {
    let chrome_binary = ChromeFinder::new(args.chrome_path.clone()).find()?;
    tracing::debug!("Using Chrome at {}", chrome_binary.display());

    let launch = LaunchOptions::new(chrome_binary).headless(!args.show_browser);
    let scraper = JobScraper::new(launch)
        .base_url(args.base_url.clone())
        .wait(Duration::from_secs(args.wait))
        .limit(usize::from(args.limit));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let spinner = searching_spinner()?;
    let result = runtime.block_on(scraper.scrape(query));
    spinner.finish_and_clear();

    runtime.shutdown_timeout(Duration::from_millis(100));

    Ok(result?)
}

/// Extract listings from a results page saved to disk
fn search_saved_page(query: &SearchQuery, args: &SearchArgs, page: &Path) -> Result<Vec<JobListing>> {
    let html = std::fs::read_to_string(page)
        .with_context(|| format!("Failed to read results page: {}", page.display()))?;

    // Relative links resolve against the URL the page would have been served from.
    let page_url = query.search_url(&args.base_url)?;

    Ok(ListingExtractor::default().extract(&html, &page_url, usize::from(args.limit)))
}

fn searching_spinner() -> Result<indicatif::ProgressBar> {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Searching for jobs...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}

fn report(listings: &[JobListing], output: Option<&Path>, format: OutputFormat) -> Result<()> {
    use console::style;

    if listings.is_empty() {
        eprintln!("{}", style(NO_RESULTS_WARNING).yellow());
        if format.is_machine_readable() {
            println!("[]");
        }
        return Ok(());
    }

    let rendered = match format {
        OutputFormat::Json => format_json(listings)?,
        OutputFormat::Table => format_table(listings),
        OutputFormat::Pretty => format_pretty(listings),
    };

    if !format.is_machine_readable() {
        println!("{}", style(found_message(listings.len())).green().bold());
    }
    print!("{}", rendered);

    if let Some(path) = output {
        ListingWriter::to_file(listings, path)?;
        let message = format!("✅ Job listings written to: {}", path.display());
        if format.is_machine_readable() {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    Ok(())
}

pub fn found_message(count: usize) -> String {
    format!("Found {} job listings!", count)
}

pub fn format_pretty(listings: &[JobListing]) -> String {
    use console::style;

    let mut output = String::new();
    for listing in listings {
        output.push('\n');
        output.push_str(&format!("{} {}\n", style("Job Title:").bold(), listing.title));
        output.push_str(&format!("{} {}\n", style("Company:").bold(), listing.company));
        output.push_str(&format!("{} {}\n", style("Salary:").bold(), listing.salary));
        output.push_str(&format!(
            "{} {}\n",
            style("Apply Here:").bold(),
            style(&listing.apply_link).cyan().underlined()
        ));
    }
    output
}

pub fn format_json(listings: &[JobListing]) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(listings)?))
}

/// Widest a text column is allowed to grow before values are cut
const MAX_COLUMN_WIDTH: usize = 40;

pub fn format_table(listings: &[JobListing]) -> String {
    let [title_label, company_label, salary_label, link_label] = JobListing::COLUMNS;

    let rows: Vec<[String; 3]> = listings
        .iter()
        .map(|l| {
            [&l.title, &l.company, &l.salary]
                .map(|v| console::truncate_str(v, MAX_COLUMN_WIDTH, "...").into_owned())
        })
        .collect();

    let width = |idx: usize, label: &str| {
        rows.iter()
            .map(|r| console::measure_text_width(&r[idx]))
            .chain(std::iter::once(label.len()))
            .max()
            .unwrap_or(0)
    };
    let (w_title, w_company, w_salary) = (
        width(0, title_label),
        width(1, company_label),
        width(2, salary_label),
    );

    let mut output = format!(
        "{:<3} {} {} {} {}\n",
        "#",
        console::pad_str(title_label, w_title, console::Alignment::Left, None),
        console::pad_str(company_label, w_company, console::Alignment::Left, None),
        console::pad_str(salary_label, w_salary, console::Alignment::Left, None),
        link_label
    );

    for (idx, (row, listing)) in rows.iter().zip(listings).enumerate() {
        output.push_str(&format!(
            "{:<3} {} {} {} {}\n",
            idx + 1,
            console::pad_str(&row[0], w_title, console::Alignment::Left, None),
            console::pad_str(&row[1], w_company, console::Alignment::Left, None),
            console::pad_str(&row[2], w_salary, console::Alignment::Left, None),
            listing.apply_link
        ));
    }

    output
}
