mod chrome_finder;
mod error;
mod job_scraper;
mod launcher;
mod profile;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use job_scraper::{DEFAULT_WAIT, JobScraper};
pub use launcher::LaunchOptions;
pub use profile::ProfileDir;
pub use session::{RenderedPage, ScrapeSession};
