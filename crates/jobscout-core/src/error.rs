use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to access listings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Please enter a job title or skill.")]
    MissingJobTitle,

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;
