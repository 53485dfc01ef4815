use crate::listing::JobListing;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// File name used when an export is requested without a path
pub const DEFAULT_EXPORT_FILE: &str = "job_listings.csv";

pub struct ListingWriter;

impl ListingWriter {
    /// Write listings as CSV to any writer.
    ///
    /// The header row is always written, so an empty export is still a
    /// valid file with the expected columns.
    pub fn to_writer<W: Write>(listings: &[JobListing], writer: W) -> Result<W> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(JobListing::COLUMNS)?;
        for listing in listings {
            csv_writer.serialize(listing)?;
        }
        csv_writer.flush()?;

        csv_writer.into_inner().map_err(|e| Error::Io(e.into_error()))
    }

    /// Write listings to a CSV file
    pub fn to_file(listings: &[JobListing], path: &Path) -> Result<()> {
        tracing::debug!("Writing listings to: {}", path.display());

        let file = File::create(path)?;
        let mut writer = Self::to_writer(listings, BufWriter::new(file))?;
        writer.flush()?;

        tracing::info!(
            "Wrote {} listings to {}",
            listings.len(),
            path.display()
        );

        Ok(())
    }

    /// Render listings as a CSV string
    pub fn to_string(listings: &[JobListing]) -> Result<String> {
        let bytes = Self::to_writer(listings, Vec::new())?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

pub struct ListingReader;

impl ListingReader {
    /// Read listings from CSV produced by [`ListingWriter`]
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobListing>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let listings = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<JobListing>, csv::Error>>()?;

        Ok(listings)
    }

    /// Read listings from a CSV file
    pub fn from_file(path: &Path) -> Result<Vec<JobListing>> {
        tracing::debug!("Reading listings from: {}", path.display());

        let file = File::open(path)?;
        let listings = Self::from_reader(BufReader::new(file))?;

        tracing::info!("Read {} listings from {}", listings.len(), path.display());

        Ok(listings)
    }
}
