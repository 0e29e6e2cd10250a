use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

use log::{debug, warn};

use crate::series::{DatasetIdentifier, Series, SeriesMetadata};

const HEADER_LINES: usize = 3;
const HEADER_SEPARATOR: &str = ": ";

/// Error occurring during reading a series file.
#[derive(Debug)]
pub enum SeriesReaderError {
    /// I/O error occurred when reading the file.
    IoError(std::io::Error),
    /// The file is shorter than the three header lines plus one data line.
    MissingStructure,
    /// None of the data lines contains a number.
    NoSamples,
}

impl From<std::io::Error> for SeriesReaderError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl Display for SeriesReaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesReaderError::IoError(e) => write!(f, "IO error: {}", e),
            SeriesReaderError::MissingStructure => {
                write!(f, "The file does not have the required structure")
            }
            SeriesReaderError::NoSamples => write!(f, "No numerical data found in the file"),
        }
    }
}

impl Error for SeriesReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SeriesReaderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

/// The result of a series reading operation.
pub type SeriesResult<T> = Result<T, SeriesReaderError>;

/// Reader of the plain-text series format:
///
/// ```text
/// Data Type: <value>
/// Condition: <value>
/// Dataset ID: <value>
/// <sample>
/// <sample>
/// ...
/// ```
///
/// Lines after the header that do not parse as a number are skipped.
#[derive(Debug)]
pub struct SeriesReader<R> {
    reader: R,
}

impl<R: BufRead> SeriesReader<R> {
    /// Creates new `SeriesReader` instance.
    ///
    /// # Examples
    /// ```
    /// use dbcode::series::reader::SeriesReader;
    ///
    /// let data = "Data Type: Force\nCondition: Worn\nDataset ID: T-01\n1.5\nn/a\n-0.5\n";
    /// let series = SeriesReader::new(data.as_bytes()).read_series().unwrap();
    /// assert_eq!(series.identifier().str(), "T-01");
    /// assert_eq!(series.samples(), [1.5, -0.5]);
    /// ```
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the whole series.
    pub fn read_series(self) -> SeriesResult<Series> {
        let lines: Vec<String> = self.reader.lines().collect::<Result<_, _>>()?;
        if lines.len() < HEADER_LINES + 1 {
            return Err(SeriesReaderError::MissingStructure);
        }

        let data_type = Self::header_value(&lines[0]).unwrap_or(SeriesMetadata::NOT_AVAILABLE);
        let condition = Self::header_value(&lines[1]).unwrap_or(SeriesMetadata::NOT_AVAILABLE);
        let identifier = Self::header_value(&lines[2]).unwrap_or(DatasetIdentifier::UNKNOWN);
        let metadata = SeriesMetadata {
            data_type: data_type.to_owned(),
            condition: condition.to_owned(),
        };

        let data_lines = &lines[HEADER_LINES..];
        let samples: Vec<f64> = data_lines
            .iter()
            .filter_map(|line| line.trim().parse().ok())
            .collect();
        if samples.is_empty() {
            return Err(SeriesReaderError::NoSamples);
        }

        let skipped = data_lines.len() - samples.len();
        if skipped > 0 {
            warn!("Skipped {} non-numeric line(s)", skipped);
        }
        debug!(
            "Read {} samples of dataset `{}` ({}, {})",
            samples.len(),
            identifier,
            metadata.data_type,
            metadata.condition
        );

        Ok(Series::with_metadata(identifier, metadata, samples))
    }

    /// Returns the text after the first `": "` of a header line.
    fn header_value(line: &str) -> Option<&str> {
        let value = line.trim().split(HEADER_SEPARATOR).nth(1)?;
        Some(value)
    }
}
