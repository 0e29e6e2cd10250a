//! Numeric time series together with the metadata read from its header.

use std::fmt::{Display, Formatter};

use derive_more::Deref;

pub mod reader;

/// Identifier of a dataset, used only for bookkeeping and export.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Default)]
pub struct DatasetIdentifier(pub String);

impl DatasetIdentifier {
    /// Identifier used when the series header does not provide one.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Returns this identifier as string.
    #[inline]
    #[must_use]
    pub fn str(&self) -> &str {
        &self.0
    }
}

impl Display for DatasetIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DatasetIdentifier {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for DatasetIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Descriptive header fields of a series file. They are never used for
/// computation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeriesMetadata {
    pub data_type: String,
    pub condition: String,
}

impl SeriesMetadata {
    /// Value used for a header field that could not be read.
    pub const NOT_AVAILABLE: &'static str = "N/A";
}

impl Default for SeriesMetadata {
    fn default() -> Self {
        Self {
            data_type: Self::NOT_AVAILABLE.to_owned(),
            condition: Self::NOT_AVAILABLE.to_owned(),
        }
    }
}

/// Ordered samples of a single dataset.
///
/// Dereferences to the slice of samples.
#[derive(Deref, Clone, Debug, PartialEq)]
pub struct Series {
    identifier: DatasetIdentifier,
    metadata: SeriesMetadata,
    #[deref]
    samples: Vec<f64>,
}

impl Series {
    /// Creates a new series with default metadata.
    ///
    /// # Examples
    /// ```
    /// use dbcode::series::Series;
    ///
    /// let series = Series::new("DS-1", [0.5, 1.0, -2.0]);
    /// assert_eq!(series.identifier().str(), "DS-1");
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series[2], -2.0);
    /// ```
    #[must_use]
    pub fn new<T, U>(identifier: T, samples: U) -> Self
    where
        T: Into<DatasetIdentifier>,
        U: Into<Vec<f64>>,
    {
        Self::with_metadata(identifier, SeriesMetadata::default(), samples)
    }

    #[must_use]
    pub fn with_metadata<T, U>(identifier: T, metadata: SeriesMetadata, samples: U) -> Self
    where
        T: Into<DatasetIdentifier>,
        U: Into<Vec<f64>>,
    {
        Self {
            identifier: identifier.into(),
            metadata,
            samples: samples.into(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &DatasetIdentifier {
        &self.identifier
    }

    #[must_use]
    pub fn metadata(&self) -> &SeriesMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes this series and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
