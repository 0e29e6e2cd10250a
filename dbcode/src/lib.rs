pub mod classifier;
pub mod codon;
pub mod difference;
pub mod error;
pub mod nucleotide;
pub mod params;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod series;
pub mod strand;

#[doc(hidden)]
pub mod _internal_test_data;
