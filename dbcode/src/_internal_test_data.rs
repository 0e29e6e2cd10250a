use lazy_static::lazy_static;

use crate::params::{Multipliers, ParameterInput, ParameterSet};
use crate::record::ResultRecord;
use crate::series::{Series, SeriesMetadata};

pub const SIMPLE_SERIES_STR: &str = "Data Type: Vibration
Condition: Normal
Dataset ID: SIMPLE
0
5
-5
sensor reset
100
-100
";

lazy_static! {
    pub static ref SIMPLE_SERIES: Series = Series::with_metadata(
        "SIMPLE",
        SeriesMetadata {
            data_type: "Vibration".to_owned(),
            condition: "Normal".to_owned(),
        },
        [0.0, 5.0, -5.0, 100.0, -100.0],
    );
}

/// `R1 = 0`, `R2 = 4`, `R3 = -4`, thresholds `2.5, 1.5, -1.5, -2.5`.
pub const SIMPLE_PARAMS_INPUT: ParameterInput = ParameterInput::Modify {
    mu: 0.0,
    sigma: 1.0,
    multipliers: Multipliers::DEFAULT,
};

lazy_static! {
    pub static ref SIMPLE_PARAMS: ParameterSet = SIMPLE_PARAMS_INPUT
        .derive()
        .expect("Test parameters are valid");
    pub static ref SIMPLE_RECORD: ResultRecord = ResultRecord::new(
        "SIMPLE".into(),
        ["ATTTT".into(), "TATTT".into(), "TTATT".into()],
        "ATTTATTTATTTTTT".into(),
        "IYLFF".into(),
    );
}

/// Deterministic oscillating series of given length, spanning roughly
/// `-3.0..3.0`.
#[must_use]
pub fn oscillating_series(len: usize) -> Series {
    let samples: Vec<f64> = (0..len)
        .map(|i| {
            let t = i as f64;
            2.0 * (t * 0.05).sin() + (t * 0.37).cos()
        })
        .collect();

    Series::new("OSCILLATING", samples)
}
