//! The encoding pipeline: series → differences → strands → transcript →
//! protein.

use log::{debug, info};

use crate::classifier::classify_strand;
use crate::codon::translate;
use crate::difference::differences;
use crate::error::{EncodeError, EncodeResult};
use crate::params::{ParameterInput, ParameterSet, ReferenceId};
use crate::progress::{DummyProgressNotifier, ProgressNotifier, Stage};
use crate::record::ResultRecord;
use crate::series::Series;
use crate::strand::{interleave, Strand};

/// Runs the whole pipeline for `series` using `params`.
///
/// # Examples
/// ```
/// use dbcode::params::{Multipliers, ParameterInput};
/// use dbcode::pipeline::encode;
/// use dbcode::series::Series;
///
/// let params = ParameterInput::Modify { mu: 0.0, sigma: 1.0, multipliers: Multipliers::DEFAULT }
///     .derive()
///     .unwrap();
/// let record = encode(&Series::new("DS", [0.0, 5.0, -5.0, 100.0, -100.0]), &params).unwrap();
///
/// assert_eq!(record.transcript().str(), "ATTTATTTATTTTTT");
/// assert_eq!(record.protein().str(), "IYLFF");
/// ```
pub fn encode(series: &Series, params: &ParameterSet) -> EncodeResult<ResultRecord> {
    encode_with_progress(series, params, &DummyProgressNotifier)
}

/// Same as [`encode`], reporting each finished step to `progress`.
pub fn encode_with_progress(
    series: &Series,
    params: &ParameterSet,
    progress: &dyn ProgressNotifier,
) -> EncodeResult<ResultRecord> {
    if series.is_empty() {
        return Err(EncodeError::EmptySeries);
    }
    progress.set_iter_num(5);

    progress.stage_started(Stage::Classification);
    let strand = |id: ReferenceId| -> EncodeResult<Strand> {
        let reference = params.get(id);
        let strand = classify_strand(&differences(series, reference)?, reference)?;
        progress.inc_iter();
        Ok(strand)
    };
    let (r1, (r2, r3)) = rayon::join(
        || strand(ReferenceId::R1),
        || rayon::join(|| strand(ReferenceId::R2), || strand(ReferenceId::R3)),
    );
    let strands = [r1?, r2?, r3?];

    progress.stage_started(Stage::Interleaving);
    let transcript = interleave(&strands)?;
    progress.inc_iter();

    progress.stage_started(Stage::Translation);
    let protein = translate(&transcript);
    progress.inc_iter();

    info!(
        "Encoded dataset `{}`: {} samples, {} nucleotides, {} amino acids",
        series.identifier(),
        series.len(),
        transcript.len(),
        protein.len()
    );

    Ok(ResultRecord::new(
        series.identifier().clone(),
        strands,
        transcript,
        protein,
    ))
}

/// Holds the state of an interactive session: the loaded series, the
/// current parameters and the most recent result.
///
/// Every operation either succeeds completely or leaves the workbench as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    series: Option<Series>,
    params: Option<ParameterSet>,
    result: Option<ResultRecord>,
}

impl Workbench {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded series. The previous result is kept until the
    /// next successful [`Workbench::run`].
    pub fn load_series(&mut self, series: Series) {
        debug!(
            "Loaded series `{}` with {} samples",
            series.identifier(),
            series.len()
        );
        self.series = Some(series);
    }

    /// Derives and stores new parameters. On failure the previous parameters
    /// stay in place.
    pub fn set_parameters(&mut self, input: &ParameterInput) -> EncodeResult<&ParameterSet> {
        let params = input.derive()?;
        Ok(self.set_parameter_set(params))
    }

    pub fn set_parameter_set(&mut self, params: ParameterSet) -> &ParameterSet {
        self.params.insert(params)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.params.is_some()
    }

    #[must_use]
    pub fn parameters(&self) -> Option<&ParameterSet> {
        self.params.as_ref()
    }

    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }

    /// Differences between the loaded series and one reference point.
    pub fn differences(&self, id: ReferenceId) -> EncodeResult<Vec<f64>> {
        let params = self.params.as_ref().ok_or(EncodeError::NotReady)?;
        let series = self.series.as_ref().ok_or(EncodeError::EmptySeries)?;

        differences(series, params.get(id))
    }

    /// Runs the pipeline on the loaded series. On failure the previous result
    /// stays in place.
    pub fn run(&mut self) -> EncodeResult<&ResultRecord> {
        self.run_with_progress(&DummyProgressNotifier)
    }

    pub fn run_with_progress(
        &mut self,
        progress: &dyn ProgressNotifier,
    ) -> EncodeResult<&ResultRecord> {
        let params = self.params.as_ref().ok_or(EncodeError::NotReady)?;
        let series = self.series.as_ref().ok_or(EncodeError::EmptySeries)?;

        let record = encode_with_progress(series, params, progress)?;
        Ok(self.result.insert(record))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use crate::_internal_test_data::{
        oscillating_series, SIMPLE_PARAMS, SIMPLE_PARAMS_INPUT, SIMPLE_RECORD, SIMPLE_SERIES,
    };
    use crate::error::EncodeError;
    use crate::params::{
        ParameterInput, ReferenceId, ReferenceValues, ThresholdCondition, Thresholds,
    };
    use crate::pipeline::{encode, encode_with_progress, Workbench};
    use crate::progress::{ProgressNotifier, Stage};
    use crate::series::Series;

    #[derive(Debug, Default)]
    struct RecordingNotifier {
        stages: Mutex<Vec<Stage>>,
        total: AtomicU64,
        done: AtomicU64,
    }

    impl ProgressNotifier for RecordingNotifier {
        fn stage_started(&self, stage: Stage) {
            self.stages.lock().unwrap().push(stage);
        }

        fn set_iter_num(&self, num_iter: u64) {
            self.total.store(num_iter, Ordering::SeqCst);
        }

        fn inc_iter(&self) {
            self.done.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_encode_simple() {
        let record = encode(&SIMPLE_SERIES, &SIMPLE_PARAMS).unwrap();
        assert_eq!(record, *SIMPLE_RECORD);
    }

    #[test]
    fn test_encode_lengths() {
        let series = oscillating_series(1_001);
        let record = encode(&series, &SIMPLE_PARAMS).unwrap();

        for strand in record.strands() {
            assert_eq!(strand.len(), series.len());
        }
        assert_eq!(record.transcript().len(), 3 * series.len());
        assert_eq!(record.protein().len(), series.len());
    }

    #[test]
    fn test_encode_idempotent() {
        let series = oscillating_series(500);
        let first = encode(&series, &SIMPLE_PARAMS).unwrap();
        let second = encode(&series, &SIMPLE_PARAMS).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_direct_same_gives_equal_strands() {
        let params = ParameterInput::DirectSame(ReferenceValues::new(
            0.5,
            Thresholds::new(1.0, 0.5, -0.5, -1.0),
        ))
        .derive()
        .unwrap();
        let record = encode(&oscillating_series(300), &params).unwrap();

        let [s1, s2, s3] = record.strands();
        assert_eq!(s1, s2);
        assert_eq!(s2, s3);
    }

    #[test]
    fn test_encode_empty_series() {
        let series = Series::new("EMPTY", Vec::new());
        assert_eq!(
            encode(&series, &SIMPLE_PARAMS).unwrap_err(),
            EncodeError::EmptySeries
        );
    }

    #[test]
    fn test_encode_nan_reports_first_reference() {
        let series = Series::new("NAN", [1.0, f64::NAN]);
        let err = encode(&series, &SIMPLE_PARAMS).unwrap_err();

        assert!(matches!(
            err,
            EncodeError::InvariantViolation {
                reference: ReferenceId::R1,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_reports_progress() {
        let notifier = RecordingNotifier::default();
        encode_with_progress(&SIMPLE_SERIES, &SIMPLE_PARAMS, &notifier).unwrap();

        assert_eq!(*notifier.stages.lock().unwrap(), Stage::VALUES);
        assert_eq!(notifier.total.load(Ordering::SeqCst), 5);
        assert_eq!(notifier.done.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_workbench_not_ready() {
        let mut workbench = Workbench::new();
        assert!(!workbench.is_ready());
        assert_eq!(workbench.run().unwrap_err(), EncodeError::NotReady);
        assert_eq!(
            workbench.differences(ReferenceId::R1).unwrap_err(),
            EncodeError::NotReady
        );

        workbench.load_series(SIMPLE_SERIES.clone());
        assert_eq!(workbench.run().unwrap_err(), EncodeError::NotReady);
        assert!(workbench.result().is_none());
    }

    #[test]
    fn test_workbench_without_series() {
        let mut workbench = Workbench::new();
        workbench.set_parameters(&SIMPLE_PARAMS_INPUT).unwrap();

        assert!(workbench.is_ready());
        assert_eq!(workbench.run().unwrap_err(), EncodeError::EmptySeries);
        assert_eq!(
            workbench.differences(ReferenceId::R2).unwrap_err(),
            EncodeError::EmptySeries
        );
    }

    #[test]
    fn test_workbench_run() {
        let mut workbench = Workbench::new();
        workbench.load_series(SIMPLE_SERIES.clone());
        workbench.set_parameters(&SIMPLE_PARAMS_INPUT).unwrap();

        assert_eq!(
            workbench.differences(ReferenceId::R2).unwrap(),
            [-4.0, 1.0, -9.0, 96.0, -104.0]
        );
        assert_eq!(workbench.run().unwrap(), &*SIMPLE_RECORD);
        assert_eq!(workbench.result(), Some(&*SIMPLE_RECORD));
    }

    #[test]
    fn test_workbench_keeps_parameters_on_failure() {
        let mut workbench = Workbench::new();
        workbench.set_parameters(&SIMPLE_PARAMS_INPUT).unwrap();

        let invalid = ParameterInput::DirectSame(ReferenceValues::new(
            0.0,
            Thresholds::new(1.0, 2.0, -1.0, -2.0),
        ));
        assert_eq!(
            workbench.set_parameters(&invalid).unwrap_err(),
            EncodeError::Validation {
                reference: ReferenceId::R1,
                condition: ThresholdCondition::AGreaterThanB,
            }
        );
        assert_eq!(workbench.parameters(), Some(&*SIMPLE_PARAMS));
    }

    #[test]
    fn test_workbench_keeps_result_on_failure() {
        let mut workbench = Workbench::new();
        workbench.load_series(SIMPLE_SERIES.clone());
        workbench.set_parameters(&SIMPLE_PARAMS_INPUT).unwrap();
        workbench.run().unwrap();

        workbench.load_series(Series::new("BROKEN", [f64::NAN]));
        assert!(workbench.run().is_err());
        assert_eq!(workbench.result(), Some(&*SIMPLE_RECORD));
    }
}
