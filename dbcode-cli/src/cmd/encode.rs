use anyhow::Context;
use dbcode::params::{ParameterSet, ReferenceId};
use dbcode::pipeline::Workbench;
use dbcode::progress::ProgressNotifier;
use dbcode::record::{ExportFormat, ResultRecord};
use dbcode::series::Series;

use crate::opts::OutputTarget;
use crate::PROGRESS_BAR;

const STRAND_PREVIEW_LEN: usize = 200;
const TRANSCRIPT_PREVIEW_LEN: usize = 600;
const PROTEIN_PREVIEW_LEN: usize = 200;

/// Encodes `series` and exports the record to `output`. The output is only
/// touched once the record has been fully serialized, so a failed run keeps
/// the previous export intact.
pub(crate) fn encode(
    series: Series,
    params: ParameterSet,
    output: &OutputTarget,
    format: ExportFormat,
    preview: bool,
    progress_notifier: &dyn ProgressNotifier,
) -> anyhow::Result<()> {
    let mut workbench = Workbench::new();
    workbench.load_series(series);
    workbench.set_parameter_set(params);

    let record = workbench
        .run_with_progress(progress_notifier)
        .context("Could not encode the series")?;
    let mut data = Vec::new();
    record
        .write(&mut data, format)
        .context("Could not serialize the result")?;
    output.write_all(&data)?;

    if preview {
        PROGRESS_BAR.finish();
        print_preview(record);
    }

    Ok(())
}

fn print_preview(record: &ResultRecord) {
    PROGRESS_BAR.println(format!("Dataset: {}", record.identifier()));
    for id in ReferenceId::VALUES {
        PROGRESS_BAR.println(format!(
            "DNA{}: {}",
            id.index() + 1,
            truncate(record.strand(id), STRAND_PREVIEW_LEN)
        ));
    }
    PROGRESS_BAR.println(format!(
        "mRNA: {}",
        truncate(record.transcript(), TRANSCRIPT_PREVIEW_LEN)
    ));
    PROGRESS_BAR.println(format!(
        "Protein: {}",
        truncate(record.protein(), PROTEIN_PREVIEW_LEN)
    ));
}

/// Cuts `sequence` to `max_len` symbols, marking the cut with `...`.
fn truncate(sequence: &str, max_len: usize) -> String {
    match sequence.char_indices().nth(max_len) {
        Some((end, _)) => format!("{}...", &sequence[..end]),
        None => sequence.to_owned(),
    }
}
