use anyhow::Context;
use dbcode::classifier::classify;
use dbcode::difference;
use dbcode::params::{ParameterSet, ReferenceId};
use dbcode::series::Series;
use log::info;

use crate::csv_output::CsvOutput;
use crate::opts::OutputTarget;

const HEADER: [&str; 8] = [
    "index",
    "sample",
    "difference",
    "a",
    "b",
    "c",
    "d",
    "symbol",
];

/// Writes the difference series of one reference point together with its
/// threshold bands, one CSV row per sample.
pub(crate) fn differences(
    series: &Series,
    params: &ParameterSet,
    reference: ReferenceId,
    output: &OutputTarget,
) -> anyhow::Result<()> {
    let data = differences_csv(series, params, reference)?;
    output.write_all(&data)?;
    info!(
        "Wrote {} differences against {}",
        series.len(),
        reference
    );

    Ok(())
}

fn differences_csv(
    series: &Series,
    params: &ParameterSet,
    reference: ReferenceId,
) -> anyhow::Result<Vec<u8>> {
    let reference_point = params.get(reference);
    let differences = difference::differences(series, reference_point)
        .context("Could not compute differences")?;
    let thresholds = reference_point.thresholds();
    let mut data = Vec::new();
    let mut output = CsvOutput::new(&mut data, &HEADER);

    for (index, (&sample, &difference)) in series.iter().zip(&differences).enumerate() {
        let symbol = classify(difference, thresholds)
            .map(|nucleotide| nucleotide.to_string())
            .unwrap_or_default();
        output.add_record([
            index.to_string(),
            sample.to_string(),
            difference.to_string(),
            thresholds.a.to_string(),
            thresholds.b.to_string(),
            thresholds.c.to_string(),
            thresholds.d.to_string(),
            symbol,
        ])?;
    }
    output.finish()?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use dbcode::_internal_test_data::{SIMPLE_PARAMS, SIMPLE_SERIES};
    use dbcode::params::ReferenceId;

    use crate::cmd::differences::differences_csv;

    #[test]
    fn test_differences_csv() {
        let data = differences_csv(&SIMPLE_SERIES, &SIMPLE_PARAMS, ReferenceId::R2).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), SIMPLE_SERIES.len() + 1);
        assert_eq!(lines[0], "index,sample,difference,a,b,c,d,symbol");
        assert_eq!(lines[1], "0,0,-4,2.5,1.5,-1.5,-2.5,T");
        assert_eq!(lines[2], "1,5,1,2.5,1.5,-1.5,-2.5,A");
    }
}
