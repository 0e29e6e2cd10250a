use dbcode::_internal_test_data::{SIMPLE_RECORD, SIMPLE_SERIES_STR};
use dbcode::error::EncodeError;
use dbcode::params::serializer::SerializableParameterSet;
use dbcode::params::{ParameterInput, ReferenceId};
use dbcode::pipeline::Workbench;
use dbcode::record::{ExportFormat, ResultRecord};
use dbcode::series::reader::SeriesReader;

#[test_log::test]
fn test_file_to_export() {
    let series = SeriesReader::new(SIMPLE_SERIES_STR.as_bytes())
        .read_series()
        .unwrap();
    let mut workbench = Workbench::new();
    workbench.load_series(series);
    let input =
        ParameterInput::modify_from_raw("0", "1", ["4", "4", "2.5", "1.5", "-1.5", "-2.5"])
            .unwrap();
    workbench.set_parameters(&input).unwrap();
    let record = workbench.run().unwrap();
    assert_eq!(record, &*SIMPLE_RECORD);

    let mut data = Vec::new();
    record.write(&mut data, ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
    assert_eq!(value[0]["Dataset Identifier"], "SIMPLE");
    assert_eq!(value[0]["DNA2"], "TATTT");
    assert_eq!(value[0]["Protein"], "IYLFF");
}

#[test_log::test]
fn test_params_file_to_export() {
    let params = ParameterInput::default_from_raw("10", "2")
        .unwrap()
        .derive()
        .unwrap();
    let mut params_file = Vec::new();
    SerializableParameterSet::write_params(&params, &mut params_file).unwrap();

    let mut workbench = Workbench::new();
    let read_params = SerializableParameterSet::read_params(params_file.as_slice()).unwrap();
    workbench.set_parameter_set(read_params);
    assert_eq!(workbench.parameters(), Some(&params));

    let data = "Data Type: T\nCondition: C\nDataset ID: D\n10\n15\n5\n18\n2\n";
    let series = SeriesReader::new(data.as_bytes()).read_series().unwrap();
    workbench.load_series(series);
    let record = workbench.run().unwrap().clone();

    let mut data = Vec::new();
    record.write(&mut data, ExportFormat::MessagePack).unwrap();
    let read = ResultRecord::read(data.as_slice(), ExportFormat::MessagePack).unwrap();
    assert_eq!(read, record);
    assert_eq!(read.transcript().len(), 15);
    assert_eq!(read.protein().len(), 5);
}

#[test_log::test]
fn test_parse_error_reports_field() {
    let err = ParameterInput::direct_different_from_raw([
        ["0", "2", "1", "-1", "-2"],
        ["4", "2", "1", "-1", "-2"],
        ["-4", "2", "x1", "-1", "-2"],
    ])
    .unwrap_err();

    assert_eq!(
        err,
        EncodeError::Parse {
            field: "b (R3)".to_owned(),
            value: "x1".to_owned(),
        }
    );
}

#[test_log::test]
fn test_differences_follow_reference() {
    let series = SeriesReader::new(SIMPLE_SERIES_STR.as_bytes())
        .read_series()
        .unwrap();
    let mut workbench = Workbench::new();
    workbench.load_series(series.clone());
    workbench
        .set_parameters(&ParameterInput::default_from_raw("1", "0.5").unwrap())
        .unwrap();

    let params = workbench.parameters().unwrap().clone();
    for id in ReferenceId::VALUES {
        let value = params.get(id).value();
        let differences = workbench.differences(id).unwrap();
        assert_eq!(differences.len(), series.len());
        for (difference, sample) in differences.iter().zip(series.samples()) {
            assert_eq!(*difference, sample - value);
        }
    }
}
