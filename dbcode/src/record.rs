//! The result of one pipeline run and its export formats.

use std::fmt::{Display, Formatter};
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::params::ReferenceId;
use crate::series::DatasetIdentifier;
use crate::strand::{Protein, Strand, Transcript};

/// Everything a pipeline run produces for one dataset. Sequences are always
/// stored in full.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResultRecord {
    identifier: DatasetIdentifier,
    strands: [Strand; 3],
    transcript: Transcript,
    protein: Protein,
}

impl ResultRecord {
    #[must_use]
    pub fn new(
        identifier: DatasetIdentifier,
        strands: [Strand; 3],
        transcript: Transcript,
        protein: Protein,
    ) -> Self {
        Self {
            identifier,
            strands,
            transcript,
            protein,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &DatasetIdentifier {
        &self.identifier
    }

    #[must_use]
    pub fn strand(&self, reference: ReferenceId) -> &Strand {
        &self.strands[reference.index()]
    }

    #[must_use]
    pub fn strands(&self) -> &[Strand; 3] {
        &self.strands
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn protein(&self) -> &Protein {
        &self.protein
    }

    pub fn write<W: Write>(&self, writer: W, format: ExportFormat) -> anyhow::Result<()> {
        let record = SerializableResultRecord::from(self);
        match format {
            ExportFormat::Json => record.write_json(writer),
            ExportFormat::MessagePack => record.write_msgpack(writer),
        }
    }

    pub fn read<R: Read>(reader: R, format: ExportFormat) -> anyhow::Result<ResultRecord> {
        let record = match format {
            ExportFormat::Json => SerializableResultRecord::read_json(reader)?,
            ExportFormat::MessagePack => SerializableResultRecord::read_msgpack(reader)?,
        };
        Ok(record.into())
    }
}

/// Supported result export formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExportFormat {
    /// Pretty-printed JSON list with a single record.
    Json,
    /// MessagePack list with a single record, fields stored by name.
    MessagePack,
}

impl ExportFormat {
    pub const VALUES: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::MessagePack];

    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::MessagePack => "msgpack",
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, ExportFormat::MessagePack)
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Flat key/value form of [`ResultRecord`] used by the export formats.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SerializableResultRecord {
    #[serde(rename = "Dataset Identifier")]
    dataset_identifier: String,
    #[serde(rename = "DNA1")]
    dna1: String,
    #[serde(rename = "DNA2")]
    dna2: String,
    #[serde(rename = "DNA3")]
    dna3: String,
    #[serde(rename = "mRNA")]
    mrna: String,
    #[serde(rename = "Protein")]
    protein: String,
}

impl SerializableResultRecord {
    const JSON_INDENT: &'static [u8] = b"    ";

    pub fn write_json<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(Self::JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        [self].serialize(&mut serializer)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_msgpack<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        [self].serialize(&mut rmp_serde::Serializer::new(&mut writer).with_struct_map())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_json<R: Read>(reader: R) -> anyhow::Result<SerializableResultRecord> {
        let records: Vec<SerializableResultRecord> = serde_json::from_reader(reader)?;
        Self::single(records)
    }

    pub fn read_msgpack<R: Read>(reader: R) -> anyhow::Result<SerializableResultRecord> {
        let records: Vec<SerializableResultRecord> = rmp_serde::from_read(reader)?;
        Self::single(records)
    }

    fn single(records: Vec<SerializableResultRecord>) -> anyhow::Result<SerializableResultRecord> {
        let count = records.len();
        let mut records = records.into_iter();
        match (records.next(), count) {
            (Some(record), 1) => Ok(record),
            _ => anyhow::bail!("Expected exactly one result record, found {}", count),
        }
    }
}

impl From<&ResultRecord> for SerializableResultRecord {
    fn from(record: &ResultRecord) -> Self {
        let [dna1, dna2, dna3] = record.strands.clone().map(Strand::into_string);
        Self {
            dataset_identifier: record.identifier.str().to_owned(),
            dna1,
            dna2,
            dna3,
            mrna: record.transcript.str().to_owned(),
            protein: record.protein.str().to_owned(),
        }
    }
}

impl From<SerializableResultRecord> for ResultRecord {
    fn from(record: SerializableResultRecord) -> Self {
        Self::new(
            record.dataset_identifier.into(),
            [record.dna1.into(), record.dna2.into(), record.dna3.into()],
            record.mrna.into(),
            record.protein.into(),
        )
    }
}
