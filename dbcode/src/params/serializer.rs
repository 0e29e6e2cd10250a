use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::params::{ParameterSet, ReferenceId, ReferencePoint, Thresholds};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SerializableReferencePoint {
    reference: ReferenceId,
    value: f64,
    #[serde(flatten)]
    thresholds: Thresholds,
}

impl From<&ReferencePoint> for SerializableReferencePoint {
    fn from(reference: &ReferencePoint) -> Self {
        Self {
            reference: reference.id(),
            value: reference.value(),
            thresholds: *reference.thresholds(),
        }
    }
}

/// An intermediate structure that can be converted to and from
/// [`ParameterSet`], and additionally can be serialized and deserialized.
///
/// Converting back into a [`ParameterSet`] runs full validation, so a
/// hand-edited file cannot produce unordered thresholds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SerializableParameterSet {
    references: Vec<SerializableReferencePoint>,
}

impl SerializableParameterSet {
    pub fn read_params<R: Read>(reader: R) -> anyhow::Result<ParameterSet> {
        Self::read(reader)?.into_params()
    }

    pub fn read<R: Read>(reader: R) -> anyhow::Result<SerializableParameterSet> {
        let result = serde_json::from_reader(reader)?;
        Ok(result)
    }

    pub fn write_params<W: Write>(params: &ParameterSet, writer: W) -> anyhow::Result<()> {
        SerializableParameterSet::from(params).write(writer)
    }

    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn into_params(self) -> anyhow::Result<ParameterSet> {
        let mut values = [None; 3];
        for reference in self.references {
            let slot = &mut values[reference.reference.index()];
            if slot.is_some() {
                anyhow::bail!("Reference {} defined more than once", reference.reference);
            }
            *slot = Some((reference.value, reference.thresholds));
        }

        let mut complete = [(0.0, Thresholds::new(0.0, 0.0, 0.0, 0.0)); 3];
        for (id, value) in ReferenceId::VALUES.into_iter().zip(values) {
            complete[id.index()] =
                value.ok_or_else(|| anyhow::anyhow!("Reference {} is missing", id))?;
        }

        Ok(ParameterSet::new(complete)?)
    }
}

impl From<&ParameterSet> for SerializableParameterSet {
    fn from(params: &ParameterSet) -> Self {
        Self {
            references: params.iter().map(SerializableReferencePoint::from).collect(),
        }
    }
}
