use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use dbcode::params::serializer::SerializableParameterSet;
use dbcode::params::ParameterSet;

use crate::cli::ParameterMode;
use crate::opts::OutputTarget;
use crate::PROGRESS_BAR;

/// Derives parameters, prints their listing and optionally saves them. The
/// listing goes to the standard output unless the parameter file does.
pub(crate) fn params(mode: &ParameterMode, output: Option<&OutputTarget>) -> anyhow::Result<()> {
    let params = mode
        .to_input()
        .and_then(|input| input.derive())
        .context("Could not derive parameters")?;

    if let Some(output) = output {
        let mut data = Vec::new();
        SerializableParameterSet::write_params(&params, &mut data)
            .context("Could not serialize the parameter set")?;
        output.write_all(&data)?;
    }

    PROGRESS_BAR.finish();
    if listing_to_stdout(output) {
        print!("{}", params);
    } else {
        PROGRESS_BAR.println(params.to_string());
    }

    Ok(())
}

fn listing_to_stdout(output: Option<&OutputTarget>) -> bool {
    !output.map_or(false, OutputTarget::is_stdout)
}

/// Loads the parameter set from `file` or derives it from `mode`; exactly
/// one of them must be given.
pub(crate) fn resolve_params(
    file: &Option<PathBuf>,
    mode: &Option<ParameterMode>,
) -> anyhow::Result<ParameterSet> {
    match (file, mode) {
        (Some(path), None) => read_params_file(path),
        (None, Some(mode)) => mode
            .to_input()
            .and_then(|input| input.derive())
            .context("Could not derive parameters"),
        (Some(_), Some(_)) => bail!("Use either --params or a parameter mode, not both"),
        (None, None) => bail!("Parameters are required; use --params or a parameter mode"),
    }
}

fn read_params_file(path: &Path) -> anyhow::Result<ParameterSet> {
    let file = File::open(path)
        .with_context(|| format!("Could not open parameter file {}", path.display()))?;

    SerializableParameterSet::read_params(BufReader::new(file))
        .with_context(|| format!("Invalid parameter file {}", path.display()))
}
