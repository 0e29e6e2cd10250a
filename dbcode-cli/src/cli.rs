use std::path::PathBuf;

use clap::{Parser, PossibleValue, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dbcode::error::{EncodeError, EncodeResult};
use dbcode::params::{ParameterInput, ReferenceId};
use dbcode::record::ExportFormat;
use lazy_static::lazy_static;

use crate::opts::{input_stream, InputStream};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Don't display a progress spinner
    #[clap(long, global = true, value_parser)]
    pub no_progress: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug)]
pub struct ExportFormatCli {
    pub inner: ExportFormat,
}

impl ExportFormatCli {
    #[must_use]
    pub fn new(inner: ExportFormat) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn variants() -> Vec<Self> {
        ExportFormat::VALUES
            .iter()
            .map(|&inner| ExportFormatCli::new(inner))
            .collect()
    }
}

lazy_static! {
    static ref EXPORT_FORMAT_CLI_VARIANTS: Vec<ExportFormatCli> = ExportFormatCli::variants();
}

impl ValueEnum for ExportFormatCli {
    fn value_variants<'a>() -> &'a [Self] {
        &EXPORT_FORMAT_CLI_VARIANTS
    }

    fn to_possible_value<'a>(&self) -> Option<PossibleValue<'a>> {
        let value = PossibleValue::new(self.inner.extension());
        Some(value)
    }
}

impl From<&ExportFormatCli> for ExportFormat {
    fn from(format: &ExportFormatCli) -> Self {
        format.inner
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReferenceIdCli {
    R1,
    R2,
    R3,
}

impl From<ReferenceIdCli> for ReferenceId {
    fn from(reference: ReferenceIdCli) -> Self {
        match reference {
            ReferenceIdCli::R1 => ReferenceId::R1,
            ReferenceIdCli::R2 => ReferenceId::R2,
            ReferenceIdCli::R3 => ReferenceId::R3,
        }
    }
}

/// The ways of describing reference points. Values are kept as text and
/// parsed by the library, so that parse errors name the offending field.
#[derive(Subcommand, Debug, Clone)]
pub enum ParameterMode {
    /// R1 = μ, R2 = μ + 4σ, R3 = μ - 4σ; thresholds 2.5σ, 1.5σ, -1.5σ, -2.5σ
    Default {
        /// Base value μ
        #[clap(long, value_parser, allow_hyphen_values = true)]
        mu: String,

        /// Spread σ
        #[clap(long, value_parser, allow_hyphen_values = true)]
        sigma: String,
    },

    /// R1 = μ, R2 = μ + mσ, R3 = μ - nσ; thresholds ασ, βσ, γσ, δσ
    Modify {
        /// Base value μ
        #[clap(long, value_parser, allow_hyphen_values = true)]
        mu: String,

        /// Spread σ
        #[clap(long, value_parser, allow_hyphen_values = true)]
        sigma: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        m: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        n: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        alpha: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        beta: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        gamma: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        delta: String,
    },

    /// One reference value and threshold set used for R1, R2 and R3
    DirectSame {
        #[clap(long, value_parser, allow_hyphen_values = true)]
        r: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        a: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        b: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        c: String,

        #[clap(long, value_parser, allow_hyphen_values = true)]
        d: String,
    },

    /// Independent values for every reference point, each given as
    /// `R,a,b,c,d`
    DirectDifferent {
        #[clap(long, value_parser, allow_hyphen_values = true, value_name = "R,a,b,c,d")]
        r1: String,

        #[clap(long, value_parser, allow_hyphen_values = true, value_name = "R,a,b,c,d")]
        r2: String,

        #[clap(long, value_parser, allow_hyphen_values = true, value_name = "R,a,b,c,d")]
        r3: String,
    },
}

impl ParameterMode {
    pub fn to_input(&self) -> EncodeResult<ParameterInput> {
        match self {
            ParameterMode::Default { mu, sigma } => ParameterInput::default_from_raw(mu, sigma),
            ParameterMode::Modify {
                mu,
                sigma,
                m,
                n,
                alpha,
                beta,
                gamma,
                delta,
            } => ParameterInput::modify_from_raw(
                mu,
                sigma,
                [
                    m.as_str(),
                    n.as_str(),
                    alpha.as_str(),
                    beta.as_str(),
                    gamma.as_str(),
                    delta.as_str(),
                ],
            ),
            ParameterMode::DirectSame { r, a, b, c, d } => {
                ParameterInput::direct_same_from_raw([
                    r.as_str(),
                    a.as_str(),
                    b.as_str(),
                    c.as_str(),
                    d.as_str(),
                ])
            }
            ParameterMode::DirectDifferent { r1, r2, r3 } => {
                ParameterInput::direct_different_from_raw([
                    split_reference(ReferenceId::R1, r1)?,
                    split_reference(ReferenceId::R2, r2)?,
                    split_reference(ReferenceId::R3, r3)?,
                ])
            }
        }
    }
}

fn split_reference(reference: ReferenceId, raw: &str) -> EncodeResult<[&str; 5]> {
    let values: Vec<&str> = raw.split(',').collect();
    values.try_into().map_err(|_| EncodeError::Parse {
        field: reference.name().to_owned(),
        value: raw.to_owned(),
    })
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive a parameter set and print it
    Params {
        #[clap(subcommand)]
        mode: ParameterMode,

        /// Save the parameter set as JSON to given path; `-` is the standard
        /// output
        #[clap(short, long, global = true, value_parser)]
        output: Option<PathBuf>,
    },

    /// Encode a series file into DNA strands, mRNA and protein
    Encode {
        /// Input series file to read; `-` is the standard input
        #[clap(value_parser = input_stream)]
        input: InputStream,

        /// Load the parameter set from given JSON file instead of deriving it
        #[clap(long, global = true, value_parser, value_name = "FILE")]
        params: Option<PathBuf>,

        #[clap(subcommand)]
        mode: Option<ParameterMode>,

        /// Output file path; `-` is the standard output
        #[clap(short, long, global = true, value_parser)]
        output: Option<PathBuf>,

        /// Result export format
        #[clap(long, global = true, arg_enum, default_value = "json")]
        format: ExportFormatCli,

        /// Print a truncated preview of the result
        #[clap(long, global = true, value_parser)]
        preview: bool,
    },

    /// Write the differences against one reference point as CSV
    Differences {
        /// Input series file to read; `-` is the standard input
        #[clap(value_parser = input_stream)]
        input: InputStream,

        /// Reference point to subtract
        #[clap(long, arg_enum, value_parser)]
        reference: ReferenceIdCli,

        /// Load the parameter set from given JSON file instead of deriving it
        #[clap(long, global = true, value_parser, value_name = "FILE")]
        params: Option<PathBuf>,

        #[clap(subcommand)]
        mode: Option<ParameterMode>,

        /// Output file path; `-` is the standard output
        #[clap(short, long, global = true, value_parser)]
        output: Option<PathBuf>,
    },

    /// Print the classification bands and the codon table
    Rules,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use dbcode::error::EncodeError;
    use dbcode::params::{ParameterInput, ReferenceId};

    use crate::cli::{split_reference, Cli, Commands, ParameterMode, ReferenceIdCli};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_modify_negative_values() {
        let cli = Cli::try_parse_from([
            "dbcode", "params", "modify", "--mu", "-1", "--sigma", "0.5", "--m", "4", "--n", "4",
            "--alpha", "2.5", "--beta", "1.5", "--gamma", "-1.5", "--delta", "-2.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Params { mode, output } => {
                assert!(output.is_none());
                assert!(matches!(
                    mode.to_input().unwrap(),
                    ParameterInput::Modify { mu, .. } if mu == -1.0
                ));
            }
            _ => panic!("Expected params command"),
        }
    }

    #[test]
    fn test_parse_encode_with_mode() {
        let cli = Cli::try_parse_from([
            "dbcode", "encode", "series.txt", "default", "--mu", "3", "--sigma", "1", "-o", "-",
        ])
        .unwrap();

        match cli.command {
            Commands::Encode {
                params,
                mode,
                output,
                ..
            } => {
                assert!(params.is_none());
                assert!(matches!(mode, Some(ParameterMode::Default { .. })));
                assert_eq!(output.unwrap().to_string_lossy(), "-");
            }
            _ => panic!("Expected encode command"),
        }
    }

    #[test]
    fn test_split_reference() {
        assert_eq!(
            split_reference(ReferenceId::R1, "0,2,1,-1,-2").unwrap(),
            ["0", "2", "1", "-1", "-2"]
        );
        assert_eq!(
            split_reference(ReferenceId::R2, "0,2,1").unwrap_err(),
            EncodeError::Parse {
                field: "R2".to_owned(),
                value: "0,2,1".to_owned(),
            }
        );
        assert_eq!(ReferenceId::from(ReferenceIdCli::R3), ReferenceId::R3);
    }
}
