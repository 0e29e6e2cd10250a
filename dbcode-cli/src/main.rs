#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cmd::{differences, encode, params, rules};
use dbcode::record::ExportFormat;
use human_panic::setup_panic;
use lazy_static::lazy_static;

use crate::logging::init_logging;
use crate::opts::{OutputMode, OutputTarget};
use crate::progress_bar::EncodeProgressBar;

mod cli;
mod cmd;
mod csv_output;
mod logging;
mod opts;
mod progress_bar;

lazy_static! {
    pub(crate) static ref PROGRESS_BAR: EncodeProgressBar = EncodeProgressBar::new();
}

fn main() -> anyhow::Result<()> {
    setup_panic!();

    let cli: Cli = Cli::parse();

    if !cli.no_progress {
        PROGRESS_BAR.show();
    }

    init_logging(cli.verbose.log_level_filter()).expect("Could not initialize logging");

    match &cli.command {
        Commands::Params { mode, output } => {
            let output = output
                .clone()
                .map(|path| OutputTarget::new(path, OutputMode::Text))
                .transpose()?;

            params::params(mode, output.as_ref())?;
        }
        Commands::Encode {
            input,
            params: params_file,
            mode,
            output,
            format,
            preview,
        } => {
            let params = params::resolve_params(params_file, mode)?;
            let format = ExportFormat::from(format);
            let reader = input.as_reader()?;
            let output_mode = if format.is_binary() {
                OutputMode::Binary
            } else {
                OutputMode::Text
            };
            let output = OutputTarget::from_path_and_input(
                output,
                &reader,
                format.extension(),
                output_mode,
            )?;

            PROGRESS_BAR.set_message("Reading series...");
            let series = reader.read_series()?;
            encode::encode(
                series,
                params,
                &output,
                format,
                *preview,
                &*PROGRESS_BAR,
            )
            .context("Failed to encode given file")?;
        }
        Commands::Differences {
            input,
            reference,
            params: params_file,
            mode,
            output,
        } => {
            let params = params::resolve_params(params_file, mode)?;
            let series = input.as_reader()?.read_series()?;
            let output = OutputTarget::from_optional_path(output, OutputMode::Text)?;

            differences::differences(&series, &params, (*reference).into(), &output)
                .context("Failed to compute differences for given file")?;
        }
        Commands::Rules => rules::rules(),
    }

    PROGRESS_BAR.finish();
    Ok(())
}
