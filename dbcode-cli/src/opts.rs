use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use atty::Stream;
use dbcode::series::reader::SeriesReader;
use dbcode::series::Series;
use log::info;

const STREAM_PATH: &str = "-";

pub fn input_stream(path: &str) -> Result<InputStream, String> {
    let result = InputStream {
        path: PathBuf::from(path),
    };

    Ok(result)
}

#[derive(Debug, Clone)]
pub struct InputStream {
    path: PathBuf,
}

impl Display for InputStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl InputStream {
    pub fn as_reader(&self) -> anyhow::Result<InputReader> {
        InputReader::from_path(&self.path)
            .with_context(|| format!("Could not open input file {}", self))
    }
}

#[derive(Debug)]
pub enum InputReader {
    Stdin(io::Stdin),
    File { file: File, path: PathBuf },
}

impl InputReader {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let is_stdin = path.to_string_lossy() == STREAM_PATH;

        let val = if is_stdin {
            Self::Stdin(io::stdin())
        } else {
            let file = File::open(path)?;

            Self::File {
                file,
                path: path.to_owned(),
            }
        };
        Ok(val)
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            InputReader::Stdin(_) => None,
            InputReader::File { path, .. } => Some(path),
        }
    }

    #[must_use]
    pub fn into_read(self) -> Box<dyn Read + Send> {
        match self {
            InputReader::Stdin(stdin) => Box::new(stdin),
            InputReader::File { file, .. } => Box::new(file),
        }
    }

    /// Consumes the input and parses it as a series file.
    pub fn read_series(self) -> anyhow::Result<Series> {
        let series = SeriesReader::new(BufReader::new(self.into_read()))
            .read_series()
            .context("Could not read the series file")?;
        info!(
            "Dataset `{}`: {} samples ({}, {})",
            series.identifier(),
            series.len(),
            series.metadata().data_type,
            series.metadata().condition
        );

        Ok(series)
    }
}

/// Whether `path` stands for the standard input or output.
pub fn is_stream(path: &Path) -> bool {
    path.to_string_lossy() == STREAM_PATH
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Binary,
}

/// Destination of a command's output. The destination is only opened (and,
/// for files, truncated) once the whole output is ready to be written.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    /// `output`, or the input path with `new_extension` when no output was
    /// given. Reading from the standard input defaults to the standard
    /// output.
    pub fn from_path_and_input(
        output: &Option<PathBuf>,
        input: &InputReader,
        new_extension: &str,
        mode: OutputMode,
    ) -> anyhow::Result<Self> {
        let path = match output {
            Some(path) => path.clone(),
            None => input
                .file_path()
                .map(|path| path.with_extension(new_extension))
                .unwrap_or_else(|| PathBuf::from(STREAM_PATH)),
        };

        Self::new(path, mode)
    }

    /// `output`, or the standard output when no output was given.
    pub fn from_optional_path(output: &Option<PathBuf>, mode: OutputMode) -> anyhow::Result<Self> {
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from(STREAM_PATH));

        Self::new(path, mode)
    }

    pub fn new(path: PathBuf, mode: OutputMode) -> anyhow::Result<Self> {
        if mode == OutputMode::Binary && is_stream(&path) && atty::is(Stream::Stdout) {
            bail!("Cannot output binary file to stdout when running in terminal; please use -o option instead or pipe the standard output");
        }
        info!("Output file: {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_stdout(&self) -> bool {
        is_stream(&self.path)
    }

    /// Writes `data` in one go, replacing any previous file contents.
    pub fn write_all(&self, data: &[u8]) -> anyhow::Result<()> {
        let mut writer = OutputWriter::open(self)?.into_write();
        writer
            .write_all(data)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Could not write output file {}", self.path.display()))
    }
}

#[derive(Debug)]
pub enum OutputWriter {
    Stdout(io::Stdout),
    File(File),
}

impl OutputWriter {
    fn open(target: &OutputTarget) -> anyhow::Result<Self> {
        let writer = if target.is_stdout() {
            Self::Stdout(io::stdout())
        } else {
            let file = File::create(&target.path).with_context(|| {
                format!("Could not create output file {}", target.path.display())
            })?;
            Self::File(file)
        };

        Ok(writer)
    }

    pub fn into_write(self) -> Box<dyn Write + Send> {
        match self {
            OutputWriter::Stdout(stdout) => Box::new(stdout),
            OutputWriter::File(file) => Box::new(file),
        }
    }
}
