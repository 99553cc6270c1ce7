use std::path::PathBuf;
use thiserror::Error;

use super::worker_status::WorkerStatus;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
    #[error("Config contains duplicate stream name: {0}")]
    DuplicateStream(String),
    #[error("Config has no streams to align")]
    NoStreams,
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Could not load series because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Series failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Series failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Series failed to parse a number: {0}")]
    ParsingError(#[from] std::num::ParseFloatError),
    #[error("Series file {0:?} has the incorrect format; expected a time column plus at least one value column")]
    BadFileFormat(PathBuf),
    #[error("Series {0} contains no samples")]
    EmptySeries(String),
    #[error("Series {0} has a decreasing timestamp at sample {1}")]
    NonMonotonic(String, usize),
}

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("Cannot align against empty series {0}")]
    EmptySeries(String),
    #[error("Series {0} has {1} samples; interpolation requires at least two")]
    DegenerateSeries(String, usize),
}

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("AlignedWriter failed because output directory {0:?} does not exist")]
    BadOutputPath(PathBuf),
    #[error("AlignedWriter failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("AlignedWriter failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Processor failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to Series error: {0}")]
    SeriesError(#[from] SeriesError),
    #[error("Processor failed due to Align error: {0}")]
    AlignError(#[from] AlignError),
    #[error("Processor failed due to AlignedWriter error: {0}")]
    WriterError(#[from] WriterError),
    #[error("Processor failed due to Send error: {0}")]
    SendError(#[from] std::sync::mpsc::SendError<WorkerStatus>),
    #[error("Processor failed due to IO error: {0}")]
    IoError(#[from] std::io::Error),
}
