use std::path::PathBuf;

use thiserror::Error;

/// A single record whose report or dispatch instant could not be built.
///
/// Row-level only: the analyzer drops the record and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{field} is not a valid value: '{value}'")]
    InvalidField { field: &'static str, value: String },
    #[error("'{0}' is not a calendar timestamp")]
    InvalidTimestamp(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(
        "no analyzable data: {total} records, {unparseable} unparseable, {out_of_range} outside [0, {max_minutes}] minutes"
    )]
    NoAnalyzableData {
        total: usize,
        unparseable: usize,
        out_of_range: usize,
        max_minutes: f64,
    },
}

/// Non-fatal: the report is still written, without the chart section.
#[derive(Debug, Error)]
pub enum ChartRenderError {
    #[error("cannot plot non-finite value {value} for '{label}'")]
    NonFiniteValue { label: String, value: f64 },
    #[error("chart has no bars")]
    Empty,
    #[error("failed to write chart {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
#[error("failed to write report {}: {source}", path.display())]
pub struct ReportWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read incident source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("incident source {} is missing required columns: {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
    #[error("no incident source found for region '{region}'")]
    NotFound { region: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("region label is empty")]
    Empty,
    #[error("region label '{0}' cannot be used in a file name")]
    Unsafe(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
