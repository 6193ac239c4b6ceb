// src/lib.rs

#![doc = "CSV front-end for `nodeset-rs`."]
#![doc = ""]
#![doc = "- `read_rows` / `read_rows_from_path`: CSV with a header line into `RawRow`s."]
#![doc = "- `load_config`: a JSON `BuildConfig`."]
#![doc = "- `CliArgs` (clap) and `run`: the `csv2nodeset` command."]

use clap::Parser;
use log::{debug, error, info};
use nodeset_rs::{BuildConfig, Diagnostic, NodeSetError, RawRow, compile};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Errors of the CSV front-end and the command-line driver.
#[derive(Debug)]
pub enum CsvError {
    /// The CSV input could not be read or decoded.
    Csv(csv::Error),
    Io(io::Error),
    /// The JSON configuration file is invalid.
    Config(serde_json::Error),
    /// The build itself failed.
    Build(NodeSetError),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Csv(e) => write!(f, "CSV error: {}", e),
            CsvError::Io(e) => write!(f, "I/O error: {}", e),
            CsvError::Config(e) => write!(f, "Invalid configuration: {}", e),
            CsvError::Build(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Csv(e) => Some(e),
            CsvError::Io(e) => Some(e),
            CsvError::Config(e) => Some(e),
            CsvError::Build(e) => Some(e),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(e: csv::Error) -> Self {
        CsvError::Csv(e)
    }
}

impl From<io::Error> for CsvError {
    fn from(e: io::Error) -> Self {
        CsvError::Io(e)
    }
}

impl From<serde_json::Error> for CsvError {
    fn from(e: serde_json::Error) -> Self {
        CsvError::Config(e)
    }
}

impl From<NodeSetError> for CsvError {
    fn from(e: NodeSetError) -> Self {
        CsvError::Build(e)
    }
}

/// One data line, keyed by the header names. Absent columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRecord {
    name: String,
    #[serde(rename = "base type")]
    base_type: String,
    parent: String,
    #[serde(rename = "instance type")]
    instance_type: String,
    #[serde(rename = "child values")]
    child_values: String,
    #[serde(rename = "node id")]
    node_id: String,
    #[serde(rename = "data type")]
    data_type: String,
    value: String,
}

impl CsvRecord {
    fn into_raw_row(self, line: usize) -> RawRow {
        RawRow {
            line,
            name: self.name,
            base_type: self.base_type,
            parent: self.parent,
            instance_type: self.instance_type,
            child_values: self.child_values,
            node_id: self.node_id,
            data_type: self.data_type,
            value: self.value,
        }
    }
}

/// Reads every data line of a CSV document with a header line.
///
/// Fields are trimmed. Each row keeps the 1-based line it started on.
pub fn read_rows(reader: impl io::Read) -> Result<Vec<RawRow>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    debug!("CSV columns: {:?}", headers.iter().collect::<Vec<_>>());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let parsed: CsvRecord = record.deserialize(Some(&headers))?;
        rows.push(parsed.into_raw_row(line));
    }
    info!("Read {} rows.", rows.len());
    Ok(rows)
}

pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRow>, CsvError> {
    let path = path.as_ref();
    let file = File::open(path).inspect_err(|e| error!("Cannot open {}: {}", path.display(), e))?;
    read_rows(BufReader::new(file))
}

/// Loads a `BuildConfig` from JSON. Every field is optional.
pub fn load_config(path: impl AsRef<Path>) -> Result<BuildConfig, CsvError> {
    let file = File::open(path.as_ref())?;
    let config = serde_json::from_reader(BufReader::new(file))?;
    Ok(config)
}

/// Compiles a CSV address-space model into an OPC UA NodeSet2 XML document.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "csv2nodeset")]
#[command(about = "Compiles a CSV address-space model into a NodeSet2 XML document")]
pub struct CliArgs {
    /// Input CSV file with a header line
    pub input: PathBuf,
    /// Output XML file
    pub output: PathBuf,
    /// Fail on parent names that match no object instead of passing them through
    #[arg(long)]
    pub strict: bool,
    /// JSON build configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Reads, compiles and writes. Returns the build diagnostics.
pub fn run(args: &CliArgs) -> Result<Vec<Diagnostic>, CsvError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => BuildConfig::default(),
    };
    if args.strict {
        config = config.strict();
    }

    let rows = read_rows_from_path(&args.input)?;
    let output = compile(&rows, &config)?;
    output.node_set.write_to_path(&args.output)?;
    info!(
        "{} -> {}: {} nodes, {} diagnostic(s).",
        args.input.display(),
        args.output.display(),
        output.node_set.node_count(),
        output.diagnostics.len()
    );
    Ok(output.diagnostics)
}
