use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use uimsg_schema::{Direction, RegistryConfig};

use crate::exit::{io_error, CliError, CliResult};
use crate::output::OutputFormat;

pub mod build;
pub mod check;
pub mod schema;
pub mod types;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every message type in the catalog.
    Types(TypesArgs),
    /// Build a validated envelope from a type and payload.
    Build(BuildArgs),
    /// Validate an encoded envelope.
    Check(CheckArgs),
    /// Print the payload JSON Schema of a message type.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: RegistryConfig) -> CliResult<i32> {
    match command {
        Command::Types(args) => types::run(args, format),
        Command::Build(args) => build::run(args, format, config),
        Command::Check(args) => check::run(args, format, config),
        Command::Schema(args) => schema::run(args, format, config),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DirectionFilter {
    ToUi,
    FromUi,
}

impl DirectionFilter {
    pub fn matches(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (DirectionFilter::ToUi, Direction::ToUi) | (DirectionFilter::FromUi, Direction::FromUi)
        )
    }
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {
    /// Only list messages travelling in this direction.
    #[arg(long)]
    pub direction: Option<DirectionFilter>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Wire tag of the message (e.g. ui-request_pin).
    #[arg(value_name = "TYPE")]
    pub message_type: String,
    /// JSON payload.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read JSON payload from file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
    /// Call identifier to attach to the envelope.
    #[arg(long)]
    pub id: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON envelope. Reads stdin when neither --json nor --file is given.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read JSON envelope from file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Wire tag of the message.
    #[arg(value_name = "TYPE")]
    pub message_type: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse an optional JSON payload given inline or by file.
pub(crate) fn read_payload(
    json: Option<&str>,
    file: Option<&Path>,
) -> CliResult<Option<serde_json::Value>> {
    let text = match (json, file) {
        (Some(json), _) => json.to_string(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => return Ok(None),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|err| CliError::usage(format!("payload is not valid JSON: {err}")))
}

/// Envelope bytes given inline, by file, or on stdin.
pub(crate) fn read_envelope(json: Option<&str>, file: Option<&Path>) -> CliResult<Vec<u8>> {
    match (json, file) {
        (Some(json), _) => Ok(json.as_bytes().to_vec()),
        (None, Some(path)) => std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err)),
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|err| io_error("failed reading stdin", err))?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}
