use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

use meshannounce_neighbors::DEFAULT_MAX_NEIGHBORS;

use crate::exit::{hex_error, io_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode peer IDs into a direct-neighbor record.
    Encode(EncodeArgs),
    /// Find and decode the direct-neighbor record in an announce payload.
    Decode(DecodeArgs),
    /// List every record in an announce payload.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Peer IDs, ideally 16 hex characters each. Malformed IDs are zero-padded.
    pub peer_ids: Vec<String>,
    /// Keep at most this many neighbors after removing duplicates.
    #[arg(long, default_value_t = DEFAULT_MAX_NEIGHBORS)]
    pub max_neighbors: usize,
    /// Reject any ID that is not exactly 16 hex characters.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// Announce payload as hex (whitespace and a leading 0x are ignored).
    #[arg(long)]
    pub hex: Option<String>,
    /// Read the raw announce payload from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    pub fn resolve(&self) -> CliResult<Vec<u8>> {
        if let Some(text) = &self.hex {
            return parse_hex(text);
        }
        if let Some(path) = &self.file {
            return fs::read(path)
                .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
        }
        Ok(Vec::new())
    }
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).map_err(|err| hex_error("--hex is not valid hex", err))
}
