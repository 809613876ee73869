use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use meshannounce_neighbors::PeerId;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct EncodeOutput {
    pub neighbors: Vec<PeerId>,
    pub record_len: usize,
    pub record: String,
}

/// `neighbors` is `null` when no record was found and `[]` for an empty one.
#[derive(Serialize)]
pub struct DecodeOutput {
    pub found: bool,
    pub count: usize,
    pub neighbors: Option<Vec<PeerId>>,
}

#[derive(Serialize)]
pub struct RecordOutput {
    pub offset: usize,
    pub tag: u8,
    pub tag_name: &'static str,
    pub length: usize,
    pub wire_size: usize,
    pub value: String,
}

#[derive(Serialize)]
pub struct InspectOutput {
    pub payload_len: usize,
    pub records: Vec<RecordOutput>,
    pub truncated: bool,
    /// Offset of the record that ran past the end of the payload.
    pub truncated_at: Option<usize>,
}

pub fn print_encode(out: &EncodeOutput, raw: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = neighbor_table(&out.neighbors);
            table.add_row(vec!["RECORD".to_string(), out.record.clone()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "neighbors={} size={} record={}",
                out.neighbors.len(),
                out.record_len,
                out.record
            );
        }
        OutputFormat::Raw => print_raw(raw),
    }
}

pub fn print_decode(out: &DecodeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => match &out.neighbors {
            Some(ids) => println!("{}", neighbor_table(ids)),
            None => println!("no direct-neighbor record"),
        },
        OutputFormat::Pretty => match &out.neighbors {
            Some(ids) => {
                let list = ids
                    .iter()
                    .map(PeerId::to_hex)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("found=true count={} neighbors=[{}]", out.count, list);
            }
            None => println!("found=false"),
        },
        OutputFormat::Raw => {
            for id in out.neighbors.iter().flatten() {
                println!("{id}");
            }
        }
    }
}

pub fn print_inspect(out: &InspectOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OFFSET", "TAG", "NAME", "LEN", "VALUE"]);
            for record in &out.records {
                table.add_row(vec![
                    record.offset.to_string(),
                    format!("{:#04x}", record.tag),
                    record.tag_name.to_string(),
                    record.length.to_string(),
                    record.value.clone(),
                ]);
            }
            println!("{table}");
            if let Some(offset) = out.truncated_at {
                println!("scan stopped at a truncated record (offset {offset})");
            }
        }
        OutputFormat::Pretty => {
            for record in &out.records {
                println!(
                    "offset={} tag={:#04x} ({}) len={} value={}",
                    record.offset, record.tag, record.tag_name, record.length, record.value
                );
            }
            println!("records={} truncated={}", out.records.len(), out.truncated);
        }
        OutputFormat::Raw => {
            for record in &out.records {
                println!("{:02x} {}", record.tag, record.value);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn neighbor_table(ids: &[PeerId]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "PEER ID"]);
    for (index, id) in ids.iter().enumerate() {
        table.add_row(vec![index.to_string(), id.to_hex()]);
    }
    table
}
