//! tabulate-html: Render nested JSON tables as HTML
//!
//! Usage:
//!   # Render a {"tables": [...]} request from a file
//!   tabulate-html request.json > tables.html
//!
//!   # Render a bare array of records as one table named "events"
//!   echo '[{"id": 1}, {"id": 2, "tags": ["a"]}]' | tabulate-html --records events
//!
//!   # One record per line, fragment only, written to a file
//!   tabulate-html --records events --ndjson --fragment events.jsonl -o events.html

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use tabulate::{wrap_document, FlattenConfig, RenderConfig, Table, TableRenderer, TablesRequest};

#[derive(Parser, Debug)]
#[command(name = "tabulate-html")]
#[command(about = "Render nested JSON tables as HTML", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Treat input as records of a single table with this name instead of
    /// a {"tables": [...]} request
    #[arg(long, value_name = "NAME")]
    records: Option<String>,

    /// Process newline-delimited JSON (one record per line)
    #[arg(long, requires = "records")]
    ndjson: bool,

    /// Emit only the table fragments, without the page shell
    #[arg(long)]
    fragment: bool,

    /// Don't escape markup characters in names, headers and cells
    #[arg(long)]
    raw: bool,

    /// Seed prefix for flattened paths (default: "SA")
    #[arg(long)]
    root_marker: Option<String>,

    /// Separator between object keys in paths (default: ".")
    #[arg(long)]
    separator: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Build config
    let mut flatten = FlattenConfig::default();
    if let Some(marker) = args.root_marker {
        flatten.root_marker = marker;
    }
    if let Some(sep) = args.separator {
        flatten.separator = sep;
    }
    let config = RenderConfig {
        escape_html: !args.raw,
        flatten,
        ..RenderConfig::default()
    };

    let mut reader = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file)) as Box<dyn Read>
    } else {
        Box::new(std::io::stdin()) as Box<dyn Read>
    };
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    let tables = match args.records {
        Some(name) => vec![read_records(name, content, args.ndjson)?],
        None => read_request(content)?.tables,
    };
    log::info!("rendering {} tables", tables.len());

    let renderer = TableRenderer::new(config);
    let fragments = renderer.render_tables(&tables);
    let html = if args.fragment {
        fragments
    } else {
        wrap_document(&fragments)
    };

    if let Some(path) = args.output {
        let mut file = File::create(&path).with_context(|| format!("Failed to create {}", path))?;
        file.write_all(html.as_bytes())
            .context("Failed to write output")?;
    } else {
        let mut stdout = std::io::stdout();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

/// Parse a tables request, SIMD first with a serde_json fallback
fn read_request(mut content: Vec<u8>) -> Result<TablesRequest> {
    let original = content.clone();
    match simd_json::serde::from_slice::<TablesRequest>(&mut content) {
        Ok(request) => Ok(request),
        Err(_) => TablesRequest::from_slice(&original).context("Failed to parse tables request"),
    }
}

/// Collect the records of one table from a JSON array, a single value,
/// or newline-delimited JSON
fn read_records(name: String, mut content: Vec<u8>, ndjson: bool) -> Result<Table> {
    let mut records = Vec::new();

    if ndjson {
        let content_str = std::str::from_utf8(&content).context("Input is not valid UTF-8")?;
        for (line_no, line) in content_str.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse JSON on line {}", line_no + 1))?;
            records.push(value);
        }
        return Ok(Table::new(name, records));
    }

    let original = content.clone();
    let value: Value = match simd_json::serde::from_slice(&mut content) {
        Ok(value) => value,
        Err(_) => serde_json::from_slice(&original).context("Failed to parse JSON")?,
    };

    match value {
        Value::Array(arr) => records.extend(arr),
        other => records.push(other),
    }

    Ok(Table::new(name, records))
}
