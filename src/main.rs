// src/main.rs
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use semantic_chunker::monitoring::{init_tracing, MonitoringConfig};
use semantic_chunker::{
    ChunkerResult, ChunkingOptions, ChunkingStats, SemanticChunker, TextChunk,
    DEFAULT_BASE_FONT_SIZE,
};

/// Split text into typed display chunks and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "semantic-chunker", version)]
struct Cli {
    /// Text file to chunk; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// JSON options file (camelCase keys). Environment variables are used otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include each chunk's style descriptor
    #[arg(long)]
    styles: bool,

    /// Base font size for style descriptors, in px
    #[arg(long, default_value_t = DEFAULT_BASE_FONT_SIZE)]
    base_size: f32,

    /// Wrap output as {"chunks": [...], "stats": {...}}
    #[arg(long)]
    stats: bool,

    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct StyledChunk<'a> {
    #[serde(flatten)]
    chunk: &'a TextChunk,
    #[serde(skip_serializing_if = "Option::is_none")]
    styles: Option<String>,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    chunks: &'a [StyledChunk<'a>],
    stats: &'a ChunkingStats,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = match init_tracing(&MonitoringConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Chunking failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ChunkerResult<()> {
    let options = match &cli.config {
        Some(path) => ChunkingOptions::from_json_file(path)?,
        None => ChunkingOptions::from_env()?,
    };
    let text = read_input(cli.input.as_deref())?;

    let chunker = SemanticChunker::new(options);
    let report = chunker.chunk_text_with_stats(&text);
    info!(chunks = report.chunks.len(), merges = report.stats.merges, "Chunking complete");

    let chunks: Vec<StyledChunk> = report
        .chunks
        .iter()
        .map(|chunk| StyledChunk {
            chunk,
            styles: cli
                .styles
                .then(|| chunker.chunk_styles(chunk, cli.base_size)),
        })
        .collect();

    if cli.stats {
        write_json(
            &ReportOutput {
                chunks: &chunks,
                stats: &report.stats,
            },
            cli.pretty,
        )
    } else {
        write_json(&chunks, cli.pretty)
    }
}

fn read_input(path: Option<&Path>) -> ChunkerResult<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ChunkerResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
