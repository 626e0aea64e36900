// src/chunker/mod.rs
//! Semantic text chunking
//!
//! Pipeline, run once per complete text:
//! 1. structural analysis (informational)
//! 2. blank-line sectioning, sentence packing for oversized sections
//! 3. classification and metadata extraction per section
//! 4. weight/spacing lookup (done by `TextChunk::new`)
//! 5. merge of undersized neighbours and follow-up annotation

pub mod analysis;
pub mod classify;
pub mod merge;
pub mod sections;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::config::ChunkingOptions;
use crate::errors::ChunkerResult;
use crate::styles;
use crate::types::{ChunkType, TextChunk};

pub use analysis::{analyze_structure, StructureAnalysis};
pub use classify::{classify, extract_metadata};
pub use merge::optimize_boundaries;
pub use sections::{split_sections, Section};

/// Anything that turns a complete text into display chunks.
pub trait Chunker {
    fn chunk_text(&self, text: &str) -> Vec<TextChunk>;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChunkingStats {
    pub input_chars: usize,
    pub sections: usize,
    pub forced_splits: usize,
    pub merges: usize,
    pub chunks: usize,
    pub by_type: BTreeMap<ChunkType, usize>,
    pub analysis: StructureAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkingReport {
    pub chunks: Vec<TextChunk>,
    pub stats: ChunkingStats,
}

/// Stateless chunker: holds read-only options and can be shared freely
/// between threads and reused across calls.
#[derive(Debug, Clone, Default)]
pub struct SemanticChunker {
    options: ChunkingOptions,
}

impl SemanticChunker {
    pub fn new(options: ChunkingOptions) -> Self {
        if !options.merging_enabled() {
            debug!(
                min_chunk_length = options.min_chunk_length,
                max_chunk_length = options.max_chunk_length,
                "minChunkLength exceeds maxChunkLength; merging disabled"
            );
        }
        Self { options }
    }

    pub fn with_default() -> Self {
        Self::new(ChunkingOptions::default())
    }

    pub fn from_env() -> ChunkerResult<Self> {
        Ok(Self::new(ChunkingOptions::from_env()?))
    }

    pub fn options(&self) -> &ChunkingOptions {
        &self.options
    }

    /// Chunk a complete text. Empty or whitespace-only input gives no chunks.
    pub fn chunk_text(&self, text: &str) -> Vec<TextChunk> {
        self.chunk_text_with_stats(text).chunks
    }

    /// Chunk a complete text and report what the pipeline did.
    pub fn chunk_text_with_stats(&self, text: &str) -> ChunkingReport {
        let text = normalize_line_endings(text);

        let analysis = analyze_structure(&text);
        let sections = split_sections(&text, &self.options);
        let forced_splits = sections.iter().filter(|s| s.forced).count();

        let classified: Vec<TextChunk> = sections
            .iter()
            .filter_map(|section| self.build_chunk(section))
            .collect();

        let (chunks, merges) = optimize_boundaries(classified, &self.options);

        let mut by_type = BTreeMap::new();
        for chunk in &chunks {
            *by_type.entry(chunk.chunk_type).or_insert(0usize) += 1;
        }

        let stats = ChunkingStats {
            input_chars: text.chars().count(),
            sections: sections.len(),
            forced_splits,
            merges,
            chunks: chunks.len(),
            by_type,
            analysis,
        };

        debug!(
            input_chars = stats.input_chars,
            sections = stats.sections,
            forced_splits = stats.forced_splits,
            merges = stats.merges,
            chunks = stats.chunks,
            "Chunked text"
        );

        ChunkingReport { chunks, stats }
    }

    /// Style descriptor for `chunk`, using this chunker's font size reduction.
    pub fn chunk_styles(&self, chunk: &TextChunk, base_size: f32) -> String {
        styles::chunk_styles(chunk, base_size, self.options.font_size_reduction)
    }

    fn build_chunk(&self, section: &Section) -> Option<TextChunk> {
        let content = section.content();
        if content.is_empty() {
            return None;
        }

        let chunk_type = classify(&section.raw, &self.options);
        let metadata = extract_metadata(chunk_type, &section.raw);
        trace!(chunk_type = %chunk_type, chars = content.chars().count(), "Classified section");

        Some(TextChunk::new(
            Uuid::new_v4().to_string(),
            content,
            chunk_type,
            metadata,
        ))
    }
}

impl Chunker for SemanticChunker {
    fn chunk_text(&self, text: &str) -> Vec<TextChunk> {
        SemanticChunker::chunk_text(self, text)
    }
}

/// One-shot chunking with explicit options.
pub fn chunk_text(text: &str, options: &ChunkingOptions) -> Vec<TextChunk> {
    SemanticChunker::new(options.clone()).chunk_text(text)
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
