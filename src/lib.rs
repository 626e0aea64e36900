//! Semantic text chunking for progressive display of chat responses.
//!
//! Splits a complete text into typed display chunks (headings, paragraphs,
//! list items, code blocks, quotes, tables, emphasis, transitions), attaches
//! weight/spacing presentation and type metadata, and merges undersized
//! neighbours.
//!
//! ```rust
//! use semantic_chunker::{ChunkType, SemanticChunker};
//!
//! let chunker = SemanticChunker::with_default();
//! let chunks = chunker.chunk_text("### Title\n\nSome text about the title.");
//!
//! assert_eq!(chunks[0].chunk_type, ChunkType::Heading);
//! assert_eq!(chunks[0].metadata.heading_level, Some(3));
//! ```

pub mod chunker;
pub mod config;
pub mod errors;
pub mod monitoring;
pub mod stream;
pub mod styles;
pub mod types;

pub use chunker::{chunk_text, Chunker, ChunkingReport, ChunkingStats, SemanticChunker};
pub use config::ChunkingOptions;
pub use errors::{ChunkerError, ChunkerResult};
pub use stream::TurnBuffer;
pub use styles::{chunk_styles, DEFAULT_BASE_FONT_SIZE};
pub use types::{ChunkMetadata, ChunkType, FontWeight, Spacing, TextChunk};
