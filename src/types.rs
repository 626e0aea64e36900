// src/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One display unit produced by a chunking run.
///
/// Chunks are value objects: they are built fresh on every call and carry no
/// references back into the chunker. `id` is only unique within one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChunk {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub chunk_type: ChunkType,
    pub weight: FontWeight,
    pub spacing: Spacing,
    #[serde(default, skip_serializing_if = "ChunkMetadata::is_empty")]
    pub metadata: ChunkMetadata,
}

impl TextChunk {
    /// Build a chunk whose weight and spacing come from the type tables.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        chunk_type: ChunkType,
        metadata: ChunkMetadata,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            chunk_type,
            weight: chunk_type.weight(),
            spacing: chunk_type.spacing(),
            metadata,
        }
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn has_follow_up(&self) -> bool {
        self.metadata.has_follow_up.unwrap_or(false)
    }
}

/// Type-dependent facts about a chunk. Only the field matching the chunk's
/// type is ever populated, plus `has_follow_up` which applies to all types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_level: Option<usize>,
    /// Reserved for renderers; the pipeline never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_follow_up: Option<bool>,
}

impl ChunkMetadata {
    pub fn is_empty(&self) -> bool {
        self.heading_level.is_none()
            && self.code_language.is_none()
            && self.list_level.is_none()
            && self.is_complete.is_none()
            && self.has_follow_up.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkType {
    Heading,
    Paragraph,
    ListItem,
    CodeBlock,
    Quote,
    Table,
    Emphasis,
    Transition,
}

impl ChunkType {
    /// Every variant, in declaration order. Indexes line up with `self as usize`.
    pub const ALL: [ChunkType; 8] = [
        ChunkType::Heading,
        ChunkType::Paragraph,
        ChunkType::ListItem,
        ChunkType::CodeBlock,
        ChunkType::Quote,
        ChunkType::Table,
        ChunkType::Emphasis,
        ChunkType::Transition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Heading => "heading",
            ChunkType::Paragraph => "paragraph",
            ChunkType::ListItem => "list-item",
            ChunkType::CodeBlock => "code-block",
            ChunkType::Quote => "quote",
            ChunkType::Table => "table",
            ChunkType::Emphasis => "emphasis",
            ChunkType::Transition => "transition",
        }
    }

    /// Headings and code blocks are never merged with neighbours.
    pub fn is_mergeable(&self) -> bool {
        !matches!(self, ChunkType::Heading | ChunkType::CodeBlock)
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChunkType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown chunk type: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Tight,
    Normal,
    Relaxed,
    Loose,
}
