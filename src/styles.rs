// src/styles.rs
//! Presentation tables and style descriptors for renderers.
//!
//! Weight and spacing are pure functions of the chunk type. Both come from a
//! single static table indexed by the type tag, so a chunk built through
//! `TextChunk::new` can never carry an inconsistent pair.

use crate::types::{ChunkType, FontWeight, Spacing, TextChunk};

/// Base font size used when a caller has no size of its own.
pub const DEFAULT_BASE_FONT_SIZE: f32 = 16.0;

/// Smallest pixel size `chunk_styles` will ever emit.
pub const MIN_FONT_SIZE_PX: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub weight: FontWeight,
    pub spacing: Spacing,
    /// Type-specific visual treatment tokens.
    pub treatment: &'static str,
}

/// Indexed by `ChunkType as usize`; order must follow `ChunkType::ALL`.
static PRESENTATION: [Presentation; 8] = [
    // heading
    Presentation {
        weight: FontWeight::Bold,
        spacing: Spacing::Loose,
        treatment: "tracking-tight",
    },
    // paragraph
    Presentation {
        weight: FontWeight::Normal,
        spacing: Spacing::Normal,
        treatment: "",
    },
    // list-item
    Presentation {
        weight: FontWeight::Normal,
        spacing: Spacing::Tight,
        treatment: "list-disc",
    },
    // code-block
    Presentation {
        weight: FontWeight::Normal,
        spacing: Spacing::Relaxed,
        treatment: "font-mono bg-muted rounded px-3 py-2 whitespace-pre-wrap",
    },
    // quote
    Presentation {
        weight: FontWeight::Medium,
        spacing: Spacing::Relaxed,
        treatment: "border-l-4 pl-4 italic",
    },
    // table
    Presentation {
        weight: FontWeight::Normal,
        spacing: Spacing::Tight,
        treatment: "tabular-nums",
    },
    // emphasis
    Presentation {
        weight: FontWeight::Semibold,
        spacing: Spacing::Normal,
        treatment: "text-accent",
    },
    // transition
    Presentation {
        weight: FontWeight::Medium,
        spacing: Spacing::Normal,
        treatment: "",
    },
];

/// Relative heading scale for levels 1..=6; deeper levels use the last entry.
static HEADING_SCALE: [f32; 6] = [1.5, 1.35, 1.2, 1.1, 1.05, 1.0];

impl ChunkType {
    pub fn presentation(&self) -> &'static Presentation {
        &PRESENTATION[*self as usize]
    }

    pub fn weight(&self) -> FontWeight {
        self.presentation().weight
    }

    pub fn spacing(&self) -> Spacing {
        self.presentation().spacing
    }
}

impl FontWeight {
    pub fn class_name(&self) -> &'static str {
        match self {
            FontWeight::Light => "font-light",
            FontWeight::Normal => "font-normal",
            FontWeight::Medium => "font-medium",
            FontWeight::Semibold => "font-semibold",
            FontWeight::Bold => "font-bold",
        }
    }
}

impl Spacing {
    /// Line-height and bottom margin tokens.
    pub fn class_name(&self) -> &'static str {
        match self {
            Spacing::Tight => "leading-tight mb-1",
            Spacing::Normal => "leading-normal mb-2",
            Spacing::Relaxed => "leading-relaxed mb-3",
            Spacing::Loose => "leading-loose mb-4",
        }
    }
}

/// Reduced pixel size: `max(10, base * (1 - reduction / 100))`.
pub fn scaled_font_size(base_size: f32, font_size_reduction: u8) -> f32 {
    let factor = 1.0 - f32::from(font_size_reduction) / 100.0;
    let size = base_size * factor;
    // NaN compares false, so a NaN base also lands on the floor
    if size >= MIN_FONT_SIZE_PX {
        size
    } else {
        MIN_FONT_SIZE_PX
    }
}

pub fn heading_scale(level: usize) -> f32 {
    let idx = level.clamp(1, HEADING_SCALE.len()) - 1;
    HEADING_SCALE[idx]
}

/// Build the style descriptor for one chunk.
///
/// Output is a space separated token string: weight, spacing, type treatment,
/// then the computed pixel size. Identical inputs always produce identical
/// output.
pub fn chunk_styles(chunk: &TextChunk, base_size: f32, font_size_reduction: u8) -> String {
    let presentation = chunk.chunk_type.presentation();
    let mut tokens: Vec<String> = vec![
        chunk.weight.class_name().to_string(),
        chunk.spacing.class_name().to_string(),
    ];

    if !presentation.treatment.is_empty() {
        tokens.push(presentation.treatment.to_string());
    }

    match chunk.chunk_type {
        ChunkType::Heading => {
            let level = chunk.metadata.heading_level.unwrap_or(1);
            tokens.push(format!("scale-[{:.2}em]", heading_scale(level)));
        }
        ChunkType::ListItem => {
            let level = chunk.metadata.list_level.unwrap_or(0);
            if level > 0 {
                tokens.push(format!("pl-[{}rem]", level));
            }
        }
        _ => {}
    }

    let size = scaled_font_size(base_size, font_size_reduction);
    tokens.push(format!("text-[{:.1}px]", size));

    tokens.join(" ")
}
