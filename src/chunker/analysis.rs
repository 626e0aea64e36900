// src/chunker/analysis.rs

use serde::Serialize;

use super::classify::{is_heading_line, is_list_line, is_table_row};

/// Lines this short outside code fences are not counted as paragraph text.
const TRIVIAL_LINE_CHARS: usize = 10;

/// Structural features seen in a text. Informational only: it feeds the
/// run statistics and never changes how a section is classified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureAnalysis {
    pub has_headings: bool,
    pub has_lists: bool,
    pub has_code_blocks: bool,
    pub has_quotes: bool,
    pub has_tables: bool,
    /// Non-trivial lines outside code fences that are plain text.
    pub paragraph_count: usize,
    /// Zero-based indexes of blank lines.
    pub break_points: Vec<usize>,
    /// Mean char length of non-blank lines.
    pub average_line_length: f64,
    /// A code fence was opened and never closed.
    pub unterminated_fence: bool,
}

/// Scan `text` line by line, tracking fenced code regions.
pub fn analyze_structure(text: &str) -> StructureAnalysis {
    let mut analysis = StructureAnalysis::default();
    let mut in_code_block = false;
    let mut non_blank_lines = 0usize;
    let mut non_blank_chars = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            analysis.break_points.push(idx);
            continue;
        }

        non_blank_lines += 1;
        non_blank_chars += line.chars().count();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            analysis.has_code_blocks = true;
            continue;
        }

        if in_code_block {
            continue;
        }

        if is_heading_line(line) {
            analysis.has_headings = true;
        } else if is_list_line(line) {
            analysis.has_lists = true;
        } else if trimmed.starts_with('>') {
            analysis.has_quotes = true;
        } else if is_table_row(line) {
            analysis.has_tables = true;
        } else if trimmed.chars().count() > TRIVIAL_LINE_CHARS {
            analysis.paragraph_count += 1;
        }
    }

    analysis.unterminated_fence = in_code_block;
    if non_blank_lines > 0 {
        analysis.average_line_length = non_blank_chars as f64 / non_blank_lines as f64;
    }

    analysis
}
