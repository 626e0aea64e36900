// src/chunker/sections.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ChunkingOptions;

/// One or more blank lines.
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph break regex"));

/// Sentence terminator followed by whitespace. The terminator stays with the
/// sentence before it.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence end regex"));

/// A slice of the input that becomes at most one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Text with leading blank lines and trailing whitespace removed. Leading
    /// indentation of the first line is kept for list and code detection.
    pub raw: String,
    /// Produced by splitting an oversized section into sentences.
    pub forced: bool,
}

impl Section {
    pub fn content(&self) -> &str {
        self.raw.trim()
    }
}

/// Split text on blank-line boundaries, breaking any section longer than
/// the forced-split threshold into packed sentence groups.
pub fn split_sections(text: &str, options: &ChunkingOptions) -> Vec<Section> {
    let threshold = options.forced_split_threshold();
    let max_chunk_length = options.max_chunk_length;
    let mut sections = Vec::new();

    for part in PARAGRAPH_BREAK.split(text) {
        let raw = strip_blank_edges(part);
        if raw.is_empty() {
            continue;
        }

        let content = raw.trim();
        if content.chars().count() > threshold {
            let sentences = split_sentences(content);
            sections.extend(
                pack_sentences(&sentences, max_chunk_length)
                    .into_iter()
                    .map(|raw| Section { raw, forced: true }),
            );
        } else {
            sections.push(Section {
                raw: raw.to_string(),
                forced: false,
            });
        }
    }

    sections
}

/// Split on `.`, `!` or `?` followed by whitespace, keeping the terminator.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for mat in SENTENCE_END.find_iter(text) {
        // Terminators are single-byte ASCII, so start + 1 is a char boundary
        let sentence = text[last_end..mat.start() + 1].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last_end = mat.end();
    }

    let tail = text[last_end..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Greedily join sentences with single spaces into groups of at most
/// `max_chars` chars. A sentence that is longer than the limit on its own is
/// kept whole.
pub fn pack_sentences(sentences: &[&str], max_chars: usize) -> Vec<String> {
    let mut packed = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in sentences {
        let sentence_chars = sentence.chars().count();

        if !current.is_empty() && current_chars + 1 + sentence_chars > max_chars {
            packed.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(sentence);
        current_chars += sentence_chars;
    }

    if !current.is_empty() {
        packed.push(current);
    }

    packed
}

/// Drop whole blank lines from the start and all trailing whitespace, keeping
/// the first real line's indentation.
fn strip_blank_edges(part: &str) -> &str {
    let mut start = 0;
    for line in part.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    part[start..].trim_end()
}
