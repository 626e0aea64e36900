// src/chunker/classify.rs
//! Section classification.
//!
//! Classifiers are evaluated top to bottom and the first match wins. Adding a
//! content type means adding a row to `CLASSIFIERS`; nothing else depends on
//! the order beyond this table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ChunkingOptions;
use crate::types::{ChunkMetadata, ChunkType};

static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s{0,3}#{1,6}\s").expect("Invalid markdown heading regex"));

/// Short capitalized label with an optional trailing colon, e.g. `Projects:`.
static LABEL_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z\s]*:?$").expect("Invalid label heading regex"));

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*+•]|\d+\.)\s").expect("Invalid list marker regex"));

/// Opening fence with an optional language tag, ending the line.
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\w+#.-]*\n").expect("Invalid fence line regex"));

static CODE_LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(\w[\w+#.-]*)").expect("Invalid code language regex"));

static BOLD_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("Invalid bold markup regex"));

static ITALIC_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_[^_]+_").expect("Invalid italic markup regex"));

static SHOUTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s]*$").expect("Invalid shouted text regex"));

const SHOUTED_MAX_CHARS: usize = 50;

const TRANSITION_WORDS: [&str; 5] = [
    "however",
    "furthermore",
    "meanwhile",
    "therefore",
    "consequently",
];

/// Which option, if any, switches a classifier off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Always,
    Headings,
    Code,
    Lists,
}

impl Toggle {
    fn enabled(&self, options: &ChunkingOptions) -> bool {
        match self {
            Toggle::Always => true,
            Toggle::Headings => options.detect_headings,
            Toggle::Code => options.detect_code,
            Toggle::Lists => options.detect_lists,
        }
    }
}

pub struct Classifier {
    pub chunk_type: ChunkType,
    toggle: Toggle,
    matches: fn(&str) -> bool,
}

/// Priority order. Anything that matches none of these is a paragraph.
pub static CLASSIFIERS: [Classifier; 7] = [
    Classifier {
        chunk_type: ChunkType::Heading,
        toggle: Toggle::Headings,
        matches: looks_like_heading,
    },
    Classifier {
        chunk_type: ChunkType::CodeBlock,
        toggle: Toggle::Code,
        matches: looks_like_code,
    },
    Classifier {
        chunk_type: ChunkType::Quote,
        toggle: Toggle::Always,
        matches: looks_like_quote,
    },
    Classifier {
        chunk_type: ChunkType::ListItem,
        toggle: Toggle::Lists,
        matches: looks_like_list,
    },
    Classifier {
        chunk_type: ChunkType::Table,
        toggle: Toggle::Always,
        matches: looks_like_table,
    },
    Classifier {
        chunk_type: ChunkType::Emphasis,
        toggle: Toggle::Always,
        matches: looks_like_emphasis,
    },
    Classifier {
        chunk_type: ChunkType::Transition,
        toggle: Toggle::Always,
        matches: looks_like_transition,
    },
];

/// Classify one section. `raw` may carry leading indentation.
pub fn classify(raw: &str, options: &ChunkingOptions) -> ChunkType {
    CLASSIFIERS
        .iter()
        .filter(|c| c.toggle.enabled(options))
        .find(|c| (c.matches)(raw))
        .map(|c| c.chunk_type)
        .unwrap_or(ChunkType::Paragraph)
}

/// Type-specific metadata. Fields for other types stay `None`.
pub fn extract_metadata(chunk_type: ChunkType, raw: &str) -> ChunkMetadata {
    let mut metadata = ChunkMetadata::default();
    match chunk_type {
        ChunkType::Heading => metadata.heading_level = Some(heading_level(raw)),
        ChunkType::CodeBlock => metadata.code_language = Some(code_language(raw)),
        ChunkType::ListItem => metadata.list_level = Some(list_level(raw)),
        _ => {}
    }
    metadata
}

fn first_line(raw: &str) -> &str {
    raw.lines().next().unwrap_or("")
}

pub fn is_heading_line(line: &str) -> bool {
    MARKDOWN_HEADING.is_match(line)
}

pub fn is_list_line(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

pub fn is_table_row(line: &str) -> bool {
    line.matches('|').count() >= 2
}

fn looks_like_heading(raw: &str) -> bool {
    let line = first_line(raw);
    is_heading_line(line) || LABEL_HEADING.is_match(line.trim())
}

fn looks_like_code(raw: &str) -> bool {
    raw.trim_start().starts_with("```") || FENCE_LINE.is_match(raw) || is_indented_block(raw)
}

/// Every non-blank line is indented by at least four spaces. Tabs do not
/// count, so tab-indented bullets stay list items.
fn is_indented_block(raw: &str) -> bool {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty()).peekable();
    lines.peek().is_some() && lines.all(|l| l.starts_with("    "))
}

fn looks_like_quote(raw: &str) -> bool {
    raw.lines().any(|l| l.trim_start().starts_with('>'))
}

fn looks_like_list(raw: &str) -> bool {
    is_list_line(first_line(raw))
}

fn looks_like_table(raw: &str) -> bool {
    raw.lines().any(is_table_row)
}

fn looks_like_emphasis(raw: &str) -> bool {
    let content = raw.trim();
    BOLD_MARKUP.is_match(content)
        || ITALIC_MARKUP.is_match(content)
        || (content.chars().count() < SHOUTED_MAX_CHARS && SHOUTED.is_match(content))
}

fn looks_like_transition(raw: &str) -> bool {
    let Some(word) = raw.split_whitespace().next() else {
        return false;
    };
    let word = word
        .trim_end_matches(|c: char| !c.is_alphabetic())
        .to_lowercase();
    TRANSITION_WORDS.contains(&word.as_str())
}

fn heading_level(raw: &str) -> usize {
    let hashes = first_line(raw)
        .trim_start()
        .chars()
        .take_while(|&c| c == '#')
        .count();
    hashes.clamp(1, 6)
}

/// Tag of the opening fence only; later fences in the section are ignored.
fn code_language(raw: &str) -> String {
    raw.find("```")
        .and_then(|start| CODE_LANGUAGE.captures(&raw[start..]))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "text".to_string())
}

fn list_level(raw: &str) -> usize {
    let indent = first_line(raw)
        .chars()
        .take_while(|c| c.is_whitespace())
        .count();
    indent / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(raw: &str) -> ChunkType {
        classify(raw, &ChunkingOptions::default())
    }

    #[test]
    fn test_markdown_headings() {
        assert_eq!(classify_default("# Title"), ChunkType::Heading);
        assert_eq!(classify_default("###### Deep"), ChunkType::Heading);
        assert_eq!(heading_level("### Title"), 3);
        assert_eq!(heading_level("###### Deep"), 6);
        assert_ne!(classify_default("####### seven hashes"), ChunkType::Heading);
        assert_ne!(classify_default("#hashtag trending now"), ChunkType::Heading);
    }

    #[test]
    fn test_label_headings() {
        assert_eq!(classify_default("Experience:"), ChunkType::Heading);
        assert_eq!(classify_default("Open Source Work\nsome details below"), ChunkType::Heading);
        assert_eq!(heading_level("Experience:"), 1);
        assert_ne!(classify_default("Experience: five years"), ChunkType::Heading);
        assert_ne!(classify_default("lowercase label:"), ChunkType::Heading);
    }

    #[test]
    fn test_code_blocks() {
        let fenced = "```python\nprint('hi')\n```";
        assert_eq!(classify_default(fenced), ChunkType::CodeBlock);
        assert_eq!(code_language(fenced), "python");

        let bare = "```\nls -la\n```";
        assert_eq!(classify_default(bare), ChunkType::CodeBlock);
        assert_eq!(code_language(bare), "text");

        assert_eq!(code_language("```c++\nint x;\n```"), "c++");
        assert_eq!(classify_default("    let x = 1;\n    let y = 2;"), ChunkType::CodeBlock);
        assert_ne!(classify_default("    indented\nnot indented"), ChunkType::CodeBlock);
    }

    #[test]
    fn test_code_fence_after_prose() {
        let raw = "run this first\n```sh\nmake\n```";
        assert_eq!(classify_default(raw), ChunkType::CodeBlock);
        assert_eq!(code_language(raw), "sh");
    }

    #[test]
    fn test_language_comes_from_opening_fence() {
        let raw = "```\nplain\n```\n```js\nx\n```";
        assert_eq!(classify_default(raw), ChunkType::CodeBlock);
        assert_eq!(code_language(raw), "text");
        assert_eq!(code_language("```go\nx\n```\n```js\ny\n```"), "go");
        assert_eq!(code_language("see below\n```toml\n[a]\n```"), "toml");
    }

    #[test]
    fn test_quotes() {
        assert_eq!(classify_default("> stay hungry"), ChunkType::Quote);
        assert_eq!(classify_default("as they said\n> stay foolish"), ChunkType::Quote);
    }

    #[test]
    fn test_list_items() {
        assert_eq!(classify_default("- item"), ChunkType::ListItem);
        assert_eq!(classify_default("* item"), ChunkType::ListItem);
        assert_eq!(classify_default("+ item"), ChunkType::ListItem);
        assert_eq!(classify_default("• item"), ChunkType::ListItem);
        assert_eq!(classify_default("12. item"), ChunkType::ListItem);
        assert_eq!(classify_default("  - item"), ChunkType::ListItem);
        assert_eq!(list_level("  - item"), 1);
        assert_eq!(list_level("      - item"), 3);
        assert_eq!(list_level("- item"), 0);
        assert_ne!(classify_default("-not a bullet here"), ChunkType::ListItem);
    }

    #[test]
    fn test_tab_indented_bullet_is_a_list_item() {
        assert_eq!(classify_default("\t- item"), ChunkType::ListItem);
        assert_eq!(list_level("\t- item"), 0);
        assert_eq!(classify_default("\tlet x = 1;"), ChunkType::Paragraph);
        assert_eq!(classify_default("    - item"), ChunkType::CodeBlock);
    }

    #[test]
    fn test_tables() {
        assert_eq!(classify_default("| lang | years |\n|---|---|"), ChunkType::Table);
        assert_ne!(classify_default("a single | pipe only"), ChunkType::Table);
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(classify_default("this is **very** important"), ChunkType::Emphasis);
        assert_eq!(classify_default("this is _quite_ important"), ChunkType::Emphasis);
    }

    #[test]
    fn test_shouted_text_needs_headings_off() {
        // A shouted line also fits the label heading pattern, which runs first
        assert_eq!(classify_default("DO NOT PANIC"), ChunkType::Heading);

        let options = ChunkingOptions {
            detect_headings: false,
            ..ChunkingOptions::default()
        };
        assert_eq!(classify("DO NOT PANIC", &options), ChunkType::Emphasis);
    }

    #[test]
    fn test_transitions() {
        assert_eq!(classify_default("however, it worked out."), ChunkType::Transition);
        assert_eq!(classify_default("Therefore we shipped it."), ChunkType::Transition);
        assert_eq!(classify_default("MEANWHILE the tests ran."), ChunkType::Transition);
        assert_eq!(classify_default("howeverish is not a word."), ChunkType::Paragraph);
    }

    #[test]
    fn test_default_is_paragraph() {
        assert_eq!(classify_default("I enjoy building fast tools."), ChunkType::Paragraph);
        assert_eq!(classify_default("| unmatched pipe"), ChunkType::Paragraph);
        assert_eq!(classify_default("```"), ChunkType::CodeBlock);
    }

    #[test]
    fn test_priority_order() {
        // Heading beats list: label line first, bullets after
        assert_eq!(classify_default("Skills:\n- Rust\n- Go"), ChunkType::Heading);
        // Code beats quote
        assert_eq!(classify_default("```\n> not a quote\n```"), ChunkType::CodeBlock);
        // Quote beats table
        assert_eq!(classify_default("> | a | b |"), ChunkType::Quote);
    }

    #[test]
    fn test_toggles_fall_through() {
        let options = ChunkingOptions {
            detect_lists: false,
            detect_code: false,
            ..ChunkingOptions::default()
        };
        assert_eq!(classify("- plain dash line", &options), ChunkType::Paragraph);
        assert_eq!(classify("```\n| a | b |\n```", &options), ChunkType::Table);
    }

    #[test]
    fn test_metadata_only_for_matching_type() {
        let heading = extract_metadata(ChunkType::Heading, "## Work");
        assert_eq!(heading.heading_level, Some(2));
        assert!(heading.code_language.is_none() && heading.list_level.is_none());

        let paragraph = extract_metadata(ChunkType::Paragraph, "## Work");
        assert!(paragraph.is_empty());
    }
}
