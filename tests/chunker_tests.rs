use semantic_chunker::{
    chunk_text, ChunkType, ChunkingOptions, FontWeight, SemanticChunker, Spacing, TextChunk,
};

/// Expected weight/spacing per type
fn presentation_for(chunk_type: ChunkType) -> (FontWeight, Spacing) {
    match chunk_type {
        ChunkType::Heading => (FontWeight::Bold, Spacing::Loose),
        ChunkType::Paragraph => (FontWeight::Normal, Spacing::Normal),
        ChunkType::ListItem => (FontWeight::Normal, Spacing::Tight),
        ChunkType::CodeBlock => (FontWeight::Normal, Spacing::Relaxed),
        ChunkType::Quote => (FontWeight::Medium, Spacing::Relaxed),
        ChunkType::Table => (FontWeight::Normal, Spacing::Tight),
        ChunkType::Emphasis => (FontWeight::Semibold, Spacing::Normal),
        ChunkType::Transition => (FontWeight::Medium, Spacing::Normal),
    }
}

const PORTFOLIO_ANSWER: &str = "## Background

I am a systems engineer who mostly writes Rust and some Go for network services.

Languages:

- Rust, daily for five years
  - async services with tokio
- Go, for tooling

```rust
fn main() {
    println!(\"hello\");
}
```

> Make it work, make it right, make it fast.

| Project | Stars |
|---------|-------|
| parser  | 120   |

This part is **really** the point of the answer.

However, the details depend on the team and the problem at hand.

Thanks for asking about it.";

fn assert_invariants(chunks: &[TextChunk]) {
    for chunk in chunks {
        assert!(
            !chunk.content.trim().is_empty(),
            "Empty chunk emitted: {:?}",
            chunk
        );
        assert_eq!(
            (chunk.weight, chunk.spacing),
            presentation_for(chunk.chunk_type),
            "Inconsistent presentation for {:?}",
            chunk
        );
        assert_eq!(
            chunk.metadata.heading_level.is_some(),
            chunk.chunk_type == ChunkType::Heading
        );
        assert_eq!(
            chunk.metadata.code_language.is_some(),
            chunk.chunk_type == ChunkType::CodeBlock
        );
        assert_eq!(
            chunk.metadata.list_level.is_some(),
            chunk.chunk_type == ChunkType::ListItem
        );
        assert!(chunk.metadata.is_complete.is_none());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_answer_types() {
        let chunker = SemanticChunker::with_default();
        let chunks = chunker.chunk_text(PORTFOLIO_ANSWER);
        assert_invariants(&chunks);

        let types: Vec<ChunkType> = chunks.iter().map(|c| c.chunk_type).collect();
        assert_eq!(
            types,
            vec![
                ChunkType::Heading,
                ChunkType::Paragraph,
                ChunkType::Heading,
                ChunkType::ListItem,
                ChunkType::CodeBlock,
                ChunkType::Quote,
                ChunkType::Table,
                ChunkType::Emphasis,
                ChunkType::Transition,
                ChunkType::Paragraph,
            ],
            "Unexpected classification: {:#?}",
            chunks
        );

        assert_eq!(chunks[0].metadata.heading_level, Some(2));
        assert_eq!(chunks[2].metadata.heading_level, Some(1));
        assert_eq!(chunks[3].metadata.list_level, Some(0));
        assert_eq!(chunks[4].metadata.code_language.as_deref(), Some("rust"));
    }

    #[test]
    fn test_follow_up_annotation() {
        let chunks = SemanticChunker::with_default().chunk_text(PORTFOLIO_ANSWER);
        let (last, rest) = chunks.split_last().expect("chunks expected");

        assert!(rest.iter().all(|c| c.has_follow_up()));
        assert!(!last.has_follow_up());
    }

    #[test]
    fn test_order_is_preserved() {
        let text = "First paragraph has enough text to stand alone.\n\n\
                    Second paragraph also has enough text to stand alone.\n\n\
                    Third paragraph closes the answer with enough text.";
        let chunks = SemanticChunker::with_default().chunk_text(text);

        let positions: Vec<usize> = chunks
            .iter()
            .map(|c| text.find(&c.content).expect("chunk content must come from the input"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_merge_of_small_paragraphs() {
        let chunks = SemanticChunker::with_default().chunk_text("Short one.\n\nTiny para here.");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_type, ChunkType::Paragraph);
        assert_eq!(chunks[0].content, "Short one. Tiny para here.");
        assert_eq!(chunks[0].metadata.has_follow_up, Some(true));
    }

    #[test]
    fn test_headings_and_code_never_merge() {
        let text = "# A\n\n# B\n\n```\nx\n```\n\n```\ny\n```";
        let chunks = SemanticChunker::with_default().chunk_text(text);

        let contents: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["# A", "# B", "```\nx\n```", "```\ny\n```"]);
    }

    #[test]
    fn test_forced_split_size_bound() {
        let options = ChunkingOptions {
            max_chunk_length: 80,
            ..ChunkingOptions::default()
        };
        let sentence = "Each sentence here is about forty chars. ";
        let text = sentence.repeat(20);
        let chunks = chunk_text(&text, &options);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(
                chunk.char_len() <= 80,
                "Chunk exceeds limit: {} chars",
                chunk.char_len()
            );
        }
        assert_invariants(&chunks);
    }

    #[test]
    fn test_oversized_single_sentence_is_kept_whole() {
        let options = ChunkingOptions {
            max_chunk_length: 50,
            ..ChunkingOptions::default()
        };
        let long = "word ".repeat(60);
        let chunks = chunk_text(long.trim(), &options);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, long.trim());
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let inputs = [
            "```python\nprint('never closed')",
            "| lonely pipe",
            "-- weird -- dashes",
            "####### too many",
            "1.no space after number",
            ">",
            "```",
            "\r\n\r\n\r",
            "\u{feff}# bom prefixed",
            "日本語のテキスト。\n\n한국어 텍스트.",
        ];
        let chunker = SemanticChunker::with_default();
        for input in inputs {
            let chunks = chunker.chunk_text(input);
            assert_invariants(&chunks);
        }
    }

    #[test]
    fn test_large_input_completes() {
        let mut text = String::new();
        for i in 0..2_000 {
            text.push_str(&format!("## Section {}\n\nBody text number {} goes here. ", i, i));
            text.push_str(&"More words follow. ".repeat(10));
            text.push_str("\n\n");
        }
        text.push_str(&"x".repeat(200_000));

        let chunks = SemanticChunker::with_default().chunk_text(&text);
        assert!(chunks.len() >= 4_000);
        assert_invariants(&chunks);
    }

    #[test]
    fn test_styles_are_reproducible() {
        let chunker = SemanticChunker::with_default();
        for chunk in chunker.chunk_text(PORTFOLIO_ANSWER) {
            let first = chunker.chunk_styles(&chunk, 14.0);
            let second = chunker.chunk_styles(&chunk, 14.0);
            assert_eq!(first, second);
            assert!(first.ends_with("text-[11.2px]"), "got {}", first);
        }
    }

    #[test]
    fn test_concurrent_use() {
        let chunker = std::sync::Arc::new(SemanticChunker::with_default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let chunker = std::sync::Arc::clone(&chunker);
                std::thread::spawn(move || chunker.chunk_text(PORTFOLIO_ANSWER).len())
            })
            .collect();

        let counts: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
    }
}
