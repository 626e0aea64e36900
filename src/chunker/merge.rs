// src/chunker/merge.rs

use crate::config::ChunkingOptions;
use crate::types::TextChunk;

/// Fold undersized chunks into the chunk emitted just before them, then mark
/// every chunk but the last as having a follow-up.
///
/// Returns the surviving chunks and how many merges happened.
pub fn optimize_boundaries(
    chunks: Vec<TextChunk>,
    options: &ChunkingOptions,
) -> (Vec<TextChunk>, usize) {
    let mut emitted: Vec<TextChunk> = Vec::with_capacity(chunks.len());
    let mut merges = 0usize;
    let merging = options.merging_enabled();

    for chunk in chunks {
        if merging && chunk.char_len() < options.min_chunk_length {
            if let Some(previous) = emitted.last_mut() {
                if can_merge(previous, &chunk, options.max_chunk_length) {
                    previous.content.push(' ');
                    previous.content.push_str(&chunk.content);
                    previous.metadata.has_follow_up = Some(true);
                    merges += 1;
                    continue;
                }
            }
        }
        emitted.push(chunk);
    }

    annotate_follow_ups(&mut emitted);
    (emitted, merges)
}

fn can_merge(previous: &TextChunk, next: &TextChunk, max_chunk_length: usize) -> bool {
    previous.chunk_type == next.chunk_type
        && previous.chunk_type.is_mergeable()
        && previous.char_len() + 1 + next.char_len() <= max_chunk_length
}

fn annotate_follow_ups(chunks: &mut [TextChunk]) {
    let count = chunks.len();
    for chunk in chunks.iter_mut().take(count.saturating_sub(1)) {
        chunk.metadata.has_follow_up = Some(true);
    }
}
