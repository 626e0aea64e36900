// src/stream.rs
//! Accumulates streamed response fragments for one conversation turn.
//!
//! Chunk boundaries are only final once the whole turn is available, so the
//! buffer chunks exactly once on `finish`. `provisional` may be called while
//! the stream is still running; its chunk ids and boundaries can change on
//! the next call.

use tracing::debug;

use crate::chunker::Chunker;
use crate::types::TextChunk;

#[derive(Debug, Default)]
pub struct TurnBuffer {
    text: String,
    fragments: usize,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one streamed fragment.
    pub fn push_fragment(&mut self, fragment: &str) {
        self.text.push_str(fragment);
        self.fragments += 1;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Chunk the text received so far without closing the turn.
    pub fn provisional<C: Chunker + ?Sized>(&self, chunker: &C) -> Vec<TextChunk> {
        chunker.chunk_text(&self.text)
    }

    /// Close the turn and chunk its complete text.
    pub fn finish<C: Chunker + ?Sized>(self, chunker: &C) -> Vec<TextChunk> {
        let chunks = chunker.chunk_text(&self.text);
        debug!(
            fragments = self.fragments,
            chars = self.text.chars().count(),
            chunks = chunks.len(),
            "Finished turn"
        );
        chunks
    }
}

impl Extend<String> for TurnBuffer {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for fragment in iter {
            self.push_fragment(&fragment);
        }
    }
}

impl<'a> Extend<&'a str> for TurnBuffer {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for fragment in iter {
            self.push_fragment(fragment);
        }
    }
}
