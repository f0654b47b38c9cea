//! Live word and character counts for a text field.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput};
use crate::PageToolsResult;

/// Counts recomputed from scratch on every text change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Whitespace-delimited tokens in the trimmed text.
    pub word_count: usize,
    /// Characters left after removing every whitespace character.
    pub char_count: usize,
}

/// Input for the counter when driven from a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// Count words and non-whitespace characters. Every input is valid.
pub fn count_text(text: &str) -> TextMetrics {
    TextMetrics {
        word_count: count_words(text),
        char_count: count_chars(text),
    }
}

/// Zero for blank text, otherwise the number of maximal non-whitespace runs.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count and wrap in the standard output envelope.
pub fn analyze_text(input: &TextInput) -> PageToolsResult<ComputationOutput<TextMetrics>> {
    let start = Instant::now();
    let metrics = count_text(&input.text);
    tracing::debug!(
        words = metrics.word_count,
        chars = metrics.char_count,
        "text counted"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Whitespace-delimited word count; non-whitespace character count",
        &serde_json::json!({ "text_length": input.text.chars().count() }),
        Vec::new(),
        elapsed,
        metrics,
    ))
}
