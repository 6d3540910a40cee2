//! Text tokenization collaborator.
//!
//! Like the dictionary, tokenization is a host concern in principle, but
//! the crate ships [`DefaultTokenizer`], built on `unicode-segmentation`'s
//! word-boundary iterator, so the public API works without a host
//! providing its own.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered list of word tokens.
pub trait Tokenizer {
    /// Tokenize `text` into words, in reading order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on whitespace and em-dashes, strips leading/trailing punctuation
/// from each token, and preserves internal apostrophes and hyphens so
/// `can't` and `drip-dry` survive as single tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

fn is_glue(segment: &str) -> bool {
    segment == "'" || segment == "-"
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    let trimmed = current.trim_matches(|c: char| !c.is_alphanumeric());
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                flush(&mut current, &mut tokens);
            } else if segment.chars().any(char::is_alphanumeric) {
                current.push_str(segment);
            } else if is_glue(segment) && !current.is_empty() {
                current.push_str(segment);
            } else {
                flush(&mut current, &mut tokens);
            }
        }
        flush(&mut current, &mut tokens);

        tokens
    }
}
