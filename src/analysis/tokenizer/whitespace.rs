//! Whitespace tokenizer implementation.

use super::{TokenStream, Tokenizer};

/// A tokenizer that splits text on whitespace.
///
/// Punctuation stays attached to the neighbouring word, so "gas?" and "gas"
/// are different tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(text.split_whitespace())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
