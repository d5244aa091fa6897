//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Segments without any alphanumeric character (punctuation,
//! whitespace) are dropped.
//!
//! # Examples
//!
//! ```
//! use countvec::analysis::tokenizer::Tokenizer;
//! use countvec::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("café, résumé!").collect();
//! assert_eq!(tokens, vec!["café", "résumé"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::{TokenStream, Tokenizer};

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(
            text.split_word_bounds()
                // Only keep actual words (not whitespace or punctuation)
                .filter(|word| word.chars().any(|c| c.is_alphanumeric())),
        )
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
