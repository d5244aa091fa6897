//! Tokenizer implementations for text analysis.
//!
//! A tokenizer turns (already lower-cased) text into the ordered sequence of
//! substrings that count as tokens. The vectorizer only depends on the
//! [`Tokenizer`] trait, so any matcher satisfying it can be plugged in.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex matches (the default, handles contractions)
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use countvec::analysis::tokenizer::Tokenizer;
//! use countvec::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").collect();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use std::fmt::Debug;

/// A lazy stream of token slices borrowed from the input text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Trait for tokenizers that split text into tokens.
///
/// Tokens are produced left to right and are never deduplicated: a word that
/// occurs three times yields three items. Calling [`Tokenizer::tokenize`] again
/// on the same text restarts the sequence.
///
/// The trait requires `Send + Sync` so that a configured tokenizer can be
/// shared by concurrent `transform` calls.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use countvec::analysis::tokenizer::{TokenStream, Tokenizer};
///
/// #[derive(Debug)]
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
///         Box::new(text.split(',').map(str::trim).filter(|s| !s.is_empty()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens: Vec<_> = CommaTokenizer.tokenize("red, green,blue").collect();
/// assert_eq!(tokens, vec!["red", "green", "blue"]);
/// ```
pub trait Tokenizer: Send + Sync + Debug {
    /// Split the given text into a stream of tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// The pattern source this tokenizer can be rebuilt from, if any.
    ///
    /// Only tokenizers that return `Some` can be persisted inside a
    /// [`VectorizerModel`](crate::vectorizer::VectorizerModel).
    fn pattern(&self) -> Option<&str> {
        None
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;
