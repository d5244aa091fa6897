//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{TokenStream, Tokenizer};
use crate::error::{CountVecError, Result};

/// Default token pattern: a run of word characters, optionally joined by an
/// apostrophe to a second run ("ain't", "don't", "o'clock").
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w+(?:'\w+)?\b";

/// A regex-based tokenizer that emits every match of its pattern as a token.
///
/// This is the default tokenizer of the vectorizer.
///
/// # Examples
///
/// ```
/// use countvec::analysis::tokenizer::Tokenizer;
/// use countvec::analysis::tokenizer::regex::RegexTokenizer;
///
/// let tokenizer = RegexTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("i ain't the sharpest tool").collect();
/// assert_eq!(tokens, vec!["i", "ain't", "the", "sharpest", "tool"]);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_TOKEN_PATTERN`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| CountVecError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN).expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(self.pattern.find_iter(text).map(|mat| mat.as_str()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }

    fn pattern(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new();
        let tokens: Vec<&str> = tokenizer.tokenize("hello world").collect();

        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let tokenizer = RegexTokenizer::new();
        let tokens: Vec<&str> = tokenizer
            .tokenize("i ain't the sharpest tool in the shed")
            .collect();

        assert_eq!(
            tokens,
            vec!["i", "ain't", "the", "sharpest", "tool", "in", "the", "shed"]
        );
    }

    #[test]
    fn test_punctuation_is_skipped() {
        let tokenizer = RegexTokenizer::new();
        let tokens: Vec<&str> = tokenizer
            .tokenize("could i spare some change for gas?")
            .collect();

        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[6], "gas");
    }

    #[test]
    fn test_repeated_tokens_are_kept() {
        let tokenizer = RegexTokenizer::new();
        let tokens: Vec<&str> = tokenizer.tokenize("me me me").collect();
        assert_eq!(tokens, vec!["me", "me", "me"]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let tokenizer = RegexTokenizer::new();
        let text = "one two";
        let first: Vec<&str> = tokenizer.tokenize(text).collect();
        let second: Vec<&str> = tokenizer.tokenize(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]{3,}").unwrap();
        let tokens: Vec<&str> = tokenizer.tokenize("a bb ccc dddd").collect();
        assert_eq!(tokens, vec!["ccc", "dddd"]);
        assert_eq!(tokenizer.pattern(), Some(r"[a-z]{3,}"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern(r"(unclosed");
        assert!(matches!(result, Err(CountVecError::Analysis(_))));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().name(), "regex");
    }
}
