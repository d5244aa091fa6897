//! Vectorizer configuration.
//!
//! [`VectorizerConfig`] is the runtime policy bundle a [`CountVectorizer`] is
//! built with. It is shared behind an `Arc` and never mutated by the
//! vectorizer. [`VectorizerSettings`] is its serializable mirror, with the
//! token pattern stored as a regex string, used for settings files and
//! persisted models.
//!
//! [`CountVectorizer`]: crate::vectorizer::CountVectorizer

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::error::{CountVecError, Result};
use crate::vectorizer::Vocabulary;

/// Default n-gram range: unigrams only.
pub const DEFAULT_NGRAM_RANGE: (u8, u8) = (1, 1);

/// Extraction policy for a [`CountVectorizer`](crate::vectorizer::CountVectorizer).
///
/// `ngram_range` and `stop_words` are reserved: they are stored and exposed
/// but do not yet change tokenization or counting. The vectorizer logs a
/// warning when either is set to a non-default value.
///
/// # Examples
///
/// ```
/// use countvec::vectorizer::{CountVectorizer, VectorizerConfig};
///
/// let config = VectorizerConfig::default().with_max_features(5);
/// let mut vectorizer = CountVectorizer::with_config(config);
/// vectorizer.fit(&["a b c d e f g", "a a b"]);
/// assert_eq!(vectorizer.num_features(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct VectorizerConfig {
    /// Bounds (min, max) of the n-gram length. Reserved.
    pub ngram_range: (u8, u8),

    /// Words to exclude from the vocabulary. Reserved.
    pub stop_words: Option<AHashSet<String>>,

    /// Upper bound on the vocabulary size. `None` or `Some(0)` means no cap.
    pub max_features: Option<usize>,

    /// Matcher producing the tokens of a lower-cased text.
    pub token_pattern: Arc<dyn Tokenizer>,

    /// Vocabulary the vectorizer starts with, replaced by the first `fit`.
    pub vocabulary: Option<Vocabulary>,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            ngram_range: DEFAULT_NGRAM_RANGE,
            stop_words: None,
            max_features: None,
            token_pattern: Arc::new(RegexTokenizer::default()),
            vocabulary: None,
        }
    }
}

impl VectorizerConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram range.
    pub fn with_ngram_range(mut self, min: u8, max: u8) -> Self {
        self.ngram_range = (min, max);
        self
    }

    /// Set the stop-word list.
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(stop_words.into_iter().map(Into::into).collect());
        self
    }

    /// Cap the vocabulary at the `max_features` most frequent tokens.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Use a custom tokenizer.
    pub fn with_token_pattern<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.token_pattern = Arc::new(tokenizer);
        self
    }

    /// Use a regex as the token pattern.
    pub fn with_regex_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.with_token_pattern(RegexTokenizer::with_pattern(pattern)?))
    }

    /// Seed the vectorizer with a pre-supplied vocabulary.
    pub fn with_vocabulary<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(vocabulary.into_iter().map(Into::into).collect());
        self
    }

    /// The effective feature cap, treating zero as "no cap".
    pub fn feature_cap(&self) -> Option<usize> {
        self.max_features.filter(|&n| n > 0)
    }

    /// Whether reserved fields carry values that have no effect yet.
    pub(crate) fn has_inert_settings(&self) -> bool {
        self.ngram_range != DEFAULT_NGRAM_RANGE
            || self.stop_words.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Convert to the serializable form.
    ///
    /// Fails when the tokenizer cannot be described by a pattern string.
    pub fn to_settings(&self) -> Result<VectorizerSettings> {
        let token_pattern = self.token_pattern.pattern().ok_or_else(|| {
            CountVecError::invalid_operation(format!(
                "tokenizer '{}' has no serializable pattern",
                self.token_pattern.name()
            ))
        })?;

        Ok(VectorizerSettings {
            ngram_range: self.ngram_range,
            stop_words: self.stop_words.as_ref().map(sorted),
            max_features: self
                .max_features
                .map(|n| i64::try_from(n).unwrap_or(i64::MAX)),
            token_pattern: token_pattern.to_string(),
            vocabulary: self.vocabulary.as_ref().map(sorted),
        })
    }
}

/// Serializable vectorizer settings.
///
/// Missing fields take their defaults, so `{}` is a valid settings file.
///
/// # Examples
///
/// ```
/// use countvec::vectorizer::{VectorizerConfig, VectorizerSettings};
///
/// let settings: VectorizerSettings = serde_json::from_str(r#"{"max_features": 10}"#).unwrap();
/// let config = VectorizerConfig::try_from(settings).unwrap();
/// assert_eq!(config.max_features, Some(10));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerSettings {
    pub ngram_range: (u8, u8),
    pub stop_words: Option<Vec<String>>,
    /// Zero or negative means no cap.
    pub max_features: Option<i64>,
    pub token_pattern: String,
    pub vocabulary: Option<Vec<String>>,
}

impl Default for VectorizerSettings {
    fn default() -> Self {
        VectorizerSettings {
            ngram_range: DEFAULT_NGRAM_RANGE,
            stop_words: None,
            max_features: None,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            vocabulary: None,
        }
    }
}

impl VectorizerSettings {
    /// Load settings from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl TryFrom<VectorizerSettings> for VectorizerConfig {
    type Error = CountVecError;

    fn try_from(settings: VectorizerSettings) -> Result<Self> {
        let (min_n, max_n) = settings.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(CountVecError::invalid_config(format!(
                "ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max"
            )));
        }

        Ok(VectorizerConfig {
            ngram_range: settings.ngram_range,
            stop_words: settings.stop_words.map(|words| words.into_iter().collect()),
            max_features: settings
                .max_features
                .and_then(|n| usize::try_from(n).ok())
                .filter(|&n| n > 0),
            token_pattern: Arc::new(RegexTokenizer::with_pattern(&settings.token_pattern)?),
            vocabulary: settings.vocabulary.map(|words| words.into_iter().collect()),
        })
    }
}

fn sorted(words: &AHashSet<String>) -> Vec<String> {
    let mut words: Vec<String> = words.iter().cloned().collect();
    words.sort_unstable();
    words
}
