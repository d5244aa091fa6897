//! Count vectorizer implementation.
//!
//! The vectorizer has two lifecycle states. Freshly constructed (without a
//! pre-supplied vocabulary) it is unfitted and every `transform` fails with
//! [`CountVecError::NotFitted`]. After `fit` it holds a vocabulary and maps
//! any text to a [`FrequencyVector`] over exactly that vocabulary.
//!
//! # Concurrency
//!
//! `fit` takes `&mut self`, so the borrow checker serializes it against every
//! other call. `transform` and its batch variants take `&self` and may run from
//! many threads at once; the zero-count template is initialised at most once
//! per vocabulary through a [`OnceLock`].

use std::sync::{Arc, OnceLock};

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::{CountVecError, Result};
use crate::vectorizer::config::VectorizerConfig;
use crate::vectorizer::feature_limit::{TokenCounts, limit_features};
use crate::vectorizer::{FrequencyVector, Vocabulary};

/// A learned vocabulary together with its lazily built zero-count template.
///
/// Replacing the vocabulary means replacing the whole state, which drops the
/// template with it.
#[derive(Clone, Debug)]
struct FittedState {
    vocabulary: Vocabulary,
    default_counts: OnceLock<FrequencyVector>,
}

impl FittedState {
    fn new(vocabulary: Vocabulary) -> Self {
        FittedState {
            vocabulary,
            default_counts: OnceLock::new(),
        }
    }

    /// Every vocabulary token mapped to zero.
    fn default_counts(&self) -> &FrequencyVector {
        self.default_counts.get_or_init(|| {
            debug!(
                "Building zero-count template for {} tokens",
                self.vocabulary.len()
            );
            self.vocabulary
                .iter()
                .map(|token| (token.clone(), 0))
                .collect()
        })
    }
}

/// Bag-of-words vectorizer producing per-document token counts.
///
/// # Examples
///
/// ```
/// use countvec::vectorizer::{CountVectorizer, VectorizerConfig};
///
/// let corpus = [
///     "Somebody once told me the world is gonna roll me",
///     "I ain't the sharpest tool in the shed",
/// ];
///
/// let mut vectorizer = CountVectorizer::new();
/// let vectors = vectorizer.fit_transform(&corpus);
///
/// assert_eq!(vectorizer.num_features(), 15);
/// assert_eq!(vectors[0]["me"], 2);
/// assert_eq!(vectors[1]["the"], 2);
/// assert_eq!(vectors[1]["me"], 0);
/// ```
#[derive(Clone, Debug)]
pub struct CountVectorizer {
    config: Arc<VectorizerConfig>,
    fitted: Option<FittedState>,
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountVectorizer {
    /// Create a vectorizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(VectorizerConfig::default())
    }

    /// Create a vectorizer with the given configuration.
    ///
    /// A vocabulary supplied in the configuration puts the vectorizer straight
    /// into the fitted state; the first `fit` replaces it.
    pub fn with_config(config: impl Into<Arc<VectorizerConfig>>) -> Self {
        let config = config.into();

        if config.has_inert_settings() {
            warn!(
                "ngram_range {:?} and stop_words are not applied yet; tokenization stays unigram-only",
                config.ngram_range
            );
        }

        let fitted = config.vocabulary.clone().map(FittedState::new);

        CountVectorizer { config, fitted }
    }

    /// Rebuild a fitted vectorizer from a configuration and a learned vocabulary.
    pub(crate) fn from_parts(config: Arc<VectorizerConfig>, vocabulary: Vocabulary) -> Self {
        CountVectorizer {
            config,
            fitted: Some(FittedState::new(vocabulary)),
        }
    }

    /// Learn the vocabulary from `corpus`.
    ///
    /// Tokens are counted across the whole corpus. With a positive
    /// `max_features` only that many of the most frequent tokens are kept.
    /// Any previous vocabulary is discarded. An empty corpus yields an empty
    /// vocabulary.
    pub fn fit<T: AsRef<str>>(&mut self, corpus: &[T]) -> &mut Self {
        let vocabulary = self.learn_vocabulary(corpus);
        self.fitted = Some(FittedState::new(vocabulary));
        self
    }

    /// Count the tokens of a single text.
    ///
    /// The result has one entry per vocabulary token. Tokens outside the
    /// vocabulary are dropped.
    pub fn transform(&self, text: &str) -> Result<FrequencyVector> {
        let state = self.fitted_state()?;
        Ok(self.count_tokens(state, text))
    }

    /// Count the tokens of every text in `corpus`, preserving input order.
    pub fn transform_batch<T: AsRef<str>>(&self, corpus: &[T]) -> Result<Vec<FrequencyVector>> {
        let state = self.fitted_state()?;
        debug!("Transforming {} texts", corpus.len());

        Ok(corpus
            .iter()
            .map(|text| self.count_tokens(state, text.as_ref()))
            .collect())
    }

    /// Same contract as [`transform_batch`](Self::transform_batch), with the
    /// documents spread over the rayon thread pool.
    pub fn transform_par<T: AsRef<str> + Sync>(
        &self,
        corpus: &[T],
    ) -> Result<Vec<FrequencyVector>> {
        let state = self.fitted_state()?;
        debug!("Transforming {} texts in parallel", corpus.len());

        Ok(corpus
            .par_iter()
            .map(|text| self.count_tokens(state, text.as_ref()))
            .collect())
    }

    /// Fit on `corpus`, then transform the same corpus.
    pub fn fit_transform<T: AsRef<str>>(&mut self, corpus: &[T]) -> Vec<FrequencyVector> {
        let state = FittedState::new(self.learn_vocabulary(corpus));
        let vectors = corpus
            .iter()
            .map(|text| self.count_tokens(&state, text.as_ref()))
            .collect();
        self.fitted = Some(state);
        vectors
    }

    /// Lower-case `text` and split it with the configured token pattern.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.for_each_token(text, |token| tokens.push(token.to_string()));
        tokens
    }

    /// The current vocabulary, or `None` before the vectorizer is fitted.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.fitted.as_ref().map(|state| &state.vocabulary)
    }

    /// The current vocabulary in lexicographic order.
    pub fn sorted_vocabulary(&self) -> Option<Vec<String>> {
        self.vocabulary().map(|vocabulary| {
            let mut tokens: Vec<String> = vocabulary.iter().cloned().collect();
            tokens.sort_unstable();
            tokens
        })
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of vocabulary tokens (zero when unfitted).
    pub fn num_features(&self) -> usize {
        self.vocabulary().map_or(0, |vocabulary| vocabulary.len())
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    fn fitted_state(&self) -> Result<&FittedState> {
        self.fitted.as_ref().ok_or(CountVecError::NotFitted)
    }

    fn learn_vocabulary<T: AsRef<str>>(&self, corpus: &[T]) -> Vocabulary {
        debug!("Fitting CountVectorizer on {} texts", corpus.len());

        let mut counts = TokenCounts::new();
        for text in corpus {
            let lowered = text.as_ref().to_lowercase();
            counts.extend(self.config.token_pattern.tokenize(&lowered));
        }
        let distinct = counts.len();

        let vocabulary: Vocabulary = match self.config.feature_cap() {
            Some(max_features) => limit_features(counts, max_features).into_iter().collect(),
            None => counts.into_tokens().collect(),
        };

        debug!(
            "CountVectorizer fitting complete: {} distinct tokens, vocabulary size {}",
            distinct,
            vocabulary.len()
        );
        vocabulary
    }

    fn count_tokens(&self, state: &FittedState, text: &str) -> FrequencyVector {
        let mut counts = state.default_counts().clone();
        self.for_each_token(text, |token| {
            if let Some(count) = counts.get_mut(token) {
                *count = count.saturating_add(1);
            }
        });
        counts
    }

    fn for_each_token(&self, text: &str, f: impl FnMut(&str)) {
        let lowered = text.to_lowercase();
        self.config.token_pattern.tokenize(&lowered).for_each(f);
    }
}
