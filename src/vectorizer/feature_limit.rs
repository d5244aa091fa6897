//! Corpus-wide token counting and the top-N feature cap.

use std::cmp::Reverse;

use ahash::AHashMap;

/// Corpus-wide occurrence counts, remembering the order in which each token
/// was first seen.
///
/// The first-seen order is the "counting order" used to break ties when the
/// feature cap is applied, which keeps capped vocabularies deterministic for a
/// given corpus.
#[derive(Clone, Debug, Default)]
pub struct TokenCounts {
    /// token -> (count, first-seen rank)
    counts: AHashMap<String, (u64, usize)>,
}

impl TokenCounts {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        if let Some((count, _)) = self.counts.get_mut(token) {
            *count = count.saturating_add(1);
        } else {
            let rank = self.counts.len();
            self.counts.insert(token.to_string(), (1, rank));
        }
    }

    /// Number of distinct tokens.
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).map(|&(count, _)| count)
    }

    /// All distinct tokens, in no particular order.
    pub fn into_tokens(self) -> impl Iterator<Item = String> {
        self.counts.into_iter().map(|(token, _)| token)
    }

    /// Entries sorted by descending count, ties kept in first-seen order.
    pub fn into_ranked(self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64, usize)> = self
            .counts
            .into_iter()
            .map(|(token, (count, rank))| (token, count, rank))
            .collect();
        entries.sort_unstable_by_key(|&(_, count, rank)| (Reverse(count), rank));
        entries
            .into_iter()
            .map(|(token, count, _)| (token, count))
            .collect()
    }
}

impl<'a> Extend<&'a str> for TokenCounts {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }
}

/// Keep the `max_features` most frequent tokens.
///
/// When `max_features` is at least the number of distinct tokens every token
/// is kept. Among tokens tied at the cut-off count, earlier-seen tokens win.
pub fn limit_features(counts: TokenCounts, max_features: usize) -> Vec<String> {
    if max_features >= counts.len() {
        return counts.into_tokens().collect();
    }

    let mut ranked = counts.into_ranked();
    ranked.truncate(max_features);
    ranked.into_iter().map(|(token, _)| token).collect()
}
