//! Text analysis for countvec.
//!
//! The vectorizer does not split text itself. It lower-cases each document and
//! hands it to a [`tokenizer::Tokenizer`], the pluggable "string to ordered
//! sequence of substrings" capability configured on
//! [`VectorizerConfig`](crate::vectorizer::VectorizerConfig).

pub mod tokenizer;
