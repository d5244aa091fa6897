//! # countvec
//!
//! A bag-of-words feature extractor for Rust.
//!
//! ## Features
//!
//! - Two-phase `fit` / `transform` contract
//! - Pluggable tokenizers (regex, Unicode words, whitespace)
//! - Top-N feature cap by corpus-wide token frequency
//! - Every output vector carries exactly the learned vocabulary
//! - JSON model persistence and a command line front end
//!
//! ## Example
//!
//! ```
//! use countvec::prelude::*;
//!
//! let corpus = ["Some cool text", "Another cool text"];
//! let mut vectorizer = CountVectorizer::new();
//! let vectors = vectorizer.fit_transform(&corpus);
//!
//! assert_eq!(vectors.len(), 2);
//! assert_eq!(vectors[0]["cool"], 1);
//! assert_eq!(vectors[0]["another"], 0);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod vectorizer;

pub mod prelude {
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{CountVecError, Result};
    pub use crate::vectorizer::{
        CountVectorizer, FrequencyVector, VectorizerConfig, VectorizerModel, VectorizerSettings,
        Vocabulary,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
