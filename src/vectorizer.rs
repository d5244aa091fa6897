//! Bag-of-words feature extraction.
//!
//! [`CountVectorizer`] learns a fixed vocabulary from a corpus (`fit`) and maps
//! text onto integer frequency vectors keyed by that vocabulary (`transform`).
//! Every vector it produces has exactly the vocabulary's keys, whatever the
//! input text contains.
//!
//! # Examples
//!
//! ```
//! use countvec::vectorizer::CountVectorizer;
//!
//! let corpus = ["Some cool text", "Another cool text"];
//! let mut vectorizer = CountVectorizer::new();
//! let vector = vectorizer.fit(&corpus).transform("cool cool stuff").unwrap();
//!
//! assert_eq!(vector.len(), 4);
//! assert_eq!(vector["cool"], 2);
//! assert_eq!(vector["another"], 0);
//! ```

use ahash::{AHashMap, AHashSet};

pub mod config;
pub mod count_vectorizer;
pub mod feature_limit;
pub mod model;

pub use config::{VectorizerConfig, VectorizerSettings};
pub use count_vectorizer::CountVectorizer;
pub use model::VectorizerModel;

/// The set of tokens learned by `fit`.
pub type Vocabulary = AHashSet<String>;

/// Occurrence count of every vocabulary token within one document.
pub type FrequencyVector = AHashMap<String, u32>;
