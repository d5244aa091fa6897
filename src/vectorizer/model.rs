//! Persisted vectorizer models.
//!
//! A [`VectorizerModel`] is the JSON snapshot of a fitted [`CountVectorizer`]:
//! its settings (with the token pattern as a regex string) plus the learned
//! vocabulary in sorted order. Only vectorizers whose tokenizer exposes a
//! pattern can be saved.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{CountVecError, Result};
use crate::vectorizer::config::{VectorizerConfig, VectorizerSettings};
use crate::vectorizer::count_vectorizer::CountVectorizer;

/// Current on-disk model format.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Serializable snapshot of a fitted vectorizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorizerModel {
    /// Model format version.
    pub format_version: u32,

    /// Settings the vectorizer was built with.
    pub settings: VectorizerSettings,

    /// Learned vocabulary, sorted.
    pub vocabulary: Vec<String>,
}

impl VectorizerModel {
    /// Snapshot a fitted vectorizer.
    pub fn from_vectorizer(vectorizer: &CountVectorizer) -> Result<Self> {
        let vocabulary = vectorizer
            .sorted_vocabulary()
            .ok_or(CountVecError::NotFitted)?;

        Ok(VectorizerModel {
            format_version: MODEL_FORMAT_VERSION,
            settings: vectorizer.config().to_settings()?,
            vocabulary,
        })
    }

    /// Rebuild the fitted vectorizer described by this model.
    pub fn into_vectorizer(self) -> Result<CountVectorizer> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(CountVecError::invalid_argument(format!(
                "unsupported model format version {} (expected {})",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }

        let config = VectorizerConfig::try_from(self.settings)?;
        let vocabulary = self.vocabulary.into_iter().collect();
        Ok(CountVectorizer::from_parts(Arc::new(config), vocabulary))
    }

    /// Write the model as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;

        info!(
            "Saved model with {} features to {}",
            self.vocabulary.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a model written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl CountVectorizer {
    /// Snapshot this vectorizer; fails with `NotFitted` before `fit`.
    pub fn to_model(&self) -> Result<VectorizerModel> {
        VectorizerModel::from_vectorizer(self)
    }

    /// Rebuild a fitted vectorizer from a model.
    pub fn from_model(model: VectorizerModel) -> Result<Self> {
        model.into_vectorizer()
    }
}
