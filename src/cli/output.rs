//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{CountVecArgs, OutputFormat};
use crate::error::Result;
use crate::vectorizer::FrequencyVector;

/// Result structure for fitting.
#[derive(Debug, Serialize, Deserialize)]
pub struct FitResult {
    pub documents: usize,
    pub vocabulary_size: usize,
    pub model_path: Option<String>,
    pub duration_ms: u64,
}

/// One document's counts, keys sorted for stable output.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentVector {
    pub document: usize,
    pub counts: BTreeMap<String, u32>,
}

impl DocumentVector {
    /// Convert a frequency vector, optionally dropping zero counts.
    pub fn new(document: usize, vector: FrequencyVector, sparse: bool) -> Self {
        let counts = vector
            .into_iter()
            .filter(|&(_, count)| !sparse || count > 0)
            .collect();
        DocumentVector { document, counts }
    }
}

/// Result structure for transform and fit-transform.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub num_features: usize,
    pub vectors: Vec<DocumentVector>,
    pub duration_ms: u64,
}

/// Result structure for the vocabulary listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyResult {
    pub size: usize,
    pub tokens: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for FitResult {
    fn print_human(&self) {
        println!("Documents: {}", self.documents);
        println!("Vocabulary size: {}", self.vocabulary_size);
        if let Some(path) = &self.model_path {
            println!("Model: {path}");
        }
        println!("Time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for TransformResult {
    fn print_human(&self) {
        for vector in &self.vectors {
            let non_zero = vector.counts.values().filter(|&&count| count > 0).count();
            println!(
                "Document {} ({} of {} features non-zero)",
                vector.document + 1,
                non_zero,
                self.num_features
            );
            println!("─────────────");
            for (token, count) in &vector.counts {
                println!("  {token}: {count}");
            }
            println!();
        }
        println!("Time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for VocabularyResult {
    fn print_human(&self) {
        println!("Vocabulary ({} tokens):", self.size);
        println!("═══════════");
        for token in &self.tokens {
            println!("{token}");
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &CountVecArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", to_json(result, args.pretty)?);
            Ok(())
        }
    }
}

/// Serialize a result as JSON.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
