//! Command line argument parsing for the countvec CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vectorizer::{VectorizerConfig, VectorizerSettings};

/// countvec - learn a bag-of-words vocabulary and turn text into count vectors
#[derive(Parser, Debug, Clone)]
#[command(name = "countvec")]
#[command(about = "Learn a bag-of-words vocabulary and turn text into token count vectors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CountVecArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CountVecArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Learn a vocabulary from a corpus and save the model
    Fit(FitArgs),

    /// Turn documents into count vectors with a saved model
    Transform(TransformArgs),

    /// Fit on a corpus and print the vectors of the same corpus
    #[command(name = "fit-transform")]
    FitTransform(FitTransformArgs),

    /// Print the vocabulary of a saved model
    Vocab(VocabArgs),
}

/// Options that shape the vectorizer built by `fit` and `fit-transform`.
#[derive(Args, Debug, Clone, Default)]
pub struct VectorizerOptions {
    /// Settings file (JSON); command line options override it
    #[arg(short, long, value_name = "SETTINGS_FILE")]
    pub settings: Option<PathBuf>,

    /// Keep only the N most frequent tokens (zero or negative: no cap)
    #[arg(short = 'm', long, value_name = "N", allow_negative_numbers = true)]
    pub max_features: Option<i64>,

    /// Regex that matches one token
    #[arg(short = 'p', long, value_name = "REGEX")]
    pub token_pattern: Option<String>,
}

impl VectorizerOptions {
    /// Merge the settings file (if any) with the command line overrides.
    pub fn settings(&self) -> Result<VectorizerSettings> {
        let mut settings = match &self.settings {
            Some(path) => VectorizerSettings::from_json_file(path)?,
            None => VectorizerSettings::default(),
        };

        if let Some(max_features) = self.max_features {
            settings.max_features = Some(max_features);
        }
        if let Some(pattern) = &self.token_pattern {
            settings.token_pattern = pattern.clone();
        }

        Ok(settings)
    }

    /// Build the vectorizer configuration.
    pub fn build_config(&self) -> Result<VectorizerConfig> {
        VectorizerConfig::try_from(self.settings()?)
    }
}

/// Arguments for fitting a model
#[derive(Parser, Debug, Clone)]
pub struct FitArgs {
    /// Corpus file, one document per line ("-" reads stdin)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Where to write the fitted model (JSON)
    #[arg(short, long, value_name = "MODEL")]
    pub output: PathBuf,

    #[command(flatten)]
    pub options: VectorizerOptions,
}

/// Arguments for transforming documents
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Fitted model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Input file, one document per line ("-" reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Transform documents on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Only print non-zero counts
    #[arg(long)]
    pub sparse: bool,
}

/// Arguments for fit-transform
#[derive(Parser, Debug, Clone)]
pub struct FitTransformArgs {
    /// Corpus file, one document per line ("-" reads stdin)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Also write the fitted model (JSON)
    #[arg(short, long, value_name = "MODEL")]
    pub output: Option<PathBuf>,

    /// Only print non-zero counts
    #[arg(long)]
    pub sparse: bool,

    #[command(flatten)]
    pub options: VectorizerOptions,
}

/// Arguments for printing a vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    /// Fitted model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
