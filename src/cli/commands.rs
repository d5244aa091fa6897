//! Command implementations for the countvec CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::vectorizer::{CountVectorizer, VectorizerModel};

/// Execute a CLI command.
pub fn execute_command(args: CountVecArgs) -> Result<()> {
    match &args.command {
        Command::Fit(fit_args) => fit(fit_args, &args),
        Command::Transform(transform_args) => transform(transform_args, &args),
        Command::FitTransform(fit_transform_args) => fit_transform(fit_transform_args, &args),
        Command::Vocab(vocab_args) => vocab(vocab_args, &args),
    }
}

/// Read one document per line from a file, or from stdin for "-".
pub fn read_documents(path: &Path) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open documents file {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let documents = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read documents from {}", path.display()))?;
    info!("Read {} documents from {}", documents.len(), path.display());
    Ok(documents)
}

/// Fit a model on a corpus and save it.
fn fit(args: &FitArgs, cli_args: &CountVecArgs) -> Result<()> {
    let start_time = Instant::now();
    let corpus = read_documents(&args.corpus)?;

    let mut vectorizer = CountVectorizer::with_config(args.options.build_config()?);
    vectorizer.fit(&corpus);
    vectorizer.to_model()?.save(&args.output, cli_args.pretty)?;

    output_result(
        "Model fitted successfully",
        &FitResult {
            documents: corpus.len(),
            vocabulary_size: vectorizer.num_features(),
            model_path: Some(args.output.to_string_lossy().to_string()),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Transform documents with a saved model.
fn transform(args: &TransformArgs, cli_args: &CountVecArgs) -> Result<()> {
    let start_time = Instant::now();
    let vectorizer = CountVectorizer::from_model(VectorizerModel::load(&args.model)?)?;
    let documents = read_documents(&args.input)?;

    let vectors = if args.parallel {
        vectorizer.transform_par(&documents)?
    } else {
        vectorizer.transform_batch(&documents)?
    };

    output_result(
        "Documents transformed",
        &TransformResult {
            num_features: vectorizer.num_features(),
            vectors: vectors
                .into_iter()
                .enumerate()
                .map(|(i, vector)| DocumentVector::new(i, vector, args.sparse))
                .collect(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Fit on a corpus and print the vectors of the same corpus.
fn fit_transform(args: &FitTransformArgs, cli_args: &CountVecArgs) -> Result<()> {
    let start_time = Instant::now();
    let corpus = read_documents(&args.corpus)?;

    let mut vectorizer = CountVectorizer::with_config(args.options.build_config()?);
    let vectors = vectorizer.fit_transform(&corpus);

    if let Some(output) = &args.output {
        vectorizer.to_model()?.save(output, cli_args.pretty)?;
    }

    output_result(
        "Corpus fitted and transformed",
        &TransformResult {
            num_features: vectorizer.num_features(),
            vectors: vectors
                .into_iter()
                .enumerate()
                .map(|(i, vector)| DocumentVector::new(i, vector, args.sparse))
                .collect(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the vocabulary of a saved model.
fn vocab(args: &VocabArgs, cli_args: &CountVecArgs) -> Result<()> {
    let model = VectorizerModel::load(&args.model)?;

    output_result(
        "Model vocabulary",
        &VocabularyResult {
            size: model.vocabulary.len(),
            tokens: model.vocabulary,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountVecError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_documents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.txt");
        fs::write(&path, "first line\n\nthird line\n").unwrap();

        let documents = read_documents(&path).unwrap();
        assert_eq!(documents, vec!["first line", "", "third line"]);
    }

    #[test]
    fn test_read_documents_missing_file_names_path() {
        let path = Path::new("/nonexistent/corpus.txt");
        let error = read_documents(path).unwrap_err();

        assert!(matches!(error, CountVecError::Anyhow(_)));
        assert!(error.to_string().contains("/nonexistent/corpus.txt"));
    }

    #[test]
    fn test_fit_then_transform_commands() {
        let temp_dir = TempDir::new().unwrap();
        let corpus = temp_dir.path().join("corpus.txt");
        let model = temp_dir.path().join("model.json");
        fs::write(
            &corpus,
            "Somebody once told me the world is gonna roll me\nI ain't the sharpest tool in the shed\n",
        )
        .unwrap();

        let args = CountVecArgs::try_parse_from([
            "countvec",
            "--quiet",
            "--format",
            "json",
            "fit",
            corpus.to_str().unwrap(),
            "--output",
            model.to_str().unwrap(),
        ])
        .unwrap();
        execute_command(args).unwrap();

        let loaded = VectorizerModel::load(&model).unwrap();
        assert_eq!(loaded.vocabulary.len(), 15);

        let args = CountVecArgs::try_parse_from([
            "countvec",
            "--quiet",
            "--format",
            "json",
            "transform",
            model.to_str().unwrap(),
            corpus.to_str().unwrap(),
        ])
        .unwrap();
        execute_command(args).unwrap();
    }

    #[test]
    fn test_missing_corpus() {
        let args = CountVecArgs::try_parse_from([
            "countvec",
            "--quiet",
            "fit",
            "/nonexistent/corpus.txt",
            "--output",
            "/nonexistent/model.json",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
