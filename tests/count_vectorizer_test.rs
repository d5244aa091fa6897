//! Integration tests for CountVectorizer fit/transform behaviour.

use ahash::AHashMap;
use countvec::prelude::*;

fn training_data() -> Vec<String> {
    vec![
        "Somebody once told me the world is gonna roll me".to_string(),
        "I ain't the sharpest tool in the shed".to_string(),
    ]
}

fn vector(entries: &[(&str, u32)]) -> FrequencyVector {
    entries
        .iter()
        .map(|&(token, count)| (token.to_string(), count))
        .collect()
}

fn corpus_counts(corpus: &[String]) -> AHashMap<String, u32> {
    let vectorizer = {
        let mut v = CountVectorizer::new();
        v.fit(corpus);
        v
    };
    let mut totals = AHashMap::new();
    for vector in vectorizer.transform_batch(corpus).unwrap() {
        for (token, count) in vector {
            *totals.entry(token).or_insert(0) += count;
        }
    }
    totals
}

#[test]
fn test_fit_returns_same_vectorizer() {
    let mut vectorizer = CountVectorizer::new();
    let fitted: *const CountVectorizer = vectorizer.fit(&["Some cool text", "Another cool text"]);

    assert!(std::ptr::eq(fitted, &vectorizer));
    assert!(vectorizer.vocabulary().is_some());
}

#[test]
fn test_transform_requires_fit() {
    let vectorizer = CountVectorizer::new();

    let error = vectorizer.transform("some test text").unwrap_err();
    assert!(error.is_not_fitted());

    let error = vectorizer.transform_batch(&training_data()).unwrap_err();
    assert!(error.is_not_fitted());
}

#[test]
fn test_fit_transform_data() -> Result<()> {
    let mut vectorizer = CountVectorizer::new();

    let expected = vec![
        vector(&[
            ("somebody", 1),
            ("once", 1),
            ("told", 1),
            ("me", 2),
            ("the", 1),
            ("world", 1),
            ("is", 1),
            ("gonna", 1),
            ("roll", 1),
            ("i", 0),
            ("ain't", 0),
            ("sharpest", 0),
            ("tool", 0),
            ("in", 0),
            ("shed", 0),
        ]),
        vector(&[
            ("i", 1),
            ("ain't", 1),
            ("the", 2),
            ("sharpest", 1),
            ("tool", 1),
            ("in", 1),
            ("shed", 1),
            ("somebody", 0),
            ("once", 0),
            ("told", 0),
            ("me", 0),
            ("world", 0),
            ("is", 0),
            ("gonna", 0),
            ("roll", 0),
        ]),
    ];

    let result = vectorizer.fit_transform(&training_data());
    assert_eq!(result, expected);

    // fit_transform is fit followed by transform on the same corpus
    let mut separate = CountVectorizer::new();
    assert_eq!(separate.fit(&training_data()).transform_batch(&training_data())?, expected);
    Ok(())
}

#[test]
fn test_extract_only_features_in_vocabulary() -> Result<()> {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&training_data());

    let test_data = [
        "Somebody once asked could I spare some change for gas?",
        "I need to get myself away from this place",
    ];

    let result = vectorizer.transform_batch(&test_data)?;
    assert_eq!(result.len(), 2);

    let vocabulary = vectorizer.vocabulary().unwrap();
    for vector in &result {
        let keys: Vocabulary = vector.keys().cloned().collect();
        assert_eq!(&keys, vocabulary);
    }

    assert_eq!(result[0]["somebody"], 1);
    assert_eq!(result[0]["once"], 1);
    assert_eq!(result[0]["i"], 1);
    assert_eq!(result[0].values().sum::<u32>(), 3);

    assert_eq!(result[1]["i"], 1);
    assert_eq!(result[1].values().sum::<u32>(), 1);
    Ok(())
}

#[test]
fn test_unseen_words_give_zero_vector() -> Result<()> {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&training_data());

    let result = vectorizer.transform("asked could spare change gas")?;
    assert_eq!(result.len(), 15);
    assert!(result.values().all(|&count| count == 0));
    Ok(())
}

#[test]
fn test_limit_features_count() {
    let config = VectorizerConfig::default().with_max_features(5);
    let mut vectorizer = CountVectorizer::with_config(config);
    vectorizer.fit(&training_data());

    assert_eq!(vectorizer.vocabulary().unwrap().len(), 5);
}

#[test]
fn test_limit_keeps_highest_counts() {
    let corpus = training_data();
    let totals = corpus_counts(&corpus);

    let config = VectorizerConfig::default().with_max_features(5);
    let mut vectorizer = CountVectorizer::with_config(config);
    vectorizer.fit(&corpus);
    let vocabulary = vectorizer.vocabulary().unwrap();

    assert!(vocabulary.contains("the"));
    assert!(vocabulary.contains("me"));

    let lowest_kept = vocabulary.iter().map(|t| totals[t]).min().unwrap();
    let highest_dropped = totals
        .iter()
        .filter(|(token, _)| !vocabulary.contains(*token))
        .map(|(_, &count)| count)
        .max()
        .unwrap();
    assert!(lowest_kept >= highest_dropped);
}

#[test]
fn test_limit_preserves_top_counts() {
    let corpus = training_data();
    let max_features = 5;

    let top_counts = |vectors: Vec<FrequencyVector>| -> Vec<u32> {
        let mut counts: Vec<u32> = vectors.into_iter().flat_map(|v| v.into_iter().map(|(_, count)| count)).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts.truncate(max_features);
        counts
    };

    let mut unbounded = CountVectorizer::new();
    let expected = top_counts(unbounded.fit_transform(&corpus));

    let config = VectorizerConfig::default().with_max_features(max_features);
    let mut capped = CountVectorizer::with_config(config);
    let result = top_counts(capped.fit_transform(&corpus));

    assert_eq!(result, expected);
}

#[test]
fn test_cap_at_or_above_distinct_count() {
    let mut unbounded = CountVectorizer::new();
    unbounded.fit(&training_data());

    for cap in [15, 16, 1000] {
        let config = VectorizerConfig::default().with_max_features(cap);
        let mut capped = CountVectorizer::with_config(config);
        capped.fit(&training_data());
        assert_eq!(capped.vocabulary(), unbounded.vocabulary());
    }
}

#[test]
fn test_case_insensitive_across_documents() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["Cool stuff", "so cool"]);

    let vocabulary = vectorizer.sorted_vocabulary().unwrap();
    assert_eq!(vocabulary, vec!["cool", "so", "stuff"]);
}

#[test]
fn test_vocabulary_totality_for_arbitrary_input() -> Result<()> {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&training_data());
    let vocabulary = vectorizer.vocabulary().unwrap().clone();

    let inputs = [
        "",
        "   ",
        "!!! ???",
        "THE THE the",
        "Ünïcödé wörds and the shed",
        "me me me me me me me me",
    ];
    for text in inputs {
        let vector = vectorizer.transform(text)?;
        let keys: Vocabulary = vector.keys().cloned().collect();
        assert_eq!(keys, vocabulary, "key set mismatch for {text:?}");
    }
    Ok(())
}

#[test]
fn test_concurrent_transform() -> Result<()> {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&training_data());
    let vectorizer = &vectorizer;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || vectorizer.transform("me and the shed")))
            .collect();
        for handle in handles {
            let vector = handle.join().unwrap().unwrap();
            assert_eq!(vector["me"], 1);
            assert_eq!(vector["the"], 1);
            assert_eq!(vector["shed"], 1);
        }
    });
    Ok(())
}
