use super::prompt::rubric_score;
use super::*;
use crate::constants::NO_REVIEWS_SENTINEL;
use crate::scoring::ScorePair;

fn reviews(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_prompt_contains_rubric_and_format() {
    let prompt = classification_prompt(&[]);
    assert!(prompt.starts_with(
        "Analyze the following restaurant reviews and extract two scores for each review:\n\
         1. food_score (1-5)\n2. customer_service_score (1-5)\n\n"
    ));
    assert!(prompt.contains("- Score 1: awful, horrible, disgusting\n"));
    assert!(prompt.contains("- Score 5: awesome, incredible, amazing\n\nEach review contains"));
    assert!(prompt.contains("one for food and one for customer service."));
    assert!(prompt.ends_with("    ...\n  ]\n}"));
}

#[test]
fn test_prompt_appends_reviews_in_order() {
    let batch = reviews(&["Food was good, service bad.", "Awful food, amazing staff."]);
    let prompt = classification_prompt(&batch);
    assert!(prompt.ends_with(
        "\n- \"Food was good, service bad.\"\n- \"Awful food, amazing staff.\""
    ));
    assert_eq!(prompt, classification_prompt(&batch));
}

#[test]
fn test_rubric_levels_are_ordered() {
    for (i, level) in RUBRIC.iter().enumerate() {
        assert_eq!(level.score, i as u32 + 1);
    }
    assert_eq!(rubric_score("forgettable"), Some(3));
    assert_eq!(rubric_score("tasty"), None);
}

#[test]
fn test_parse_classification() {
    let body = r#"{"reviews": [
        {"food_score": 4, "customer_service_score": 2},
        {"food_score": 1, "customer_service_score": 5}
    ]}"#;
    assert_eq!(
        parse_classification(body).unwrap(),
        vec![ScorePair::new(4, 2), ScorePair::new(1, 5)]
    );
}

#[test]
fn test_parse_missing_fields_default_to_zero() {
    let body = r#"{"reviews": [{"food_score": 3}, {"customer_service_score": null}, {}]}"#;
    let pairs = parse_classification(body).unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].food_score, 3);
    assert_eq!(pairs[0].customer_service_score, 0);
    assert_eq!(pairs[1].food_score, 0);
    assert_eq!(pairs[2].customer_service_score, 0);
}

#[test]
fn test_parse_ignores_extra_fields() {
    let body = r#"{"reviews": [{"food_score": 5, "customer_service_score": 5, "note": "x"}], "model": "y"}"#;
    assert_eq!(parse_classification(body).unwrap().len(), 1);
}

#[test]
fn test_parse_rejects_markdown_fence() {
    let body = "```json\n{\"reviews\": []}\n```";
    let err = parse_classification(body).unwrap_err();
    assert!(matches!(err, ClassifierError::MalformedResponse { .. }));
    assert!(err.is_parse_failure());
}

#[test]
fn test_parse_rejects_missing_reviews_key() {
    let err = parse_classification(r#"{"scores": []}"#).unwrap_err();
    assert!(err.is_parse_failure());
}

#[test]
fn test_parse_rejects_negative_and_fractional_scores() {
    for body in [
        r#"{"reviews": [{"food_score": -1, "customer_service_score": 3}]}"#,
        r#"{"reviews": [{"food_score": 2.5, "customer_service_score": 3}]}"#,
        r#"{"reviews": [{"food_score": "4", "customer_service_score": 3}]}"#,
    ] {
        assert!(parse_classification(body).is_err(), "{body}");
    }
}

#[test]
fn test_parse_empty_body() {
    assert!(matches!(
        parse_classification("  \n"),
        Err(ClassifierError::EmptyResponse)
    ));
}

#[test]
fn test_malformed_excerpt_is_truncated() {
    let body = "x".repeat(500);
    match parse_classification(&body) {
        Err(ClassifierError::MalformedResponse { excerpt, .. }) => assert_eq!(excerpt.len(), 120),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_ensure_one_pair_per_review() {
    let batch = reviews(&["a", "b"]);
    let pairs = vec![ScorePair::new(1, 1)];
    let err = ensure_one_pair_per_review(&batch, &pairs).unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::CountMismatch {
            expected: 2,
            actual: 1
        }
    ));
    assert!(!err.is_parse_failure());

    assert!(ensure_one_pair_per_review(&batch[..1], &pairs).is_ok());
}

#[test]
fn test_keyword_classifier_reads_adjectives_in_order() {
    let classifier = KeywordClassifier::new();
    let pair = classifier.score_review(
        "The food at McDonald's was average, but the customer service was unpleasant.",
    );
    assert_eq!(pair, ScorePair::new(3, 2));

    let pair = classifier.score_review("Incredible burgers. Service? Awful!");
    assert_eq!(pair, ScorePair::new(5, 1));
}

#[test]
fn test_keyword_classifier_missing_adjectives_default_to_zero() {
    let classifier = KeywordClassifier::new();
    assert_eq!(classifier.score_review("The food was good."), ScorePair::new(4, 0));
    assert_eq!(classifier.score_review(NO_REVIEWS_SENTINEL), ScorePair::new(0, 0));
}

#[test]
fn test_keyword_classifier_ignores_partial_words() {
    // "badge" and "goodness" are not rubric adjectives.
    let classifier = KeywordClassifier::new();
    assert_eq!(
        classifier.score_review("badge goodness amazing good"),
        ScorePair::new(5, 4)
    );
}

#[tokio::test]
async fn test_keyword_classifier_batch_preserves_order() {
    let batch = reviews(&["awful and bad", "good and amazing"]);
    let pairs = KeywordClassifier::new().classify(&batch).await.unwrap();
    assert_eq!(pairs, vec![ScorePair::new(1, 2), ScorePair::new(4, 5)]);
}

#[tokio::test]
async fn test_mock_classifier_records_batches() {
    let classifier = MockReviewClassifier::responding(
        r#"{"reviews": [{"food_score": 2, "customer_service_score": 4}]}"#,
    );
    let batch = reviews(&["only review"]);
    let pairs = classifier.classify(&batch).await.unwrap();
    assert_eq!(pairs, vec![ScorePair::new(2, 4)]);
    assert_eq!(classifier.batches(), vec![batch]);
}

#[tokio::test]
async fn test_mock_classifier_failure() {
    let err = MockReviewClassifier::failing("rate limited")
        .classify(&reviews(&["x"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClassifierError::Provider(_)));
}
