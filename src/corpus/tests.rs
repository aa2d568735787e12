use std::io::{Cursor, Write};

use super::*;
use crate::constants::NO_REVIEWS_SENTINEL;

const SAMPLE_CORPUS: &str = "\
McDonald's. The food was average, but the customer service was unpleasant.
Subway. Subway's food was good, and the service was satisfying.
McDonald's. The burgers were awful and the staff was forgettable.
In-n-Out. Incredible burgers with amazing service.
Taco Bell. The tacos were bad, and the service was average.
";

fn sample_index() -> ReviewIndex {
    build_index(SAMPLE_CORPUS)
}

#[test]
fn test_build_groups_reviews_by_name() {
    let index = sample_index();

    assert_eq!(index.len(), 4);
    assert_eq!(index.review_count(), 5);
    assert_eq!(
        index.get("McDonald's").unwrap(),
        &[
            "The food was average, but the customer service was unpleasant.".to_string(),
            "The burgers were awful and the staff was forgettable.".to_string(),
        ]
    );
}

#[test]
fn test_restaurant_names_keep_first_seen_order() {
    let index = sample_index();
    let names: Vec<&str> = index.restaurant_names().collect();
    assert_eq!(names, vec!["McDonald's", "Subway", "In-n-Out", "Taco Bell"]);
}

#[test]
fn test_split_happens_at_first_delimiter_only() {
    let index = build_index("Pret A Manger. Good food. Bad service. Really.");
    assert_eq!(
        index.get("Pret A Manger").unwrap(),
        &["Good food. Bad service. Really.".to_string()]
    );
}

#[test]
fn test_name_and_review_are_trimmed() {
    let index = build_index("   IHOP  .   pancakes were enjoyable   \n");
    assert_eq!(
        index.get("IHOP").unwrap(),
        &["pancakes were enjoyable".to_string()]
    );
}

#[test]
fn test_lines_without_delimiter_are_skipped() {
    let corpus = "no delimiter here\nChipotle.bowl without space\n\n   \nChipotle. Good burrito.";
    let index = build_index(corpus);

    assert_eq!(index.len(), 1);
    assert_eq!(index.get("Chipotle").unwrap(), &["Good burrito.".to_string()]);

    let stats = index.stats();
    assert_eq!(stats.records, 1);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.blank_lines, 2);
    assert_eq!(stats.total_lines(), 5);
}

#[test]
fn test_trailing_period_only_line_is_skipped() {
    // The line is trimmed before splitting, so "Name. " has no delimiter left.
    let index = build_index("Cinnabon. \n");
    assert!(index.is_empty());
    assert_eq!(index.stats().skipped_lines, 1);
}

#[test]
fn test_empty_corpus_resolves_everything_to_sentinel() {
    let index = build_index("");
    assert!(index.is_empty());
    assert_eq!(index.lookup("anything"), ReviewLookup::NotFound);
    assert_eq!(index.find(""), vec![NO_REVIEWS_SENTINEL.to_string()]);

    let index = build_index("garbage\nmore garbage\n");
    assert_eq!(index.find("garbage"), vec![NO_REVIEWS_SENTINEL.to_string()]);
}

#[test]
fn test_find_unique_match_returns_reviews_in_order() {
    let index = sample_index();
    assert_eq!(
        index.find("mcdonald's"),
        index.get("McDonald's").unwrap().to_vec()
    );
    assert_eq!(
        index.find("TACO"),
        vec!["The tacos were bad, and the service was average.".to_string()]
    );
}

#[test]
fn test_find_no_match_returns_sentinel() {
    let index = sample_index();
    let reviews = index.find("zzz-nonexistent");
    assert_eq!(reviews, vec![NO_REVIEWS_SENTINEL.to_string()]);
}

#[test]
fn test_ambiguous_fragment_merges_in_key_then_review_order() {
    let index = sample_index();
    // "n" occurs in "McDonald's" and "In-n-Out".
    let merged = index.find("n");
    let mut expected = index.get("McDonald's").unwrap().to_vec();
    expected.extend(index.get("In-n-Out").unwrap().iter().cloned());
    assert_eq!(merged, expected);
}

#[test]
fn test_empty_fragment_matches_every_key() {
    let index = sample_index();
    let all = index.find("");
    assert_eq!(all.len(), index.review_count());
    assert_eq!(all[0], index.entries()[0].reviews[0]);
}

#[test]
fn test_exact_name_wins_no_ranking() {
    let index = build_index("Burger King. Good whoppers.\nBurger. Average patties.");
    // "Burger" is a substring of both keys; both are merged, no best-match.
    assert_eq!(
        index.find("Burger"),
        vec!["Good whoppers.".to_string(), "Average patties.".to_string()]
    );
}

#[test]
fn test_build_twice_is_structurally_equal() {
    assert_eq!(build_index(SAMPLE_CORPUS), build_index(SAMPLE_CORPUS));
}

#[test]
fn test_from_reader_matches_parse() {
    let from_reader = ReviewIndex::from_reader(Cursor::new(SAMPLE_CORPUS)).unwrap();
    assert_eq!(from_reader, build_index(SAMPLE_CORPUS));
}

#[test]
fn test_from_reader_rejects_invalid_utf8() {
    let bytes: &[u8] = b"Subway. ok\n\xff\xfe. broken\n";
    let err = ReviewIndex::from_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, CorpusError::Read { line: 2, .. }));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CORPUS.as_bytes()).unwrap();

    let index = ReviewIndex::from_path(file.path()).unwrap();
    assert_eq!(index, sample_index());
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReviewIndex::from_path(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, CorpusError::Open { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_review_lookup_helpers() {
    let found = ReviewLookup::Found(vec!["a".into(), "b".into()]);
    assert!(found.is_found());
    assert_eq!(found.len(), 2);
    assert_eq!(found.debug_status(), "FOUND");

    let missing = ReviewLookup::NotFound;
    assert!(!missing.is_found());
    assert_eq!(missing.len(), 1);
    assert!(!missing.is_empty());
    assert_eq!(missing.debug_status(), "NOT_FOUND");
    assert_eq!(missing.into_reviews(), vec![NO_REVIEWS_SENTINEL.to_string()]);
}
