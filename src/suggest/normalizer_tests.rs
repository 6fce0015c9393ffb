//! Tests for the response normalizer

use super::*;
use crate::suggest::response::{PageTerms, Thumbnail};
use proptest::prelude::*;

fn record(index: i64, title: &str) -> PageRecord {
    PageRecord {
        index: Some(index),
        title: Some(title.to_string()),
        terms: None,
        thumbnail: None,
    }
}

fn pages(records: Vec<(&str, PageRecord)>) -> HashMap<String, PageRecord> {
    records
        .into_iter()
        .map(|(key, record)| (key.to_string(), record))
        .collect()
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_empty_pages_yield_empty_list() {
    let list = normalize(&HashMap::new());
    assert!(list.is_empty());
}

#[test]
fn test_rank_order_ignores_key_order() {
    let input = pages(vec![
        ("100", record(3, "Third")),
        ("200", record(1, "First")),
        ("300", record(2, "Second")),
    ]);

    let list = normalize(&input);
    assert_eq!(list.len(), 3);
    assert_eq!(list.titles(), vec!["First", "Second", "Third"]);
}

#[test]
fn test_sparse_indices_leave_hole() {
    let input = pages(vec![("7", record(1, "One")), ("8", record(3, "Three"))]);

    let list = normalize(&input);
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0).map(|s| s.title.as_str()), Some("One"));
    assert!(list.is_hole(1));
    assert_eq!(list.get(2).map(|s| s.title.as_str()), Some("Three"));
}

#[test]
fn test_description_and_thumbnail_are_carried() {
    let mut hilton = record(2, "Paris Hilton");
    hilton.terms = Some(PageTerms {
        description: vec!["american media personality".to_string(), "ignored".to_string()],
    });
    hilton.thumbnail = Some(Thumbnail {
        source: Some("https://upload.example/Hilton.jpg".to_string()),
    });
    let input = pages(vec![("12", record(1, "Paris")), ("45", hilton)]);

    let list = normalize(&input);
    let paris = list.get(0).unwrap();
    assert_eq!(paris.description, None);
    assert_eq!(paris.thumbnail_url, None);

    let hilton = list.get(1).unwrap();
    assert_eq!(
        hilton.description.as_deref(),
        Some("American media personality")
    );
    assert_eq!(
        hilton.thumbnail_url.as_deref(),
        Some("https://upload.example/Hilton.jpg")
    );
}

#[test]
fn test_terms_without_description_yield_absent() {
    let mut page = record(1, "Paris");
    page.terms = Some(PageTerms::default());
    let list = normalize(&pages(vec![("1", page)]));
    assert_eq!(list.get(0).unwrap().description, None);
}

#[test]
fn test_records_without_index_or_title_are_skipped() {
    let no_index = PageRecord {
        index: None,
        title: Some("Nowhere".to_string()),
        ..Default::default()
    };
    let no_title = PageRecord {
        index: Some(2),
        title: None,
        ..Default::default()
    };
    let input = pages(vec![
        ("1", record(1, "Kept")),
        ("2", no_index),
        ("3", no_title),
    ]);

    let list = normalize(&input);
    assert_eq!(list.len(), 1);
    assert_eq!(list.titles(), vec!["Kept"]);
}

#[test]
fn test_non_positive_and_huge_indices_are_skipped() {
    let input = pages(vec![
        ("1", record(0, "Zero")),
        ("2", record(-4, "Negative")),
        ("3", record(MAX_RANK as i64 + 1, "Too far")),
        ("4", record(2, "Two")),
    ]);

    let list = normalize(&input);
    assert_eq!(list.len(), 2);
    assert!(list.is_hole(0));
    assert_eq!(list.titles(), vec!["Two"]);
}

#[test]
fn test_duplicate_rank_last_numeric_key_wins() {
    let input = pages(vec![
        ("900", record(1, "Later key")),
        ("80", record(1, "Earlier key")),
    ]);

    let list = normalize(&input);
    assert_eq!(list.titles(), vec!["Later key"]);
}

#[test]
fn test_duplicate_rank_negative_key_sorts_after_page_ids() {
    let input = pages(vec![
        ("-1", record(1, "Missing page")),
        ("22989", record(1, "Paris")),
    ]);

    let list = normalize(&input);
    assert_eq!(list.titles(), vec!["Missing page"]);
}

#[test]
fn test_compare_page_keys() {
    assert_eq!(compare_page_keys("9", "10"), Ordering::Less);
    assert_eq!(compare_page_keys("-1", "3"), Ordering::Greater);
    assert_eq!(compare_page_keys("-1", "-2"), Ordering::Greater);
    assert_eq!(compare_page_keys("007", "8"), Ordering::Greater);
    assert_eq!(compare_page_keys("3", "abc"), Ordering::Less);
    assert_eq!(compare_page_keys("b", "a"), Ordering::Greater);
}

#[test]
fn test_paris_scenario_from_json() {
    let body = r#"{"query":{"pages":{
        "12":{"index":1,"title":"Paris"},
        "45":{"index":2,"title":"Paris Hilton","terms":{"description":["american..."]}}
    }}}"#;
    let response = crate::suggest::response::SearchResponse::from_json(body).unwrap();

    let list = normalize(response.pages().unwrap());
    assert_eq!(
        list.slots(),
        &[
            Some(Suggestion::new("Paris", None, None)),
            Some(Suggestion {
                title: "Paris Hilton".to_string(),
                description: Some("American...".to_string()),
                thumbnail_url: None,
            }),
        ]
    );
}

#[test]
fn test_malformed_record_beside_good_one_keeps_good_one() {
    let body = r#"{"query":{"pages":{
        "12":{"index":1,"title":"Paris","thumbnail":{"width":160}},
        "45":{"index":2,"title":"Paris Hilton"},
        "46":{"index":3,"title":["not","a","title"]},
        "47":{"index":"4","title":"Paris, Texas"}
    }}}"#;
    let response = crate::suggest::response::SearchResponse::from_json(body).unwrap();

    let list = normalize(response.pages().unwrap());
    assert_eq!(list.len(), 4);
    assert_eq!(list.get(0), Some(&Suggestion::new("Paris", None, None)));
    assert_eq!(list.get(1).map(|s| s.title.as_str()), Some("Paris Hilton"));
    assert!(list.is_hole(2));
    assert_eq!(list.get(3).map(|s| s.title.as_str()), Some("Paris, Texas"));
}

// =========================================================================
// Property-Based Tests
// =========================================================================

// For any permutation of 1..=N assigned to records under arbitrary page keys,
// the output is dense, has length N, and is in rank order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_permutation_yields_dense_rank_order(
        ranks in (1usize..12).prop_flat_map(|n| Just((1..=n).collect::<Vec<_>>()).prop_shuffle()),
        key_seed in 0u64..1_000_000u64,
    ) {
        let input: HashMap<String, PageRecord> = ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| {
                let key = (key_seed + i as u64 * 7919).to_string();
                (key, record(*rank as i64, &format!("Rank {}", rank)))
            })
            .collect();

        let list = normalize(&input);

        prop_assert_eq!(list.len(), ranks.len());
        prop_assert_eq!(list.present_count(), ranks.len());
        for (position, suggestion) in list.iter_present() {
            prop_assert_eq!(&suggestion.title, &format!("Rank {}", position + 1));
        }
    }
}

// For any set of distinct ranks, holes appear exactly at the missing ranks
// below the maximum.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_sparse_ranks_keep_holes(ranks in prop::collection::btree_set(1i64..40, 1..10)) {
        let input: HashMap<String, PageRecord> = ranks
            .iter()
            .map(|rank| (format!("p{}", rank), record(*rank, &rank.to_string())))
            .collect();

        let list = normalize(&input);
        let max = *ranks.iter().next_back().unwrap() as usize;

        prop_assert_eq!(list.len(), max);
        for position in 0..max {
            let expected_present = ranks.contains(&(position as i64 + 1));
            prop_assert_eq!(list.get(position).is_some(), expected_present);
            prop_assert_eq!(list.is_hole(position), !expected_present);
        }
    }
}
