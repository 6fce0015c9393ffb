//! Response normalizer
//!
//! The API delivers pages keyed by page id, so map iteration order says
//! nothing about relevance. Rank lives only in each record's `index` field and
//! may have gaps when the provider drops an entry.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::response::PageRecord;
use super::types::{Suggestion, SuggestionList};

/// Highest rank accepted from a response
pub const MAX_RANK: usize = 500;

/// Rebuild the rank-ordered suggestion list from a page map
///
/// Each record lands at position `index - 1`. Positions no record claims are
/// left as holes. When two records claim the same rank, the one whose page key
/// sorts last wins.
pub fn normalize(pages: &HashMap<String, PageRecord>) -> SuggestionList {
    let mut keys: Vec<&String> = pages.keys().collect();
    keys.sort_by(|a, b| compare_page_keys(a, b));

    let mut ranked: BTreeMap<usize, Suggestion> = BTreeMap::new();
    for key in keys {
        let record = &pages[key];
        let Some(rank) = valid_rank(key, record) else {
            continue;
        };
        let Some(title) = record.title.as_deref() else {
            log::debug!("Skipping page {} without a title", key);
            continue;
        };
        ranked.insert(rank, to_suggestion(title, record));
    }

    let max_rank = ranked.keys().next_back().copied().unwrap_or(0);
    let mut slots: Vec<Option<Suggestion>> = vec![None; max_rank];
    for (rank, suggestion) in ranked {
        slots[rank - 1] = Some(suggestion);
    }

    SuggestionList::from_slots(slots)
}

fn valid_rank(key: &str, record: &PageRecord) -> Option<usize> {
    let index = match record.index {
        Some(index) => index,
        None => {
            log::debug!("Skipping page {} without an index", key);
            return None;
        }
    };

    if index < 1 {
        log::debug!("Skipping page {} with index {}", key, index);
        return None;
    }

    match usize::try_from(index) {
        Ok(rank) if rank <= MAX_RANK => Some(rank),
        _ => {
            log::warn!("Skipping page {} with out-of-range index {}", key, index);
            None
        }
    }
}

fn to_suggestion(title: &str, record: &PageRecord) -> Suggestion {
    let description = record
        .terms
        .as_ref()
        .and_then(|terms| terms.description.first())
        .map(String::as_str);
    let thumbnail_url = record.thumbnail.as_ref().and_then(|t| t.source.clone());

    Suggestion::new(title, description, thumbnail_url)
}

/// Array-index keys ascending, then the rest lexicographically
///
/// Negative ids such as `"-1"` (missing pages) are not array indices and sort
/// with the other string keys.
fn compare_page_keys(a: &str, b: &str) -> Ordering {
    match (array_index(a), array_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// A key in canonical non-negative integer form below `u32::MAX`
fn array_index(key: &str) -> Option<u32> {
    let n: u32 = key.parse().ok()?;
    (n < u32::MAX && n.to_string() == key).then_some(n)
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod normalizer_tests;
