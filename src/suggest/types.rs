//! Suggestion data model

/// A single article suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    /// Short description with its first character upper-cased
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl Suggestion {
    /// Build a suggestion, capitalizing the description
    ///
    /// An empty description is stored as absent.
    pub fn new(
        title: impl Into<String>,
        description: Option<&str>,
        thumbnail_url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.filter(|d| !d.is_empty()).map(capitalize_first),
            thumbnail_url,
        }
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rank-ordered suggestions with explicit holes
///
/// Slot `i` holds the result ranked `i + 1`. A `None` slot is a rank the
/// provider skipped; it is never filled with a placeholder suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    slots: Vec<Option<Suggestion>>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Option<Suggestion>>) -> Self {
        Self { slots }
    }

    /// Number of slots, holes included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Suggestion at a 0-based position, `None` for holes and out of range
    pub fn get(&self, position: usize) -> Option<&Suggestion> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    pub fn is_hole(&self, position: usize) -> bool {
        matches!(self.slots.get(position), Some(None))
    }

    pub fn slots(&self) -> &[Option<Suggestion>] {
        &self.slots
    }

    /// Filled slots with their positions, in rank order
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &Suggestion)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (i, s)))
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.iter_present().map(|(_, s)| s.title.as_str()).collect()
    }
}
