//! One article title input with its suggestion pipeline

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use crate::placeholder::PlaceholderRotator;
use crate::suggest::{FetchState, SuggestionController};

/// Which end of the path an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    From,
    To,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::From => "From",
            Side::To => "To",
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::From => Side::To,
            Side::To => Side::From,
        }
    }
}

/// Result of feeding a key to an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Nothing the parent needs to know about
    None,
    /// The text changed
    Changed(String),
    /// A suggestion was chosen; the text now holds its title
    Selected(String),
}

pub struct ArticleInput {
    side: Side,
    pub textarea: TextArea<'static>,
    controller: SuggestionController,
    placeholder: PlaceholderRotator,
    /// Slot position of the highlighted suggestion
    highlighted: Option<usize>,
    /// Hides the list after a selection until the text changes again
    dismissed: bool,
}

impl ArticleInput {
    pub fn new(side: Side, controller: SuggestionController, placeholder: PlaceholderRotator) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(placeholder.text());

        Self {
            side,
            textarea,
            controller,
            placeholder,
            highlighted: None,
            dismissed: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut SuggestionController {
        &mut self.controller
    }

    pub fn placeholder_text(&self) -> &str {
        self.placeholder.text()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the suggestion list should be drawn
    pub fn suggestions_visible(&self) -> bool {
        !self.dismissed && !self.fetch_state().suggestions.is_empty()
    }

    /// Feed a key to the input
    ///
    /// Enter accepts the highlighted suggestion; Up/Down move the highlight
    /// across filled slots. Every other key edits the text.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> InputEvent {
        if is_enter(&key) {
            return match self.highlighted_title() {
                Some(title) => {
                    self.select(&title, now);
                    InputEvent::Selected(title)
                }
                None => InputEvent::None,
            };
        }

        match key.code {
            KeyCode::Down => {
                self.move_highlight(true);
                InputEvent::None
            }
            KeyCode::Up => {
                self.move_highlight(false);
                InputEvent::None
            }
            _ => {
                if self.textarea.input(key) {
                    if self.textarea.lines().len() > 1 {
                        let joined = self.textarea.lines().concat();
                        self.replace_text(&joined);
                    }
                    self.on_text_changed(now);
                    InputEvent::Changed(self.value().to_string())
                } else {
                    InputEvent::None
                }
            }
        }
    }

    /// Replace the text, as if typed
    pub fn set_value(&mut self, value: &str, now: Instant) {
        self.replace_text(value);
        self.on_text_changed(now);
    }

    /// Advance timers and commit responses
    ///
    /// Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fetch_changed = self.controller.tick(now);
        if fetch_changed {
            self.highlighted = None;
        }

        let placeholder_changed = self.placeholder.tick(now);
        if placeholder_changed {
            self.textarea.set_placeholder_text(self.placeholder.text());
        }

        fetch_changed || placeholder_changed
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.controller.next_deadline(), self.placeholder.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn on_text_changed(&mut self, now: Instant) {
        let value = self.value().to_string();
        self.highlighted = None;
        self.dismissed = false;
        self.placeholder.set_field_empty(value.is_empty(), now);
        self.controller.on_input_changed(&value, now);
    }

    fn select(&mut self, title: &str, now: Instant) {
        self.replace_text(title);
        self.highlighted = None;
        self.dismissed = true;
        self.placeholder.set_field_empty(title.is_empty(), now);
        self.controller.on_suggestion_selected(title);
    }

    fn replace_text(&mut self, value: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(value);
    }

    fn highlighted_title(&self) -> Option<String> {
        if !self.suggestions_visible() {
            return None;
        }
        self.highlighted
            .and_then(|position| self.fetch_state().suggestions.get(position))
            .map(|s| s.title.clone())
    }

    fn move_highlight(&mut self, forward: bool) {
        if !self.suggestions_visible() {
            return;
        }

        let positions: Vec<usize> = self
            .fetch_state()
            .suggestions
            .iter_present()
            .map(|(position, _)| position)
            .collect();
        if positions.is_empty() {
            return;
        }

        let current = self
            .highlighted
            .and_then(|h| positions.iter().position(|p| *p == h));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => positions.len() - 1,
            (Some(i), true) => (i + 1) % positions.len(),
            (Some(i), false) => (i + positions.len() - 1) % positions.len(),
        };
        self.highlighted = Some(positions[next]);
    }
}

/// Enter, or a control chord the textarea would turn into a line break
pub(crate) fn is_enter(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "article_input_tests.rs"]
mod article_input_tests;
