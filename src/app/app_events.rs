use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::App;
use super::article_input::{InputEvent, Side, is_enter};

impl App {
    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.other();
            }
            _ => self.handle_input_key(key, now),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        let side = self.focus;

        match self.input_mut(side).handle_key(key, now) {
            InputEvent::Changed(value) => self.set_article_title(side, value),
            InputEvent::Selected(title) => {
                self.set_article_title(side, title);
                if side == Side::From {
                    self.focus = side.other();
                }
            }
            InputEvent::None if is_enter(&key) => self.submit_or_advance(),
            InputEvent::None => {}
        }
    }

    /// Enter without a highlighted suggestion
    fn submit_or_advance(&mut self) {
        if !self.from_title.is_empty() && !self.to_title.is_empty() {
            self.submitted = true;
            self.should_quit = true;
        } else if !self.article_title(self.focus).is_empty() {
            self.focus = self.focus.other();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
