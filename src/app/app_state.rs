use std::sync::Arc;
use std::time::{Duration, Instant};

use super::article_input::{ArticleInput, Side};
use crate::config::Config;
use crate::placeholder::PlaceholderRotator;
use crate::suggest::{SearchTransport, SuggestionController, WorkerRuntime};

/// Application state
pub struct App {
    pub from: ArticleInput,
    pub to: ArticleInput,
    pub focus: Side,
    /// Titles reported by the inputs, one per side
    pub from_title: String,
    pub to_title: String,
    pub should_quit: bool,
    /// Set when the user confirmed both titles
    pub submitted: bool,
}

impl App {
    /// Create the app with one worker per input on `runtime`
    pub fn new(
        config: &Config,
        runtime: &WorkerRuntime,
        transport: Arc<dyn SearchTransport>,
        now: Instant,
    ) -> Self {
        let debounce = Duration::from_millis(config.suggest.debounce_ms);
        let rotate = Duration::from_secs(config.placeholder.rotate_secs);

        let make_input = |side: Side| {
            let controller = SuggestionController::connect(
                runtime.handle(),
                Arc::clone(&transport),
                debounce,
                runtime.shutdown_token(),
            );
            ArticleInput::new(side, controller, PlaceholderRotator::new(rotate, now))
        };

        Self::with_inputs(make_input(Side::From), make_input(Side::To))
    }

    pub fn with_inputs(from: ArticleInput, to: ArticleInput) -> Self {
        Self {
            from,
            to,
            focus: Side::From,
            from_title: String::new(),
            to_title: String::new(),
            should_quit: false,
            submitted: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input(&self, side: Side) -> &ArticleInput {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }

    pub fn input_mut(&mut self, side: Side) -> &mut ArticleInput {
        match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        }
    }

    pub fn article_title(&self, side: Side) -> &str {
        match side {
            Side::From => &self.from_title,
            Side::To => &self.to_title,
        }
    }

    /// Record the title an input reported for its side
    pub fn set_article_title(&mut self, side: Side, title: String) {
        log::debug!("{} title set to {:?}", side.label(), title);
        match side {
            Side::From => self.from_title = title,
            Side::To => self.to_title = title,
        }
    }

    /// Advance both inputs; returns true when a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        let from_changed = self.from.tick(now);
        let to_changed = self.to.tick(now);
        from_changed || to_changed
    }

    /// Earliest pending deadline across both inputs
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.from.next_deadline(), self.to.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Line printed on exit after a submit
    pub fn output(&self) -> Option<String> {
        self.submitted
            .then(|| format!("{} -> {}", self.from_title, self.to_title))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
