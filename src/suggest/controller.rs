//! Fetch state controller
//!
//! Owns the fetch state of one input control. Keystrokes go through the
//! debounce gate; due terms become tagged requests to the worker; responses
//! are committed only when they answer the most recently issued request.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tokio_util::sync::CancellationToken;

use super::debouncer::Debouncer;
use super::normalizer::normalize;
use super::query::SearchQuery;
use super::transport::SearchTransport;
use super::types::SuggestionList;
use super::worker::{SuggestRequest, SuggestResponse, spawn_worker};
use crate::error::SuggestError;

/// What the rendering side reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub is_fetching: bool,
    pub suggestions: SuggestionList,
}

/// Drives the suggestion pipeline for a single input control
pub struct SuggestionController {
    state: FetchState,
    debouncer: Debouncer<String>,
    /// Latest input value, used to drop debounced terms that no longer apply
    current_term: String,
    /// Set once a suggestion is chosen; cleared by the next edit
    settled: bool,
    /// Id of the most recently issued request
    request_id: u64,
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<UnboundedReceiver<SuggestResponse>>,
}

impl SuggestionController {
    /// Create a controller with no worker attached
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: FetchState::default(),
            debouncer: Debouncer::new(debounce),
            current_term: String::new(),
            settled: false,
            request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a controller with its own worker on `handle`
    pub fn connect(
        handle: &Handle,
        transport: Arc<dyn SearchTransport>,
        debounce: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        spawn_worker(handle, transport, request_rx, response_tx, shutdown);

        let mut controller = Self::new(debounce);
        controller.set_channels(request_tx, response_rx);
        controller
    }

    /// Set the channel handles for communication with the worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: UnboundedReceiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.state.suggestions
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// When the next debounced search is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// React to a new input value
    ///
    /// An empty value clears the suggestions immediately without touching the
    /// debounce gate. Anything else is scheduled on the gate.
    pub fn on_input_changed(&mut self, term: &str, now: Instant) {
        self.current_term = term.to_string();
        self.settled = false;

        if term.is_empty() {
            self.clear_suggestions();
            return;
        }

        self.debouncer.schedule(term.to_string(), now);
    }

    /// Record a title chosen from the list
    ///
    /// The chosen title needs no search of its own. A pending debounced term
    /// is dropped when it comes due, any in-flight request is invalidated, and
    /// the current suggestions stay in place.
    pub fn on_suggestion_selected(&mut self, title: &str) {
        self.current_term = title.to_string();
        self.settled = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.state.is_fetching = false;
    }

    /// Empty the list and invalidate whatever is in flight
    fn clear_suggestions(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        self.state = FetchState::default();
    }

    /// Advance the controller: commit responses, fire a due search
    ///
    /// Returns true when the fetch state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.state.clone();

        self.poll_responses();

        if let Some(term) = self.debouncer.poll(now) {
            if self.settled {
                log::debug!("Dropping debounced term {:?}, a suggestion was chosen", term);
            } else if term == self.current_term {
                self.load_suggestions(term);
            } else {
                log::debug!("Dropping debounced term {:?}, input changed", term);
            }
        }

        self.state != before
    }

    /// Issue a search for `term`
    ///
    /// Marks the control as fetching right away. The result is committed by
    /// [`handle_response`](Self::handle_response).
    pub fn load_suggestions(&mut self, term: String) {
        self.request_id = self.request_id.wrapping_add(1);
        self.state.is_fetching = true;

        let request = SuggestRequest {
            query: SearchQuery::new(term),
            request_id: self.request_id,
        };

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if !sent {
            self.fail(self.request_id, SuggestError::WorkerUnavailable);
        }
    }

    /// Drain every response the worker has delivered so far
    pub fn poll_responses(&mut self) {
        loop {
            let Some(rx) = self.response_rx.as_mut() else {
                return;
            };

            match rx.try_recv() {
                Ok(response) => self.handle_response(response),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Suggestion worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    if self.state.is_fetching {
                        self.fail(self.request_id, SuggestError::WorkerUnavailable);
                    }
                    return;
                }
            }
        }
    }

    /// Commit a response if it answers the latest request
    pub fn handle_response(&mut self, response: SuggestResponse) {
        let SuggestResponse { request_id, result } = response;

        if request_id != self.request_id {
            log::debug!(
                "Discarding stale response {} (latest {})",
                request_id,
                self.request_id
            );
            return;
        }

        match result {
            Ok(response) => {
                let suggestions = response.pages().map(normalize).unwrap_or_default();
                self.state = FetchState {
                    is_fetching: false,
                    suggestions,
                };
            }
            Err(e) => self.fail(request_id, e),
        }
    }

    /// Failures keep the previous suggestions and never reach the user
    fn fail(&mut self, request_id: u64, error: SuggestError) {
        log::debug!("Suggestion request {} failed: {}", request_id, error);
        self.state.is_fetching = false;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
