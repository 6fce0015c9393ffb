//! Suggestion worker
//!
//! Runs searches off the UI thread. Requests arrive tagged with a sequence id
//! and every result goes back tagged with the same id; the controller decides
//! which results are still wanted. Each search runs as its own task, so
//! overlapping searches may complete in any order.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::query::SearchQuery;
use super::response::SearchResponse;
use super::transport::SearchTransport;
use crate::error::SuggestError;

/// Search request sent to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub query: SearchQuery,
    /// Sequence id, used to discard stale results
    pub request_id: u64,
}

/// Search outcome sent back to the controller
#[derive(Debug)]
pub struct SuggestResponse {
    pub request_id: u64,
    pub result: Result<SearchResponse, SuggestError>,
}

/// Background runtime hosting suggestion workers
///
/// A single current-thread tokio runtime on its own OS thread. Dropping it
/// cancels the shutdown token, which stops every worker, and joins the thread.
pub struct WorkerRuntime {
    handle: Handle,
    shutdown: CancellationToken,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl WorkerRuntime {
    pub fn start() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let thread = std::thread::Builder::new()
            .name("suggest-worker".to_string())
            .spawn(move || {
                runtime.block_on(token.cancelled());
                log::debug!("Suggestion runtime stopped");
            })?;

        Ok(Self {
            handle,
            shutdown,
            thread: Some(thread),
        })
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Token cancelled when the runtime shuts down
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}

impl Drop for WorkerRuntime {
    fn drop(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Suggestion runtime thread panicked");
        }
    }
}

/// Spawn a worker task on `handle`
///
/// The worker exits when `shutdown` is cancelled or when the request channel
/// closes.
pub fn spawn_worker(
    handle: &Handle,
    transport: Arc<dyn SearchTransport>,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: UnboundedSender<SuggestResponse>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    handle.spawn(worker_loop(transport, request_rx, response_tx, shutdown))
}

async fn worker_loop(
    transport: Arc<dyn SearchTransport>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: UnboundedSender<SuggestResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                tokio::spawn(fetch(Arc::clone(&transport), request, response_tx.clone()));
            }
        }
    }

    log::debug!("Suggestion worker shutting down");
}

/// Run one search to completion and report it
///
/// The search is never aborted once started.
async fn fetch(
    transport: Arc<dyn SearchTransport>,
    request: SuggestRequest,
    response_tx: UnboundedSender<SuggestResponse>,
) {
    let SuggestRequest { query, request_id } = request;
    let result = transport.search(&query).await;

    if let Err(e) = &result {
        log::debug!(
            "Request {} for {:?} failed: {}",
            request_id,
            query.term(),
            e
        );
    }

    if response_tx
        .send(SuggestResponse { request_id, result })
        .is_err()
    {
        log::debug!("Controller gone, dropping response {}", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
