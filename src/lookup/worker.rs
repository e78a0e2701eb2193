//! Lookup worker thread
//!
//! Runs PokeAPI requests on a background thread so the UI never blocks.
//! The thread drives a current-thread tokio runtime; every request becomes
//! its own task, so a new lookup can start while an older one is still in
//! flight. Responses travel back over a std channel that the UI drains once
//! per frame.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::pipeline::{LookupOutcome, run_lookup};
use crate::api::PokeApiClient;
use crate::config::ApiConfig;
use crate::error::PokedexError;

/// Requests from the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    LoadCatalog,
    /// `query` is already trimmed and lowercased
    Lookup { query: String, request_id: u64 },
}

/// Responses to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Catalog(Result<Vec<String>, String>),
    Lookup {
        request_id: u64,
        outcome: LookupOutcome,
    },
}

/// Everything a request task needs, shared between tasks
struct WorkerContext {
    client: PokeApiClient,
    sprite_base_url: String,
    catalog_limit: u32,
    response_tx: Sender<LookupResponse>,
}

/// UI-side handle to the worker
///
/// Dropping the handle stops the worker loop.
#[derive(Debug)]
pub struct WorkerHandle {
    request_tx: UnboundedSender<LookupRequest>,
    shutdown: CancellationToken,
}

impl WorkerHandle {
    pub fn from_parts(request_tx: UnboundedSender<LookupRequest>, shutdown: CancellationToken) -> Self {
        Self {
            request_tx,
            shutdown,
        }
    }

    /// Queue a request; false once the worker has stopped
    pub fn send(&self, request: LookupRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.request_tx.is_closed()
    }

    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the worker thread
///
/// Fails when the configured base URL is unusable or the runtime cannot be
/// built.
pub fn spawn_worker(
    config: &ApiConfig,
    response_tx: Sender<LookupResponse>,
) -> Result<WorkerHandle, PokedexError> {
    let client = PokeApiClient::new(&config.base_url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (request_tx, request_rx) = unbounded_channel();
    let shutdown = CancellationToken::new();
    let context = Arc::new(WorkerContext {
        client,
        sprite_base_url: config.sprite_base_url.clone(),
        catalog_limit: config.catalog_limit,
        response_tx,
    });

    let token = shutdown.clone();
    std::thread::Builder::new()
        .name("pokedex-lookup".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(context, request_rx, token));
            log::debug!("Lookup worker thread shutting down");
        })
        .map_err(|e| PokedexError::Worker(e.to_string()))?;

    Ok(WorkerHandle::from_parts(request_tx, shutdown))
}

/// Process requests until the channel closes or shutdown is requested
async fn worker_loop(
    context: Arc<WorkerContext>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    shutdown: CancellationToken,
) {
    loop {
        let request = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => request,
                None => break,
            },
        };

        let context = Arc::clone(&context);
        let token = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = handle_request(&context, request) => {}
            }
        });
    }
}

async fn handle_request(context: &WorkerContext, request: LookupRequest) {
    let response = match request {
        LookupRequest::LoadCatalog => {
            log::debug!("Loading catalog (limit {})", context.catalog_limit);
            let result = context
                .client
                .fetch_catalog(context.catalog_limit)
                .await
                .map_err(|e| e.to_string());
            LookupResponse::Catalog(result)
        }
        LookupRequest::Lookup { query, request_id } => {
            log::debug!("Lookup {} started for {}", request_id, query);
            let outcome = run_lookup(&context.client, &context.sprite_base_url, &query).await;
            LookupResponse::Lookup {
                request_id,
                outcome,
            }
        }
    };

    if context.response_tx.send(response).is_err() {
        log::debug!("UI thread disconnected, dropping response");
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
