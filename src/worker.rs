//! Background query worker.
//!
//! Bulk queries run on a dedicated thread so the caller's thread never waits
//! on a catalog scan. Each submitted [`SearchState`] gets an increasing id;
//! outcomes come back over a channel tagged with that id. What happens to a
//! query that is overtaken by a newer one is decided by the
//! [`CancellationPolicy`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::resolver::IconResolver;
use crate::state::SearchState;
use crate::style::IconStyle;
use crate::vector::VectorIcon;

/// How overlapping queries are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum CancellationPolicy {
    /// A newer query cancels every older one. Pending queries are coalesced,
    /// a running query aborts once superseded, and only outcomes newer than
    /// the last applied one are accepted.
    #[default]
    Supersede,
    /// Every query runs to completion and every outcome is applied in
    /// arrival order; the last one to complete wins.
    LastWriterWins,
}

enum QueryCommand {
    Run { id: u64, state: SearchState },
    Shutdown,
}

/// The icons produced for one submitted state.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub id: u64,
    pub state: SearchState,
    pub icons: Vec<VectorIcon>,
}

/// Handle to the background query thread.
///
/// Dropping the handle stops the thread and waits for it to exit.
pub struct QueryWorker {
    commands: Sender<QueryCommand>,
    results: Receiver<QueryOutcome>,
    latest: Arc<AtomicU64>,
    policy: CancellationPolicy,
    handle: Option<JoinHandle<()>>,
}

impl QueryWorker {
    /// Launches the worker thread.
    pub fn spawn(resolver: Arc<IconResolver>, policy: CancellationPolicy) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let latest = Arc::new(AtomicU64::new(0));
        let thread_latest = Arc::clone(&latest);

        let handle = thread::Builder::new()
            .name("icon-query".into())
            .spawn(move || worker_loop(&resolver, policy, command_rx, result_tx, &thread_latest))
            .ok();
        if handle.is_none() {
            tracing::error!("failed to spawn icon query thread");
        }

        Self {
            commands: command_tx,
            results: result_rx,
            latest,
            policy,
            handle,
        }
    }

    pub fn policy(&self) -> CancellationPolicy {
        self.policy
    }

    /// Id of the most recently submitted query (0 before the first).
    pub fn latest_id(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Queues a query for `state` and returns its id.
    pub fn submit(&self, state: SearchState) -> Result<u64> {
        let id = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(
            id,
            query = ?state.query(),
            style = %state.style(),
            "submitting icon query"
        );
        self.commands
            .send(QueryCommand::Run { id, state })
            .map_err(|_| Error::WorkerDisconnected)?;
        Ok(id)
    }

    /// Returns a finished outcome if one is ready.
    pub fn try_recv(&self) -> Result<Option<QueryOutcome>> {
        match self.results.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::WorkerDisconnected),
        }
    }

    /// Waits up to `timeout` for the next outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<QueryOutcome>> {
        match self.results.recv_timeout(timeout) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerDisconnected),
        }
    }
}

impl Drop for QueryWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(QueryCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(
    resolver: &IconResolver,
    policy: CancellationPolicy,
    commands: Receiver<QueryCommand>,
    results: Sender<QueryOutcome>,
    latest: &AtomicU64,
) {
    let mut refiner = Refiner::default();

    while let Ok(command) = commands.recv() {
        let QueryCommand::Run { mut id, mut state } = command else {
            break;
        };

        if policy == CancellationPolicy::Supersede {
            let mut shutdown = false;
            while let Ok(pending) = commands.try_recv() {
                match pending {
                    QueryCommand::Run {
                        id: newer,
                        state: newer_state,
                    } => {
                        tracing::trace!(superseded = id, by = newer, "coalescing queued query");
                        id = newer;
                        state = newer_state;
                    }
                    QueryCommand::Shutdown => {
                        shutdown = true;
                        break;
                    }
                }
            }
            if shutdown {
                break;
            }
        }

        let hits = refiner.hits(resolver, &state);
        let is_cancelled =
            || policy == CancellationPolicy::Supersede && latest.load(Ordering::Acquire) != id;
        let Some(icons) = resolver.materialize(&hits, is_cancelled) else {
            tracing::trace!(id, "query superseded while running");
            continue;
        };

        if results.send(QueryOutcome { id, state, icons }).is_err() {
            break;
        }
    }
}

/// Remembers the last hit list so a query that extends the previous one
/// only filters those hits instead of the whole style.
#[derive(Default)]
struct Refiner {
    last: Option<(IconStyle, String, Vec<usize>)>,
}

impl Refiner {
    fn hits(&mut self, resolver: &IconResolver, state: &SearchState) -> Vec<usize> {
        let query = state.filter().unwrap_or_default().to_lowercase();
        let hits = match &self.last {
            Some((style, previous, previous_hits))
                if *style == state.style() && query.contains(previous.as_str()) =>
            {
                resolver.index().refine(previous_hits, &query)
            }
            _ => resolver.hits(Some(query.as_str()), state.style()),
        };
        self.last = Some((state.style(), query, hits.clone()));
        hits
    }
}
