//! The icon picker session.
//!
//! [`IconPicker`] owns the current [`SearchState`] and is its only writer.
//! Every change produces a new state that is handed to the background
//! [`QueryWorker`]; finished outcomes are pulled into the [`IconList`] by
//! [`poll`](IconPicker::poll) or [`wait`](IconPicker::wait) on the caller's
//! thread.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::PickerConfig;
use crate::error::Result;
use crate::list::IconList;
use crate::resolver::IconResolver;
use crate::selection::Selection;
use crate::state::{SearchState, SearchUpdate};
use crate::style::IconStyle;
use crate::vector::VectorIcon;
use crate::worker::QueryWorker;

pub struct IconPicker {
    state: SearchState,
    list: IconList,
    worker: QueryWorker,
    pending: u64,
}

impl IconPicker {
    /// Opens a picker showing every icon of the configured default style.
    ///
    /// The first query is submitted immediately; the picker reports
    /// [`is_loading`](Self::is_loading) until its outcome is applied.
    pub fn new(resolver: Arc<IconResolver>, config: &PickerConfig) -> Result<Self> {
        let state = SearchState::for_style(config.default_style);
        let worker = QueryWorker::spawn(resolver, config.cancellation);
        let pending = worker.submit(state.clone())?;
        Ok(Self {
            state,
            list: IconList::new(config.cancellation),
            worker,
            pending,
        })
    }

    /// Replaces the query text.
    pub fn search(&mut self, query: impl Into<String>) -> Result<u64> {
        self.dispatch(SearchUpdate::Query(Some(query.into())))
    }

    /// Switches the style filter, keeping the query.
    pub fn filter(&mut self, style: IconStyle) -> Result<u64> {
        self.dispatch(SearchUpdate::Style(style))
    }

    /// Empties the query, keeping the style.
    pub fn clear(&mut self) -> Result<u64> {
        self.dispatch(SearchUpdate::Clear)
    }

    /// Applies `update` to the current state and submits the result.
    pub fn dispatch(&mut self, update: SearchUpdate) -> Result<u64> {
        let next = self.state.apply(update);
        let id = self.worker.submit(next.clone())?;
        self.state = next;
        self.pending = id;
        Ok(id)
    }

    /// Applies every outcome that is already available without blocking.
    ///
    /// Returns whether the icon list changed.
    pub fn poll(&mut self) -> Result<bool> {
        let mut changed = false;
        while let Some(outcome) = self.worker.try_recv()? {
            changed |= self.list.apply(outcome);
        }
        Ok(changed)
    }

    /// Blocks until the most recently submitted query is applied or
    /// `timeout` elapses. Returns whether it was applied in time.
    pub fn wait(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        self.poll()?;
        while self.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::debug!(pending = self.pending, "timed out waiting for icon query");
                return Ok(false);
            }
            if let Some(outcome) = self.worker.recv_timeout(remaining)? {
                self.list.apply(outcome);
            }
        }
        Ok(true)
    }

    /// Whether the latest submitted query has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.list.applied_id() != self.pending
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn list(&self) -> &IconList {
        &self.list
    }

    pub fn icons(&self) -> &[VectorIcon] {
        self.list.icons()
    }

    /// The selection for the icon shown at `index`.
    pub fn select(&self, index: usize) -> Option<Selection> {
        let selection = self.list.get(index)?.selection();
        tracing::info!(%selection, "icon selected");
        Some(selection)
    }
}
