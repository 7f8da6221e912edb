//! The observable list of icons a picker is displaying.

use crate::state::SearchState;
use crate::vector::VectorIcon;
use crate::worker::{CancellationPolicy, QueryOutcome};

/// Icons from the most recently accepted query outcome.
///
/// [`revision`](Self::revision) increments every time the contents change,
/// so a renderer can cheaply tell whether it needs to redraw.
#[derive(Debug, Clone)]
pub struct IconList {
    policy: CancellationPolicy,
    icons: Vec<VectorIcon>,
    state: Option<SearchState>,
    applied: u64,
    revision: u64,
}

impl IconList {
    pub fn new(policy: CancellationPolicy) -> Self {
        Self {
            policy,
            icons: Vec::new(),
            state: None,
            applied: 0,
            revision: 0,
        }
    }

    /// Replaces the contents with `outcome` if the policy accepts it.
    ///
    /// Under [`CancellationPolicy::Supersede`] an outcome older than the one
    /// already shown is discarded. Returns whether the list changed.
    pub fn apply(&mut self, outcome: QueryOutcome) -> bool {
        if self.policy == CancellationPolicy::Supersede && outcome.id <= self.applied {
            tracing::trace!(id = outcome.id, applied = self.applied, "discarding stale outcome");
            return false;
        }

        self.applied = outcome.id;
        self.icons = outcome.icons;
        self.state = Some(outcome.state);
        self.revision += 1;
        true
    }

    pub fn icons(&self) -> &[VectorIcon] {
        &self.icons
    }

    pub fn get(&self, index: usize) -> Option<&VectorIcon> {
        self.icons.get(index)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Id of the outcome currently shown (0 before the first).
    pub fn applied_id(&self) -> u64 {
        self.applied
    }

    /// The state the current icons were produced for.
    pub fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::IconStyle;

    static PATHS: &[&str] = &["M4 4h16v16H4z"];

    fn outcome(id: u64, names: &[&str]) -> QueryOutcome {
        QueryOutcome {
            id,
            state: SearchState::for_style(IconStyle::Filled),
            icons: names
                .iter()
                .map(|name| VectorIcon::new(IconStyle::Filled, name, PATHS))
                .collect(),
        }
    }

    #[test]
    fn supersede_rejects_older_outcomes() {
        let mut list = IconList::new(CancellationPolicy::Supersede);
        assert!(list.apply(outcome(2, &["Home"])));
        assert!(!list.apply(outcome(1, &["Add", "Star"])));
        assert!(!list.apply(outcome(2, &["Star"])));

        assert_eq!(list.applied_id(), 2);
        assert_eq!(list.revision(), 1);
        assert_eq!(list.get(0).map(VectorIcon::name), Some("Home"));
    }

    #[test]
    fn last_writer_wins_accepts_arrival_order() {
        let mut list = IconList::new(CancellationPolicy::LastWriterWins);
        assert!(list.apply(outcome(2, &["Home"])));
        assert!(list.apply(outcome(1, &["Add", "Star"])));

        assert_eq!(list.applied_id(), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.revision(), 2);
    }

    #[test]
    fn empty_outcome_is_a_valid_result() {
        let mut list = IconList::new(CancellationPolicy::Supersede);
        assert!(list.apply(outcome(1, &[])));
        assert!(list.is_empty());
        assert!(list.state().is_some());
    }
}
