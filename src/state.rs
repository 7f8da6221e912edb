//! Search state snapshots.

use serde::{Deserialize, Serialize};

use crate::style::IconStyle;

/// The query and style filter a picker is showing.
///
/// Snapshots are immutable: [`SearchState::apply`] returns a new one. An
/// empty query and an absent query both mean "show every icon".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(default)]
    style: IconStyle,
}

/// A change requested by whoever owns the search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Replace the query text.
    Query(Option<String>),
    /// Switch the style filter.
    Style(IconStyle),
    /// Reset the query to empty, keeping the style.
    Clear,
}

impl SearchState {
    pub fn new(query: Option<String>, style: IconStyle) -> Self {
        Self { query, style }
    }

    /// The initial state for a given style: no query.
    pub fn for_style(style: IconStyle) -> Self {
        Self::new(None, style)
    }

    /// The raw query text, if any was entered.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The query as a filter: `None` when absent or empty.
    pub fn filter(&self) -> Option<&str> {
        self.query().filter(|query| !query.is_empty())
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    /// Returns the state after applying `update`.
    #[must_use]
    pub fn apply(&self, update: SearchUpdate) -> Self {
        match update {
            SearchUpdate::Query(query) => Self::new(query, self.style),
            SearchUpdate::Style(style) => Self::new(self.query.clone(), style),
            SearchUpdate::Clear => Self::new(Some(String::new()), self.style),
        }
    }

    /// Whether this state selects the same icons as `other`.
    pub fn same_results(&self, other: &Self) -> bool {
        self.style == other.style && self.filter() == other.filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unfiltered_filled() {
        let state = SearchState::default();
        assert_eq!(state.query(), None);
        assert_eq!(state.style(), IconStyle::Filled);
    }

    #[test]
    fn apply_does_not_mutate_original() {
        let state = SearchState::for_style(IconStyle::Sharp);
        let next = state.apply(SearchUpdate::Query(Some("wifi".into())));

        assert_eq!(state.query(), None);
        assert_eq!(next.query(), Some("wifi"));
        assert_eq!(next.style(), IconStyle::Sharp);

        let styled = next.apply(SearchUpdate::Style(IconStyle::TwoTone));
        assert_eq!(styled.query(), Some("wifi"));
        assert_eq!(styled.style(), IconStyle::TwoTone);
    }

    #[test]
    fn clear_keeps_style_and_empties_query() {
        let state =
            SearchState::new(Some("home".into()), IconStyle::Rounded).apply(SearchUpdate::Clear);
        assert_eq!(state.query(), Some(""));
        assert_eq!(state.filter(), None);
        assert!(state.same_results(&SearchState::for_style(IconStyle::Rounded)));
    }

    #[test]
    fn serializes_camel_case() {
        let state = SearchState::new(Some("add".into()), IconStyle::TwoTone);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"query":"add","style":"TwoTone"}"#);
        let back: SearchState = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(back, SearchState::default());
    }
}
