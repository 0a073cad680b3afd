//! View state for the archive browser.
//!
//! The state is an explicit immutable value advanced through
//! [`ViewState::update`]; every user input maps to one [`ViewEvent`] and one
//! resulting state. The fixture collections are passed alongside the state,
//! never owned by it.

use crate::model::DocumentRecord;

/// Faction filter: either every faction, or one exact tag.
///
/// Matching against a named faction is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactionFilter {
  #[default]
  All,
  Faction(String),
}

impl FactionFilter {
  pub fn matches(&self, faction_tag: &str) -> bool {
    match self {
      FactionFilter::All => true,
      FactionFilter::Faction(faction) => faction == faction_tag,
    }
  }
}

/// One user input, one event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
  SearchChanged(String),
  FactionSelected(FactionFilter),
  CanonOnlySet(bool),
  DocumentSelected(Option<String>),
}

/// The browser's whole filter/selection state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
  pub active_document_id: Option<String>,
  pub search_term: String,
  pub faction_filter: FactionFilter,
  pub show_canon_only: bool,
}

impl ViewState {
  /// Advance the state by one event, returning the next state.
  pub fn update(self, event: ViewEvent) -> ViewState {
    match event {
      ViewEvent::SearchChanged(term) => ViewState { search_term: term, ..self },
      ViewEvent::FactionSelected(filter) => ViewState { faction_filter: filter, ..self },
      ViewEvent::CanonOnlySet(show) => ViewState { show_canon_only: show, ..self },
      ViewEvent::DocumentSelected(id) => ViewState { active_document_id: id, ..self },
    }
  }

  /// Re-anchor the active document after the visible set changed.
  ///
  /// If the current active id is still visible it stays; otherwise the first
  /// visible fragment becomes active, or nothing when the set is empty.
  pub fn reconcile_active(self, visible: &[&DocumentRecord]) -> ViewState {
    let still_visible = self
      .active_document_id
      .as_deref()
      .is_some_and(|active| visible.iter().any(|doc| doc.id == active));

    if still_visible {
      return self;
    }

    ViewState { active_document_id: visible.first().map(|doc| doc.id.clone()), ..self }
  }
}
