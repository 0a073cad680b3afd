//! The filtering/sorting engine: derives the visible, ordered subset of the
//! archive from the corpus and the current view state.

use crate::model::{find_agent, Agent, DocumentRecord, CANON_THRESHOLD};
use crate::view::ViewState;

/// Compute the ordered list of fragments to display.
///
/// Pure: inputs are never mutated and identical inputs always yield the same
/// output. Per fragment, all three conditions are AND-ed:
///
/// 1. the faction filter, matched exactly against `faction_tag`;
/// 2. the canon-only flag, requiring `canon_weight >= 0.7`;
/// 3. the trimmed, lowercased search term, matched case-insensitively as a
///    substring of `"{title} {text} {author name}"` joined by single spaces.
///    The concatenation is one haystack, so a term may span the boundary
///    between title and text. An unresolved author contributes an empty
///    string.
///
/// The result is sorted by timestamp, most recent first; ties keep the input
/// order (stable sort).
pub fn visible_documents<'a>(
  documents: &'a [DocumentRecord],
  agents: &[Agent],
  view: &ViewState,
) -> Vec<&'a DocumentRecord> {
  let needle = view.search_term.trim().to_lowercase();

  let mut visible: Vec<&DocumentRecord> = documents
    .iter()
    .filter(|doc| view.faction_filter.matches(&doc.faction_tag))
    .filter(|doc| !view.show_canon_only || doc.canon_weight >= CANON_THRESHOLD)
    .filter(|doc| needle.is_empty() || search_haystack(doc, agents).contains(&needle))
    .collect();

  visible.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
  visible
}

fn search_haystack(doc: &DocumentRecord, agents: &[Agent]) -> String {
  let author_name = find_agent(agents, &doc.author_id).map(|a| a.name.as_str()).unwrap_or("");
  format!("{} {} {}", doc.title, doc.text, author_name).to_lowercase()
}
