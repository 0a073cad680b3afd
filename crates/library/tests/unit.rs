use library::filter::visible_documents;
use library::fixtures::{seed_agents, seed_documents};
use library::model::{find_agent, find_document, CanonStatus};
use library::view::{FactionFilter, ViewEvent, ViewState};

fn visible_ids(view: &ViewState) -> Vec<String> {
  let documents = seed_documents();
  let agents = seed_agents();
  visible_documents(&documents, &agents, view).iter().map(|doc| doc.id.clone()).collect()
}

#[cfg(test)]
mod filter_tests {
  use super::*;

  #[test]
  fn test_default_view_shows_whole_corpus_newest_first() {
    let ids = visible_ids(&ViewState::default());
    assert_eq!(
      ids,
      vec!["d_silted_reckoning", "d_origin_sky", "d_aurora_accord", "d_tidal_vow", "d_ember_heresy"]
    );
  }

  #[test]
  fn test_output_sorted_non_increasing_by_timestamp() {
    let documents = seed_documents();
    let agents = seed_agents();
    let visible = visible_documents(&documents, &agents, &ViewState::default());

    for pair in visible.windows(2) {
      assert!(pair[0].timestamp >= pair[1].timestamp);
    }
  }

  #[test]
  fn test_faction_filter_scenario_tidal_covenant() {
    let view = ViewState::default()
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("Tidal Covenant".to_string())));
    assert_eq!(visible_ids(&view), vec!["d_silted_reckoning", "d_tidal_vow"]);
  }

  #[test]
  fn test_faction_filter_is_case_sensitive() {
    let view = ViewState::default()
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("tidal covenant".to_string())));
    assert!(visible_ids(&view).is_empty());
  }

  #[test]
  fn test_canon_only_scenario() {
    let view = ViewState::default().update(ViewEvent::CanonOnlySet(true));
    assert_eq!(visible_ids(&view), vec!["d_origin_sky", "d_aurora_accord"]);
  }

  #[test]
  fn test_search_scenario_smoke() {
    let view = ViewState::default().update(ViewEvent::SearchChanged("smoke".to_string()));
    assert_eq!(visible_ids(&view), vec!["d_ember_heresy"]);
  }

  #[test]
  fn test_search_is_trimmed_and_case_insensitive() {
    let view = ViewState::default().update(ViewEvent::SearchChanged("  TIDAL  ".to_string()));
    assert_eq!(visible_ids(&view), vec!["d_tidal_vow"]);
  }

  #[test]
  fn test_blank_search_matches_everything() {
    let view = ViewState::default().update(ViewEvent::SearchChanged("   ".to_string()));
    assert_eq!(visible_ids(&view).len(), seed_documents().len());
  }

  #[test]
  fn test_search_spans_title_text_boundary() {
    // "the Sky" ends the title, "Before the shelves" opens the body; only the
    // single concatenated haystack can match across that seam
    let view = ViewState::default().update(ViewEvent::SearchChanged("sky before".to_string()));
    assert_eq!(visible_ids(&view), vec!["d_origin_sky"]);
  }

  #[test]
  fn test_search_matches_resolved_author_name() {
    let view = ViewState::default().update(ViewEvent::SearchChanged("veloran".to_string()));
    assert_eq!(visible_ids(&view), vec!["d_origin_sky"]);
  }

  #[test]
  fn test_dangling_author_contributes_nothing_to_haystack() {
    // d_silted_reckoning's author id contains "archivist" but resolves to no
    // one; only the body text of d_origin_sky carries the word
    let view = ViewState::default().update(ViewEvent::SearchChanged("archivist".to_string()));
    assert_eq!(visible_ids(&view), vec!["d_origin_sky"]);
  }

  #[test]
  fn test_filters_are_anded() {
    let view = ViewState::default()
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("Tidal Covenant".to_string())))
      .update(ViewEvent::CanonOnlySet(true));
    // Both Covenant fragments sit below the canon threshold
    assert!(visible_ids(&view).is_empty());
  }

  #[test]
  fn test_predicate_soundness_and_completeness() {
    let documents = seed_documents();
    let agents = seed_agents();
    let view = ViewState::default()
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("Sky Choir".to_string())))
      .update(ViewEvent::SearchChanged("the".to_string()));

    let visible = visible_documents(&documents, &agents, &view);

    // Sound: every output satisfies every predicate
    for doc in &visible {
      assert_eq!(doc.faction_tag, "Sky Choir");
      let author =
        find_agent(&agents, &doc.author_id).map(|a| a.name.as_str()).unwrap_or("");
      let haystack = format!("{} {} {}", doc.title, doc.text, author).to_lowercase();
      assert!(haystack.contains("the"));
    }

    // Complete: every fragment satisfying every predicate is in the output
    for doc in &documents {
      let author =
        find_agent(&agents, &doc.author_id).map(|a| a.name.as_str()).unwrap_or("");
      let haystack = format!("{} {} {}", doc.title, doc.text, author).to_lowercase();
      let qualifies = doc.faction_tag == "Sky Choir" && haystack.contains("the");
      assert_eq!(qualifies, visible.iter().any(|v| v.id == doc.id), "{}", doc.id);
    }
  }

  #[test]
  fn test_idempotent_and_input_preserving() {
    let documents = seed_documents();
    let agents = seed_agents();
    let before = documents.clone();
    let view = ViewState::default().update(ViewEvent::SearchChanged("vow".to_string()));

    let first: Vec<String> =
      visible_documents(&documents, &agents, &view).iter().map(|d| d.id.clone()).collect();
    let second: Vec<String> =
      visible_documents(&documents, &agents, &view).iter().map(|d| d.id.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(documents, before);
  }

  #[test]
  fn test_empty_corpus_yields_empty_result() {
    let visible = visible_documents(&[], &seed_agents(), &ViewState::default());
    assert!(visible.is_empty());
  }
}

#[cfg(test)]
mod view_tests {
  use super::*;

  #[test]
  fn test_update_sets_one_field_and_keeps_the_rest() {
    let view = ViewState::default()
      .update(ViewEvent::SearchChanged("ash".to_string()))
      .update(ViewEvent::CanonOnlySet(true));

    assert_eq!(view.search_term, "ash");
    assert!(view.show_canon_only);
    assert_eq!(view.faction_filter, FactionFilter::All);
    assert_eq!(view.active_document_id, None);

    let view = view.update(ViewEvent::DocumentSelected(Some("d_tidal_vow".to_string())));
    assert_eq!(view.active_document_id.as_deref(), Some("d_tidal_vow"));
    assert_eq!(view.search_term, "ash");
  }

  #[test]
  fn test_reconcile_keeps_still_visible_active() {
    let documents = seed_documents();
    let agents = seed_agents();
    let view = ViewState::default()
      .update(ViewEvent::DocumentSelected(Some("d_tidal_vow".to_string())));

    let visible = visible_documents(&documents, &agents, &view);
    let view = view.reconcile_active(&visible);
    assert_eq!(view.active_document_id.as_deref(), Some("d_tidal_vow"));
  }

  #[test]
  fn test_reconcile_reselects_first_visible_when_active_filtered_out() {
    let documents = seed_documents();
    let agents = seed_agents();
    let view = ViewState::default()
      .update(ViewEvent::DocumentSelected(Some("d_ember_heresy".to_string())))
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("Tidal Covenant".to_string())));

    let visible = visible_documents(&documents, &agents, &view);
    let view = view.reconcile_active(&visible);
    assert_eq!(view.active_document_id.as_deref(), Some("d_silted_reckoning"));
  }

  #[test]
  fn test_reconcile_clears_active_when_nothing_visible() {
    let documents = seed_documents();
    let agents = seed_agents();
    let view = ViewState::default()
      .update(ViewEvent::DocumentSelected(Some("d_origin_sky".to_string())))
      .update(ViewEvent::FactionSelected(FactionFilter::Faction("No Such Faction".to_string())));

    let visible = visible_documents(&documents, &agents, &view);
    let view = view.reconcile_active(&visible);
    assert_eq!(view.active_document_id, None);
  }

  #[test]
  fn test_reconcile_with_dangling_active_id() {
    let documents = seed_documents();
    let agents = seed_agents();
    let view = ViewState::default()
      .update(ViewEvent::DocumentSelected(Some("d_never_shelved".to_string())));

    let visible = visible_documents(&documents, &agents, &view);
    let view = view.reconcile_active(&visible);
    assert_eq!(view.active_document_id.as_deref(), Some("d_silted_reckoning"));
  }
}

#[cfg(test)]
mod model_tests {
  use super::*;

  #[test]
  fn test_canon_status_thresholds() {
    assert_eq!(CanonStatus::from_weight(1.0), CanonStatus::Canon);
    assert_eq!(CanonStatus::from_weight(0.7), CanonStatus::Canon);
    assert_eq!(CanonStatus::from_weight(0.69), CanonStatus::Disputed);
    assert_eq!(CanonStatus::from_weight(0.5), CanonStatus::Disputed);
    assert_eq!(CanonStatus::from_weight(0.49), CanonStatus::Apocrypha);
    assert_eq!(CanonStatus::from_weight(0.0), CanonStatus::Apocrypha);
  }

  #[test]
  fn test_lookups_handle_dangling_ids() {
    let documents = seed_documents();
    let agents = seed_agents();

    assert!(find_agent(&agents, "a_drowned_archivist").is_none());
    assert!(find_document(&documents, "d_lost_canticle").is_none());
    assert!(find_agent(&agents, "a_maris").is_some());
    assert!(find_document(&documents, "d_tidal_vow").is_some());
  }

  #[test]
  fn test_corpus_ids_are_unique() {
    let documents = seed_documents();
    let agents = seed_agents();

    let mut doc_ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    doc_ids.sort();
    doc_ids.dedup();
    assert_eq!(doc_ids.len(), documents.len());

    let mut agent_ids: Vec<&str> = agents.iter().map(|a| a.id.as_str()).collect();
    agent_ids.sort();
    agent_ids.dedup();
    assert_eq!(agent_ids.len(), agents.len());
  }
}

#[cfg(test)]
mod display_tests {
  use library::display::wrap_text;

  #[test]
  fn test_wrap_text_respects_width() {
    let wrapped = wrap_text("one two three four five six seven", 10);
    assert!(wrapped.iter().all(|line| line.len() <= 10));
    assert_eq!(wrapped.join(" "), "one two three four five six seven");
  }

  #[test]
  fn test_wrap_text_preserves_blank_lines() {
    let wrapped = wrap_text("first\n\nsecond", 80);
    assert_eq!(wrapped, vec!["first", "", "second"]);
  }
}
