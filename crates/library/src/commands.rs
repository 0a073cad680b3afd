use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;

use crate::display::{self, OutputFormat};
use crate::filter::visible_documents;
use crate::fixtures;
use crate::model::find_document;
use crate::view::{FactionFilter, ViewEvent, ViewState};
use settings::{mask_api_key, Settings, SettingsStore};

/// Browse the archive: apply filters, re-anchor the active fragment, render.
pub fn browse(
  faction: Option<String>,
  canon_only: bool,
  search_terms: &[String],
  select: Option<String>,
  format: &OutputFormat,
) -> Result<()> {
  let documents = fixtures::seed_documents();
  let agents = fixtures::seed_agents();

  let faction_filter = faction.map(FactionFilter::Faction).unwrap_or(FactionFilter::All);
  let view = ViewState::default()
    .update(ViewEvent::FactionSelected(faction_filter))
    .update(ViewEvent::CanonOnlySet(canon_only))
    .update(ViewEvent::SearchChanged(search_terms.join(" ")))
    .update(ViewEvent::DocumentSelected(select));

  let visible = visible_documents(&documents, &agents, &view);
  let view = view.reconcile_active(&visible);
  tracing::debug!(visible = visible.len(), total = documents.len(), "visible set recomputed");

  display::render_archive(&documents, &visible, &agents, &view, format)
}

/// Detail pane for one fragment.
pub fn show(id: &str) -> Result<()> {
  let documents = fixtures::seed_documents();
  let agents = fixtures::seed_agents();

  let doc = find_document(&documents, id)
    .ok_or_else(|| anyhow!("Fragment {} not found in the archive", id))?;

  display::render_detail(doc, &documents, &agents);
  Ok(())
}

/// The archivist roster.
pub fn list_agents(verbose: bool) -> Result<()> {
  display::render_agents(&fixtures::seed_agents(), verbose);
  Ok(())
}

/// Distinct faction tags observed across the corpus, sorted.
pub fn list_factions() -> Result<()> {
  let documents = fixtures::seed_documents();
  let factions: BTreeSet<&str> = documents.iter().map(|doc| doc.faction_tag.as_str()).collect();

  if factions.is_empty() {
    println!("No factions on record");
    return Ok(());
  }

  for faction in factions {
    println!("{}", faction.cyan());
  }
  Ok(())
}

/// Show current settings merged over defaults. The API key is masked for
/// display only; the stored value is plain text.
pub fn settings_show() -> Result<()> {
  let store = SettingsStore::new()?;
  let current = store.read(&Settings::default());

  println!("model:   {}", current.model_slug.yellow());
  println!("api key: {}", mask_api_key(&current.api_key));
  for (key, value) in &current.extra {
    println!("{key}: {value}");
  }

  scribe::info("settings are stored locally, unencrypted");
  Ok(())
}

/// Read-modify-write of the whole settings object.
pub fn settings_set(
  model: Option<String>,
  api_key: Option<String>,
  unset_extra: Option<String>,
) -> Result<()> {
  if model.is_none() && api_key.is_none() && unset_extra.is_none() {
    return Err(anyhow!("At least one of --model, --api-key or --unset-extra must be provided"));
  }

  let store = SettingsStore::new()?;
  store.subscribe(|updated: &Settings| {
    scribe::event_info(&format!("settings updated; model is {}", updated.model_slug));
  });

  let mut current = store.read(&Settings::default());
  if let Some(model) = model {
    current.model_slug = model;
  }
  if let Some(api_key) = api_key {
    current.api_key = api_key;
  }
  if let Some(key) = unset_extra {
    current.extra.remove(&key);
  }

  store.write(&current)?;
  println!("{} Settings saved", "✓".green());
  Ok(())
}

/// Write the default settings wholesale.
pub fn settings_reset() -> Result<()> {
  let store = SettingsStore::new()?;
  store.write(&Settings::default())?;

  println!("{} Settings reset to defaults", "✓".green());
  Ok(())
}
