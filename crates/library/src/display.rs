//! Presentation layer: renders derived state to the terminal. No filtering
//! decisions are made here.

use anyhow::Result;
use clap::ValueEnum;
use colored::*;

use crate::model::{find_agent, find_document, Agent, CanonStatus, DocumentRecord};
use crate::view::ViewState;

/// Fallback shown wherever an author id resolves to no archivist.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Fallback shown wherever a reference id resolves to no fragment.
pub const UNKNOWN_FRAGMENT: &str = "Unknown fragment";

#[derive(Debug, Clone, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
  Compact,
}

/// Render the archive list plus the active fragment's detail pane.
pub fn render_archive(
  documents: &[DocumentRecord],
  visible: &[&DocumentRecord],
  agents: &[Agent],
  view: &ViewState,
  format: &OutputFormat,
) -> Result<()> {
  match format {
    OutputFormat::Json => {
      println!("{}", serde_json::to_string_pretty(visible)?);
      return Ok(());
    }
    OutputFormat::Compact => {
      for doc in visible {
        println!("{} {}", doc.id, doc.title);
      }
      return Ok(());
    }
    OutputFormat::Pretty => {}
  }

  // An empty archive and an empty filter result are different states
  if documents.is_empty() {
    println!("The archive is empty");
    return Ok(());
  }
  if visible.is_empty() {
    println!("No fragments match the current filters");
    return Ok(());
  }

  for doc in visible {
    let active = view.active_document_id.as_deref() == Some(doc.id.as_str());
    let marker = if active { "▸".green().bold().to_string() } else { " ".to_string() };
    println!(
      "{} {} {} [{}] {} {}",
      marker,
      doc.id.cyan(),
      doc.title.yellow(),
      doc.faction_tag,
      canon_colored(CanonStatus::from_weight(doc.canon_weight)),
      doc.timestamp.format("%Y-%m-%d").to_string().dimmed(),
    );
  }

  if let Some(active_id) = view.active_document_id.as_deref() {
    if let Some(doc) = find_document_visible(visible, active_id) {
      println!();
      render_detail(doc, documents, agents);
    }
  }

  Ok(())
}

fn find_document_visible<'a>(
  visible: &[&'a DocumentRecord],
  id: &str,
) -> Option<&'a DocumentRecord> {
  visible.iter().find(|doc| doc.id == id).copied()
}

/// Render one fragment's detail pane: header, provenance, wrapped body and
/// one-level reference resolution.
pub fn render_detail(doc: &DocumentRecord, documents: &[DocumentRecord], agents: &[Agent]) {
  let header = format!("=== {} ===", doc.title.yellow().bold());
  println!("{header}");

  let author = find_agent(agents, &doc.author_id)
    .map(|agent| agent.name.clone())
    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
  let status = CanonStatus::from_weight(doc.canon_weight);

  println!(
    "by {} · [{}] · {} ({:.2}) · {}",
    author.cyan(),
    doc.faction_tag,
    canon_colored(status),
    doc.canon_weight,
    doc.timestamp.format("%Y-%m-%d %H:%M UTC"),
  );
  println!();

  let width = terminal_width().max(40).min(100);
  for line in wrap_text(&doc.text, width) {
    println!("{line}");
  }

  if !doc.references.is_empty() {
    println!();
    println!("References:");
    for reference in &doc.references {
      match find_document(documents, reference) {
        Some(target) => println!("  - {} ({})", target.title, reference.cyan()),
        None => println!("  - {} ({})", UNKNOWN_FRAGMENT.dimmed(), reference.cyan()),
      }
    }
  }
}

/// Render the archivist roster.
pub fn render_agents(agents: &[Agent], verbose: bool) {
  if agents.is_empty() {
    println!("No archivists on record");
    return;
  }

  for agent in agents {
    if verbose {
      println!(
        "{} {} [{}] credibility {:.0} · {} memories",
        agent.id.cyan(),
        agent.name.yellow(),
        agent.faction,
        agent.credibility,
        agent.memories.len(),
      );
    } else {
      println!("{} {}", agent.id.cyan(), agent.name.yellow());
    }
  }
}

fn canon_colored(status: CanonStatus) -> ColoredString {
  match status {
    CanonStatus::Canon => status.label().green(),
    CanonStatus::Disputed => status.label().yellow(),
    CanonStatus::Apocrypha => status.label().magenta(),
  }
}

fn terminal_width() -> usize {
  console::Term::stdout().size_checked().map(|(_, cols)| cols as usize).unwrap_or(80)
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}
