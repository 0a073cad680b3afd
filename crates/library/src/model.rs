use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canon weight at or above this value classifies a fragment as Canon, and
/// is the cutoff the canon-only filter applies.
pub const CANON_THRESHOLD: f32 = 0.7;

/// Canon weight at or above this value (but below canon) is Disputed.
pub const DISPUTED_THRESHOLD: f32 = 0.5;

/// An archivist. Immutable fixture data; nothing validates the vector
/// dimensions or that `memories` point at fragments that exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
  pub id: String,
  pub name: String,
  pub belief_vector: Vec<f32>,
  pub style_vector: Vec<f32>,
  pub memories: Vec<String>,
  pub faction: String,
  pub credibility: f32,
}

/// A lore fragment.
///
/// `author_id` and `references` are soft references: they may dangle, and
/// references may form cycles. Nothing traverses them beyond a one-level
/// display lookup. `embedding` is carried but never read by any computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
  pub id: String,
  pub title: String,
  pub text: String,
  pub author_id: String,
  pub timestamp: DateTime<Utc>,
  pub embedding: Vec<f32>,
  pub references: Vec<String>,
  pub faction_tag: String,
  pub canon_weight: f32,
}

/// Display-only classification of a fragment's narrative authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonStatus {
  Canon,
  Disputed,
  Apocrypha,
}

impl CanonStatus {
  pub fn from_weight(weight: f32) -> Self {
    if weight >= CANON_THRESHOLD {
      CanonStatus::Canon
    } else if weight >= DISPUTED_THRESHOLD {
      CanonStatus::Disputed
    } else {
      CanonStatus::Apocrypha
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      CanonStatus::Canon => "Canon",
      CanonStatus::Disputed => "Disputed",
      CanonStatus::Apocrypha => "Apocrypha",
    }
  }
}

impl fmt::Display for CanonStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Look up an agent by id. Callers handle the `None` case; author ids are
/// allowed to dangle.
pub fn find_agent<'a>(agents: &'a [Agent], id: &str) -> Option<&'a Agent> {
  agents.iter().find(|agent| agent.id == id)
}

/// Look up a fragment by id. Callers handle the `None` case; reference ids
/// are allowed to dangle.
pub fn find_document<'a>(documents: &'a [DocumentRecord], id: &str) -> Option<&'a DocumentRecord> {
  documents.iter().find(|doc| doc.id == id)
}
