//! The seed corpus. Static data only: nothing here is generated, fetched or
//! mutated after startup.
//!
//! The records deliberately exercise every degradation path the browser has
//! to survive: a dangling author id, dangling and mutually-referencing
//! `references` entries, a faction tag that differs from its author's
//! faction, and canon weights on both sides of each display threshold.

use chrono::{TimeZone, Utc};

use crate::model::{Agent, DocumentRecord};

/// The archivist roster.
pub fn seed_agents() -> Vec<Agent> {
  vec![
    Agent {
      id: "a_veloran".to_string(),
      name: "Veloran the Chronicler".to_string(),
      belief_vector: vec![0.82, 0.11, 0.45, 0.67],
      style_vector: vec![0.31, 0.90, 0.12, 0.58],
      memories: vec!["d_origin_sky".to_string(), "d_aurora_accord".to_string()],
      faction: "Sky Choir".to_string(),
      credibility: 88.0,
    },
    Agent {
      id: "a_maris".to_string(),
      name: "Maris of the Shallows".to_string(),
      belief_vector: vec![0.22, 0.74, 0.61, 0.08],
      style_vector: vec![0.47, 0.29, 0.83, 0.14],
      memories: vec!["d_tidal_vow".to_string()],
      faction: "Tidal Covenant".to_string(),
      credibility: 74.0,
    },
    Agent {
      id: "a_ilex".to_string(),
      name: "Ilex Thornwrit".to_string(),
      belief_vector: vec![0.95, 0.33, 0.07, 0.51],
      style_vector: vec![0.66, 0.18, 0.42, 0.77],
      // The second memory points at a fragment the archive never held
      memories: vec!["d_ember_heresy".to_string(), "d_lost_canticle".to_string()],
      faction: "Ember Synod".to_string(),
      credibility: 41.0,
    },
    Agent {
      id: "a_quenn".to_string(),
      name: "Quenn Halfquill".to_string(),
      belief_vector: vec![0.50, 0.50, 0.50, 0.50],
      style_vector: vec![0.12, 0.88, 0.36, 0.44],
      memories: vec![],
      faction: "Unaligned".to_string(),
      credibility: 59.0,
    },
  ]
}

/// The five fragments of the archive.
pub fn seed_documents() -> Vec<DocumentRecord> {
  vec![
    DocumentRecord {
      id: "d_origin_sky".to_string(),
      title: "The Origin of the Sky".to_string(),
      text: "Before the shelves there was only the open vault of heaven, and the \
             first archivists bound its colors into folios. Every dawn since is a \
             reprint, the Choir says, struck from that original plate."
        .to_string(),
      author_id: "a_veloran".to_string(),
      timestamp: Utc.with_ymd_and_hms(2025, 3, 3, 9, 30, 0).unwrap(),
      embedding: vec![0.12, 0.83, 0.44, 0.09],
      references: vec!["d_aurora_accord".to_string()],
      faction_tag: "Sky Choir".to_string(),
      canon_weight: 0.94,
    },
    DocumentRecord {
      id: "d_aurora_accord".to_string(),
      title: "The Aurora Accord".to_string(),
      text: "Signed in the reading room beneath the northern lights, the Accord \
             fixed the order in which the heavens may be cited. Its clauses are \
             still binding on every shelf that faces the pole."
        .to_string(),
      // Written by an unaligned hand, shelved under the Choir's tag
      author_id: "a_quenn".to_string(),
      timestamp: Utc.with_ymd_and_hms(2024, 11, 17, 18, 45, 0).unwrap(),
      embedding: vec![0.77, 0.21, 0.05, 0.63],
      references: vec!["d_origin_sky".to_string(), "d_lost_canticle".to_string()],
      faction_tag: "Sky Choir".to_string(),
      canon_weight: 0.78,
    },
    DocumentRecord {
      id: "d_tidal_vow".to_string(),
      title: "The Tidal Vow".to_string(),
      text: "The Covenant swears its oaths at low water, where the stacks of the \
             drowned wing stand briefly dry. What the sea reclaims at flood is \
             considered signed."
        .to_string(),
      author_id: "a_maris".to_string(),
      timestamp: Utc.with_ymd_and_hms(2024, 8, 5, 11, 0, 0).unwrap(),
      embedding: vec![0.05, 0.42, 0.91, 0.27],
      references: vec!["d_silted_reckoning".to_string()],
      faction_tag: "Tidal Covenant".to_string(),
      canon_weight: 0.55,
    },
    DocumentRecord {
      id: "d_silted_reckoning".to_string(),
      title: "The Silted Reckoning".to_string(),
      text: "An accounting of everything the flood shelved out of order. The \
             ledger contradicts the Vow it cites, and the Covenant keeps both \
             without blinking."
        .to_string(),
      // No archivist by this id survives in the roster
      author_id: "a_drowned_archivist".to_string(),
      timestamp: Utc.with_ymd_and_hms(2025, 6, 21, 4, 12, 0).unwrap(),
      embedding: vec![0.39, 0.08, 0.56, 0.71],
      references: vec!["d_tidal_vow".to_string()],
      faction_tag: "Tidal Covenant".to_string(),
      canon_weight: 0.42,
    },
    DocumentRecord {
      id: "d_ember_heresy".to_string(),
      title: "The Ember Heresy".to_string(),
      text: "The Synod burned its own catalog and called the smoke a truer index. \
             Heretical, say the other wings; the ash settled between pages that \
             were never written."
        .to_string(),
      author_id: "a_ilex".to_string(),
      timestamp: Utc.with_ymd_and_hms(2024, 4, 29, 21, 20, 0).unwrap(),
      embedding: vec![0.88, 0.15, 0.33, 0.02],
      references: vec![],
      faction_tag: "Ember Synod".to_string(),
      canon_weight: 0.18,
    },
  ]
}
