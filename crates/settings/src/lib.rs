//! Persisted settings for the Infinite Library tools.
//!
//! Settings live in a single JSON blob under the storage key
//! `infinite-library.settings`. Storage is local and unencrypted: anything
//! that can read the settings file can read the API key in plain text.
//!
//! Reads merge the persisted blob over a caller-supplied default, so missing
//! keys fall back and keys this build does not know about survive a
//! read-modify-write cycle. Writes replace the blob wholesale and notify
//! every registered subscriber, in registration order, before returning.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Storage key for the settings blob. The file backend appends `.json`.
pub const STORAGE_KEY: &str = "infinite-library.settings";

/// Failure classes the storage layer can produce. All of them are recovered
/// by [`SettingsStore::read`]; callers only see them from `write`.
#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("settings storage unavailable: {0}")]
  Storage(#[from] std::io::Error),
  #[error("settings blob is not valid JSON: {0}")]
  Format(#[from] serde_json::Error),
  #[error("settings blob is not a JSON object")]
  NotAnObject,
  #[error("no home directory available for settings storage")]
  NoHomeDir,
}

/// The persisted settings object.
///
/// `extra` carries every key the current build does not model, flattened into
/// the same JSON object, which keeps the blob forward-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
  #[serde(default = "default_model_slug")]
  pub model_slug: String,
  #[serde(default)]
  pub api_key: String,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_model_slug() -> String {
  "lorekeeper-7b".to_string()
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      model_slug: default_model_slug(),
      api_key: String::new(),
      extra: serde_json::Map::new(),
    }
  }
}

/// Mask an API key for display: show first 8 + last 4 chars.
///
/// The stored value stays untouched; this is display-side only.
pub fn mask_api_key(key: &str) -> String {
  if key.is_empty() {
    return String::new();
  }
  if key.len() <= 12 {
    return "****".to_string();
  }
  format!("{}****{}", &key[..8], &key[key.len() - 4..])
}

/// Raw blob storage behind the settings store.
///
/// Exactly one slot: `load` returns the current blob (or `None` when nothing
/// was ever stored) and `store` replaces it wholesale.
pub trait SettingsBackend: Send {
  fn load(&self) -> Result<Option<String>, SettingsError>;
  fn store(&self, blob: &str) -> Result<(), SettingsError>;
}

/// File-backed storage under `<base>/persistent/<STORAGE_KEY>.json`, where
/// `<base>` is `$INFINITE_LIBRARY_DIR` or `~/.infinite-library`.
pub struct FileBackend {
  path: PathBuf,
}

impl FileBackend {
  pub fn new() -> Result<Self, SettingsError> {
    Ok(Self { path: settings_path()? })
  }

  pub fn at_path(path: PathBuf) -> Self {
    Self { path }
  }

  /// Where the blob lives on disk.
  pub fn path(&self) -> &PathBuf {
    &self.path
  }
}

impl SettingsBackend for FileBackend {
  fn load(&self) -> Result<Option<String>, SettingsError> {
    if !self.path.exists() {
      return Ok(None);
    }
    Ok(Some(fs::read_to_string(&self.path)?))
  }

  fn store(&self, blob: &str) -> Result<(), SettingsError> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&self.path, blob)?;
    Ok(())
  }
}

/// In-memory single-slot backend for tests.
pub struct MemoryBackend {
  slot: Mutex<Option<String>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self { slot: Mutex::new(None) }
  }

  pub fn with_blob(blob: &str) -> Self {
    Self { slot: Mutex::new(Some(blob.to_string())) }
  }
}

impl Default for MemoryBackend {
  fn default() -> Self {
    Self::new()
  }
}

impl SettingsBackend for MemoryBackend {
  fn load(&self) -> Result<Option<String>, SettingsError> {
    Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
  }

  fn store(&self, blob: &str) -> Result<(), SettingsError> {
    *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(blob.to_string());
    Ok(())
  }
}

/// Resolve the on-disk location of the settings blob
fn settings_path() -> Result<PathBuf, SettingsError> {
  let base = if let Ok(custom_dir) = std::env::var("INFINITE_LIBRARY_DIR") {
    PathBuf::from(custom_dir)
  } else {
    dirs::home_dir().ok_or(SettingsError::NoHomeDir)?.join(".infinite-library")
  };

  Ok(base.join("persistent").join(format!("{STORAGE_KEY}.json")))
}

/// Handle returned by [`SettingsStore::subscribe`]; pass it back to
/// [`SettingsStore::unsubscribe`] to remove exactly that callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&Settings) + Send>;

struct StoreInner {
  next_id: u64,
  subscribers: Vec<(SubscriberId, Subscriber)>,
}

/// The persisted settings store.
///
/// `write` persists and notifies as one unit under an internal mutex, so the
/// store can be shared across threads; subscriber callbacks therefore must
/// not call back into the store.
pub struct SettingsStore {
  backend: Box<dyn SettingsBackend>,
  inner: Mutex<StoreInner>,
}

impl SettingsStore {
  /// Store over the default file backend.
  pub fn new() -> Result<Self> {
    Ok(Self::with_backend(Box::new(FileBackend::new()?)))
  }

  /// Store over a caller-supplied backend, for dependency injection.
  pub fn with_backend(backend: Box<dyn SettingsBackend>) -> Self {
    Self {
      backend,
      inner: Mutex::new(StoreInner { next_id: 0, subscribers: Vec::new() }),
    }
  }

  /// Read the persisted settings merged over `default`.
  ///
  /// Persisted keys override matching default keys; default fields fill in
  /// anything missing. Any storage failure (missing blob aside - that is the
  /// normal first-run state) degrades to the default unchanged, with a
  /// warning on the log. This operation never fails the caller.
  pub fn read(&self, default: &Settings) -> Settings {
    match self.try_read(default) {
      Ok(settings) => settings,
      Err(err) => {
        scribe::warn(&format!("{STORAGE_KEY} unreadable ({err}); using defaults"));
        default.clone()
      }
    }
  }

  fn try_read(&self, default: &Settings) -> Result<Settings, SettingsError> {
    let blob = match self.backend.load()? {
      Some(blob) => blob,
      None => {
        tracing::debug!("no persisted settings; using defaults");
        return Ok(default.clone());
      }
    };

    let persisted: serde_json::Value = serde_json::from_str(blob.trim())?;
    merge_over(default, &persisted)
  }

  /// Replace the persisted settings wholesale, then synchronously notify
  /// every registered subscriber with the new value, in registration order.
  pub fn write(&self, value: &Settings) -> Result<()> {
    let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

    let blob = serde_json::to_string_pretty(value).map_err(SettingsError::from)?;
    self.backend.store(&blob)?;
    tracing::debug!(subscribers = inner.subscribers.len(), "settings written");

    for (_, callback) in &inner.subscribers {
      callback(value);
    }

    Ok(())
  }

  /// Register `callback` to run on every future `write`.
  pub fn subscribe<F>(&self, callback: F) -> SubscriberId
  where
    F: Fn(&Settings) + Send + 'static,
  {
    let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
    let id = SubscriberId(inner.next_id);
    inner.next_id += 1;
    inner.subscribers.push((id, Box::new(callback)));
    id
  }

  /// Remove the callback registered under `id`. Removing an id twice, or an
  /// id that was never issued, is a no-op.
  pub fn unsubscribe(&self, id: SubscriberId) {
    let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
    inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
  }
}

/// Overlay a persisted JSON object onto the default settings.
fn merge_over(default: &Settings, persisted: &serde_json::Value) -> Result<Settings, SettingsError> {
  let overlay = persisted.as_object().ok_or(SettingsError::NotAnObject)?;

  let mut merged = match serde_json::to_value(default)? {
    serde_json::Value::Object(map) => map,
    _ => return Err(SettingsError::NotAnObject),
  };

  for (key, value) in overlay {
    merged.insert(key.clone(), value.clone());
  }

  Ok(serde_json::from_value(serde_json::Value::Object(merged))?)
}
