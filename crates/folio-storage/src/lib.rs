pub mod config;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_config::{ConfigBackend, ConfigError};
use folio_core::ports::{KeyValueStore, StoreError};

pub use config::StorageConfig;

/// Almacenamiento local persistente en un archivo JSON plano
/// (`{"theme": "dark"}`).
///
/// El contenido se lee al abrir y cada `set` reescribe el archivo de forma
/// atómica.
#[derive(Debug)]
pub struct LocalStore {
  path: PathBuf,
  entries: BTreeMap<String, String>,
}

impl LocalStore {
  /// Abre el almacén en `path`. Un archivo inexistente es un almacén vacío.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(content) if content.trim().is_empty() => BTreeMap::new(),
      Ok(content) => serde_json::from_str(&content)
        .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?,
      Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
      Err(e) => return Err(StoreError::Io(format!("{}: {e}", path.display()))),
    };

    Ok(Self { path, entries })
  }

  /// Abre el almacén configurado en `[storage]`.
  pub fn new_from_config() -> Result<Self, StoreError> {
    let cfg = StorageConfig::load().map_err(config_error)?;
    Self::open(cfg.store_path)
  }

  /// Como [`LocalStore::new_from_config`], leyendo de `backend`.
  pub fn from_backend<B: ConfigBackend>(backend: &B) -> Result<Self, StoreError> {
    let cfg = StorageConfig::load_from(backend).map_err(config_error)?;
    Self::open(cfg.store_path)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    folio_fs::atomic_write_creating_dirs(&self.path, &json)
      .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))
  }
}

fn config_error(e: ConfigError) -> StoreError {
  StoreError::Config(e.to_string())
}

impl KeyValueStore for LocalStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.get(key).cloned())
  }

  /// El valor sólo queda en memoria si se pudo escribir en disco.
  fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
    let mut next = self.entries.clone();
    next.insert(key.to_string(), value.to_string());
    self.flush(&next)?;
    self.entries = next;
    tracing::debug!(key, path = %self.path.display(), "local store updated");
    Ok(())
  }
}

/// Almacén en memoria, sin persistencia.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(key: &str, value: &str) -> Self {
    let mut store = Self::new();
    store.entries.insert(key.to_string(), value.to_string());
    store
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}
