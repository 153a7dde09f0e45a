/// Errores de un almacén clave-valor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("io error: {0}")]
  Io(String),

  #[error("corrupt store: {0}")]
  Corrupt(String),

  #[error("store config error: {0}")]
  Config(String),
}

/// Port de almacenamiento persistente clave-valor (el equivalente a
/// `localStorage` del navegador).
///
/// Una clave ausente no es un error: `get` devuelve `Ok(None)`.
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
  fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
