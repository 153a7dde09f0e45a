use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un proyecto dentro del portfolio.
///
/// A diferencia de otros ids del sistema no se genera: viene dado por la
/// configuración estática (`id = "oater-site"`) y es la clave que viaja en el
/// atributo `data-id` de cada tarjeta.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
  pub fn new(id: impl Into<String>) -> Self {
    ProjectId(id.into())
  }

  /// Devuelve el id como `&str`.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ProjectId {
  fn from(s: &str) -> Self {
    ProjectId(s.to_string())
  }
}

impl From<String> for ProjectId {
  fn from(s: String) -> Self {
    ProjectId(s)
  }
}

impl AsRef<str> for ProjectId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ProjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
