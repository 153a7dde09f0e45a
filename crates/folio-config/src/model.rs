use crate::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[site]` de folio.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  /// Título de la página (`<title>` y cabecera).
  #[serde(default = "default_title")]
  pub title: String,

  #[serde(default)]
  pub owner: String,

  #[serde(default)]
  pub tagline: String,

  /// Hoja de estilos enlazada desde la página generada.
  #[serde(default = "default_stylesheet")]
  pub stylesheet: String,

  /// Directorio donde se escribe `index.html`. Por defecto `<data>/public`.
  pub output_dir: Option<PathBuf>,
}

fn default_title() -> String {
  "Portfolio".into()
}

fn default_stylesheet() -> String {
  "styles.css".into()
}

impl Default for SiteConfig {
  fn default() -> Self {
    SiteConfig {
      title: default_title(),
      owner: String::new(),
      tagline: String::new(),
      stylesheet: default_stylesheet(),
      output_dir: None,
    }
  }
}

impl SiteConfig {
  /// Carga `[site]` y la escribe de vuelta con los valores por defecto que
  /// falten, para que el usuario los vea en su archivo.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg: SiteConfig = CONFIG_BACKEND.load_section_with_default("site")?;
    CONFIG_BACKEND.save_section("site", &cfg)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default("site")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("site", self)
  }

  /// Ruta final de `index.html`.
  pub fn output_file(&self) -> PathBuf {
    let dir = self.output_dir.clone().unwrap_or_else(|| PATHS.output_dir());
    dir.join("index.html")
  }
}
