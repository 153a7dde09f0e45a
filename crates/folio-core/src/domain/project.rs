use crate::domain::ids::ProjectId;
use serde::{Deserialize, Serialize};

/// Imagen usada cuando un proyecto no declara `image`.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400.png?text=Project";

/// Marcador de "sin enlace" aceptado en la configuración.
pub const NO_LINK: &str = "#";

/// Objeto de configuración literal de un proyecto, tal como aparece en
/// `[[projects]]` de `folio.toml`.
///
/// Sólo `id` y `title` son obligatorios; el resto se rellena con valores por
/// defecto al construir el [`ProjectRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub subtitle: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub features: Option<Vec<String>>,
  #[serde(default)]
  pub role: Option<String>,
  #[serde(default)]
  pub year: Option<String>,
  #[serde(default)]
  pub duration: Option<String>,
  #[serde(default)]
  pub challenges: Option<String>,
  #[serde(default)]
  pub results: Option<String>,
  #[serde(default)]
  pub tech: Option<Vec<String>>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub live: Option<String>,
  #[serde(default)]
  pub code: Option<String>,
  #[serde(default)]
  pub design: Option<String>,
  #[serde(default)]
  pub notice: Option<String>,
}

/// Datos de presentación de un proyecto.
///
/// Se construye una vez al arrancar y no se modifica después: los campos son
/// privados y sólo se exponen por lectura.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
  id: ProjectId,
  title: String,
  subtitle: String,
  description: String,
  features: Vec<String>,
  role: String,
  year: String,
  duration: String,
  challenges: String,
  results: String,
  tech: Vec<String>,
  image: String,
  live: Option<String>,
  code: Option<String>,
  design: Option<String>,
  notice: Option<String>,
}

impl ProjectRecord {
  /// Construye el registro aplicando los valores por defecto.
  ///
  /// - textos opcionales → cadena vacía
  /// - listas opcionales → lista vacía
  /// - enlaces vacíos o `"#"` → ausentes
  /// - imagen ausente → [`PLACEHOLDER_IMAGE`]
  pub fn from_config(cfg: ProjectConfig) -> Self {
    ProjectRecord {
      id: ProjectId::from(cfg.id),
      title: cfg.title,
      subtitle: cfg.subtitle.unwrap_or_default(),
      description: cfg.description.unwrap_or_default(),
      features: cfg.features.unwrap_or_default(),
      role: cfg.role.unwrap_or_default(),
      year: cfg.year.unwrap_or_default(),
      duration: cfg.duration.unwrap_or_default(),
      challenges: cfg.challenges.unwrap_or_default(),
      results: cfg.results.unwrap_or_default(),
      tech: cfg.tech.unwrap_or_default(),
      image: cfg.image.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
      live: link(cfg.live),
      code: link(cfg.code),
      design: link(cfg.design),
      notice: cfg.notice.filter(|s| !s.trim().is_empty()),
    }
  }

  pub fn id(&self) -> &ProjectId {
    &self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn subtitle(&self) -> &str {
    &self.subtitle
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn features(&self) -> &[String] {
    &self.features
  }

  pub fn role(&self) -> &str {
    &self.role
  }

  pub fn year(&self) -> &str {
    &self.year
  }

  pub fn duration(&self) -> &str {
    &self.duration
  }

  pub fn challenges(&self) -> &str {
    &self.challenges
  }

  pub fn results(&self) -> &str {
    &self.results
  }

  pub fn tech(&self) -> &[String] {
    &self.tech
  }

  pub fn image(&self) -> &str {
    &self.image
  }

  /// URL de la demo en vivo, si existe.
  pub fn live(&self) -> Option<&str> {
    self.live.as_deref()
  }

  /// URL del código fuente, si existe.
  pub fn code(&self) -> Option<&str> {
    self.code.as_deref()
  }

  /// URL del mockup de diseño, si existe.
  pub fn design(&self) -> Option<&str> {
    self.design.as_deref()
  }

  /// Aviso mostrado en lugar de la demo cuando no hay enlace en vivo.
  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }
}

impl From<ProjectConfig> for ProjectRecord {
  fn from(cfg: ProjectConfig) -> Self {
    ProjectRecord::from_config(cfg)
  }
}

fn link(value: Option<String>) -> Option<String> {
  value.filter(|s| {
    let s = s.trim();
    !s.is_empty() && s != NO_LINK
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn minimal() -> ProjectConfig {
    ProjectConfig { id: "a".into(), title: "T".into(), ..Default::default() }
  }

  #[test]
  fn optional_fields_are_defaulted() {
    let p = ProjectRecord::from_config(minimal());

    assert_eq!(p.id().as_str(), "a");
    assert_eq!(p.title(), "T");
    assert_eq!(p.subtitle(), "");
    assert_eq!(p.description(), "");
    assert!(p.features().is_empty());
    assert!(p.tech().is_empty());
    assert_eq!(p.role(), "");
    assert_eq!(p.year(), "");
    assert_eq!(p.image(), PLACEHOLDER_IMAGE);
    assert_eq!(p.live(), None);
    assert_eq!(p.code(), None);
    assert_eq!(p.design(), None);
    assert_eq!(p.notice(), None);
  }

  #[test]
  fn placeholder_links_mean_no_link() {
    let p = ProjectRecord::from_config(ProjectConfig {
      live: Some("#".into()),
      code: Some("  ".into()),
      design: Some("https://figma.com/file/x".into()),
      ..minimal()
    });

    assert_eq!(p.live(), None);
    assert_eq!(p.code(), None);
    assert_eq!(p.design(), Some("https://figma.com/file/x"));
  }

  #[test]
  fn malformed_urls_are_kept_verbatim() {
    let p = ProjectRecord::from_config(ProjectConfig { live: Some("not a url".into()), ..minimal() });
    assert_eq!(p.live(), Some("not a url"));
  }

  #[test]
  fn config_deserializes_from_toml_keys() {
    let cfg: ProjectConfig = serde_json::from_str(
      r#"{ "id": "kidicap", "title": "KIDICAP", "tech": ["PWA", "UX"], "notice": "Internal tool" }"#,
    )
    .unwrap();
    let p = ProjectRecord::from(cfg);

    assert_eq!(p.tech(), ["PWA".to_string(), "UX".to_string()]);
    assert_eq!(p.notice(), Some("Internal tool"));
  }
}
