use folio_core::domain::{Catalog, ProjectConfig, SkillConfig};

use crate::{CONFIG_BACKEND, ConfigBackend, ConfigError};

/// Carga `[[projects]]` y `[[skills]]` de folio.toml usando el backend global.
pub fn load_catalog() -> Result<Catalog, ConfigError> {
  load_catalog_from(&*CONFIG_BACKEND)
}

pub fn load_catalog_from<B: ConfigBackend>(backend: &B) -> Result<Catalog, ConfigError> {
  let projects: Vec<ProjectConfig> = backend.load_section_with_default("projects")?;
  let skills: Vec<SkillConfig> = backend.load_section_with_default("skills")?;
  tracing::debug!(projects = projects.len(), skills = skills.len(), "catalog loaded");
  Ok(Catalog { projects, skills })
}
