use serde::{Deserialize, Serialize};

use crate::domain::project::{ProjectConfig, ProjectRecord};
use crate::domain::skill::{SkillBar, SkillConfig};

/// Contenido estático de la página: proyectos y habilidades, en el orden en
/// que se declararon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub projects: Vec<ProjectConfig>,
  #[serde(default)]
  pub skills: Vec<SkillConfig>,
}

impl Catalog {
  pub fn records(&self) -> impl Iterator<Item = ProjectRecord> + '_ {
    self.projects.iter().cloned().map(ProjectRecord::from_config)
  }

  pub fn skill_bars(&self) -> Vec<SkillBar> {
    self.skills.iter().cloned().map(SkillBar::from).collect()
  }
}
