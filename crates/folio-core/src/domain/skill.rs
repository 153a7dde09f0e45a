use serde::{Deserialize, Serialize};

use crate::view::{Element, Node};

/// Entrada `[[skills]]` de la configuración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConfig {
  pub name: String,
  /// Porcentaje de 0 a 100. Valores mayores se recortan a 100.
  pub level: u32,
}

/// Barra de habilidad mostrada en la sección `#skills`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
  name: String,
  level: u8,
}

impl SkillBar {
  pub const MAX_LEVEL: u8 = 100;

  pub fn new(name: impl Into<String>, level: u32) -> Self {
    let level = level.min(u32::from(Self::MAX_LEVEL)) as u8;
    SkillBar { name: name.into(), level }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn level(&self) -> u8 {
    self.level
  }

  /// La barra se pinta vacía; el ancho final lo fija la animación al entrar
  /// la sección en pantalla.
  pub fn view(&self) -> Node {
    Element::new("div")
      .class("skill")
      .child(Element::new("span").class("skill-name").text(self.name.as_str()))
      .child(
        Element::new("div").class("skill-track").child(
          Element::new("div")
            .class("skill-bar")
            .attr("data-level", self.level.to_string())
            .attr("style", "width: 0%"),
        ),
      )
      .into()
  }
}

impl From<SkillConfig> for SkillBar {
  fn from(cfg: SkillConfig) -> Self {
    SkillBar::new(cfg.name, cfg.level)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn level_is_clamped() {
    assert_eq!(SkillBar::new("Rust", 250).level(), 100);
    assert_eq!(SkillBar::new("CSS", 70).level(), 70);
  }

  #[test]
  fn bar_starts_empty() {
    let html = SkillBar::new("Rust", 80).view().to_html();
    assert!(html.contains(r#"<div class="skill-bar" data-level="80" style="width: 0%"></div>"#));
  }
}
