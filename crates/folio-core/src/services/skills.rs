use tracing::debug;

use crate::domain::SkillBar;
use crate::ports::{Anchor, Matcher, RenderSurface};

const SKILL_LIST: Matcher<'static> = Matcher::Class("skills-list");
const SKILL_BAR: Matcher<'static> = Matcher::Class("skill-bar");

/// Sección de habilidades con animación de entrada.
///
/// La animación se dispara como mucho una vez: la primera intersección de la
/// sección fija el ancho de cada barra y cancela la observación.
pub struct SkillsPanel<S: RenderSurface> {
  section: Option<S::Handle>,
  skills: Vec<SkillBar>,
  armed: bool,
  revealed: bool,
}

impl<S: RenderSurface> SkillsPanel<S> {
  /// La sección `#skills` es opcional: sin ella el panel no hace nada.
  pub fn attach(surface: &S, skills: Vec<SkillBar>) -> Self {
    let section = surface.query(&surface.root(), Anchor::Skills.matcher());
    if section.is_none() && !skills.is_empty() {
      debug!(skills = skills.len(), "page has no skills section; skills will not be shown");
    }
    Self { section, skills, armed: false, revealed: false }
  }

  pub fn render(&self, surface: &mut S) {
    let Some(section) = &self.section else { return };
    let list = surface.query(section, SKILL_LIST).unwrap_or_else(|| section.clone());
    let views: Vec<_> = self.skills.iter().map(SkillBar::view).collect();
    surface.replace_children(&list, &views);
  }

  /// Registra la observación de una sola vez.
  pub fn arm(&mut self, surface: &mut S) {
    if self.armed || self.revealed {
      return;
    }
    if let Some(section) = &self.section {
      surface.observe_intersection(section);
      self.armed = true;
    }
  }

  /// Atiende una notificación de intersección. Devuelve `true` sólo la vez
  /// que anima las barras.
  pub fn on_intersect(&mut self, surface: &mut S, target: &S::Handle) -> bool {
    let on_section = self.section.as_ref().is_some_and(|section| section == target);
    on_section && self.reveal(surface)
  }

  /// Fija el ancho final de cada barra sin esperar a la intersección.
  ///
  /// Es lo que necesita una página estática, donde nadie va a notificar la
  /// visibilidad. Igual que `on_intersect`, sólo actúa una vez.
  pub fn reveal(&mut self, surface: &mut S) -> bool {
    let Some(section) = &self.section else { return false };
    if self.revealed {
      return false;
    }

    for bar in surface.query_all(section, SKILL_BAR) {
      let level = surface.attribute(&bar, "data-level").and_then(|l| l.parse::<u8>().ok()).unwrap_or(0);
      let level = level.min(SkillBar::MAX_LEVEL);
      surface.set_attribute(&bar, "style", &format!("width: {level}%"));
    }
    surface.set_attribute(section, "data-revealed", "true");
    surface.unobserve_intersection(section);

    self.armed = false;
    self.revealed = true;
    debug!(bars = self.skills.len(), "skills revealed");
    true
  }

  /// Cancela una observación pendiente.
  pub fn disarm(&mut self, surface: &mut S) {
    if !self.armed {
      return;
    }
    if let Some(section) = &self.section {
      surface.unobserve_intersection(section);
      self.armed = false;
    }
  }

  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  pub fn skills(&self) -> &[SkillBar] {
    &self.skills
  }
}
