use crate::domain::{ProjectId, Theme};

/// Tecla que descarta el modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Eventos de entrada que el adapter de la página entrega al núcleo.
///
/// `H` es el handle de nodo del [`RenderSurface`](crate::ports::RenderSurface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent<H> {
  Click { target: H },
  KeyDown { key: String },
  /// Un elemento observado entró en el viewport.
  Intersect { target: H },
}

impl<H> UiEvent<H> {
  pub fn click(target: H) -> Self {
    UiEvent::Click { target }
  }

  pub fn key(key: &str) -> Self {
    UiEvent::KeyDown { key: key.to_string() }
  }

  pub fn escape() -> Self {
    Self::key(ESCAPE_KEY)
  }
}

/// Qué hizo el núcleo con un evento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
  Opened(ProjectId),
  /// El disparador apuntaba a un id que no existe; el estado no cambió.
  NotFound(ProjectId),
  Closed,
  ThemeChanged(Theme),
  SkillsRevealed,
  Ignored,
}
