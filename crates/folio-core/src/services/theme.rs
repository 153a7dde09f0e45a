use tracing::{debug, warn};

use crate::domain::Theme;
use crate::errors::CoreError;
use crate::ports::{KeyValueStore, Matcher, RenderSurface};

/// Clave del almacén donde se guarda el tema elegido.
pub const THEME_KEY: &str = "theme";

/// Botón de cambio de tema.
pub const TOGGLE_TRIGGER: Matcher<'static> = Matcher::Attr { name: "data-action", value: "toggle-theme" };

/// Tema claro/oscuro persistido bajo [`THEME_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
  current: Theme,
}

impl ThemeToggle {
  /// Lee el tema guardado.
  ///
  /// Una clave ausente es el tema por defecto. Un valor irreconocible también,
  /// pero se avisa en el log.
  pub fn load<K: KeyValueStore>(store: &K) -> Result<Self, CoreError> {
    let current = match store.get(THEME_KEY)? {
      None => Theme::default(),
      Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
        warn!("ignoring stored theme: {e}");
        Theme::default()
      }),
    };
    Ok(Self { current })
  }

  pub fn current(&self) -> Theme {
    self.current
  }

  /// Refleja el tema en la página: `data-theme` en la raíz y `aria-pressed`
  /// en el botón, si existe.
  pub fn apply<S: RenderSurface>(&self, surface: &mut S) {
    let root = surface.root();
    surface.set_attribute(&root, "data-theme", self.current.as_str());

    if let Some(button) = surface.query(&root, TOGGLE_TRIGGER) {
      let pressed = if self.current == Theme::Dark { "true" } else { "false" };
      surface.set_attribute(&button, "aria-pressed", pressed);
    }
  }

  /// Fija un tema concreto, lo persiste y lo aplica.
  pub fn set<K, S>(&mut self, theme: Theme, store: &mut K, surface: &mut S) -> Result<Theme, CoreError>
  where
    K: KeyValueStore,
    S: RenderSurface,
  {
    store.set(THEME_KEY, theme.as_str())?;
    debug!(from = %self.current, to = %theme, "theme changed");
    self.current = theme;
    self.apply(surface);
    Ok(theme)
  }

  pub fn toggle<K, S>(&mut self, store: &mut K, surface: &mut S) -> Result<Theme, CoreError>
  where
    K: KeyValueStore,
    S: RenderSurface,
  {
    self.set(self.current.toggled(), store, surface)
  }
}
