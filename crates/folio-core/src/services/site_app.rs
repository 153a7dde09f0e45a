use tracing::{debug, info};

use crate::domain::{Catalog, ProjectId, ProjectRecord, Theme};
use crate::errors::CoreError;
use crate::events::{EventOutcome, UiEvent};
use crate::ports::{KeyValueStore, RenderSurface};
use crate::services::portfolio_view::PortfolioView;
use crate::services::skills::SkillsPanel;
use crate::services::theme::{TOGGLE_TRIGGER, ThemeToggle};

/// Contexto de la aplicación.
///
/// Es dueño de los adapters (página y almacén) y de los servicios que
/// trabajan sobre ellos. Se construye con [`SiteApp::mount`] y se desmonta
/// con [`SiteApp::teardown`], que devuelve los adapters.
pub struct SiteApp<S, K>
where
  S: RenderSurface,
  K: KeyValueStore,
{
  surface: S,
  store: K,
  portfolio: PortfolioView<S>,
  theme: ThemeToggle,
  skills: SkillsPanel<S>,
}

impl<S, K> SiteApp<S, K>
where
  S: RenderSurface,
  K: KeyValueStore,
{
  /// Resuelve el marcado, carga el catálogo y lee el tema guardado.
  ///
  /// Falla si falta algún elemento fijo de la página, si hay ids de proyecto
  /// repetidos o si el almacén no se puede leer. No pinta nada todavía.
  pub fn mount(surface: S, store: K, catalog: Catalog) -> Result<Self, CoreError> {
    let mut portfolio = PortfolioView::attach(&surface)?;
    for record in catalog.records() {
      portfolio.append(record)?;
    }
    let skills = SkillsPanel::attach(&surface, catalog.skill_bars());
    let theme = ThemeToggle::load(&store)?;

    info!(projects = portfolio.len(), skills = skills.skills().len(), theme = %theme.current(), "site mounted");
    Ok(Self { surface, store, portfolio, theme, skills })
  }

  /// Pinta el grid y las habilidades, aplica el tema y arma la animación.
  pub fn start(&mut self) {
    self.portfolio.render_all(&mut self.surface);
    self.skills.render(&mut self.surface);
    self.theme.apply(&mut self.surface);
    self.skills.arm(&mut self.surface);
  }

  /// Despacha un evento de la página al servicio que corresponda.
  ///
  /// Sólo el cambio de tema puede fallar (escritura en el almacén).
  pub fn dispatch(&mut self, event: &UiEvent<S::Handle>) -> Result<EventOutcome, CoreError> {
    match event {
      UiEvent::Click { target } if self.surface.closest(target, TOGGLE_TRIGGER).is_some() => {
        let theme = self.theme.toggle(&mut self.store, &mut self.surface)?;
        Ok(EventOutcome::ThemeChanged(theme))
      }
      UiEvent::Intersect { target } => {
        let revealed = self.skills.on_intersect(&mut self.surface, target);
        Ok(if revealed { EventOutcome::SkillsRevealed } else { EventOutcome::Ignored })
      }
      _ => Ok(self.portfolio.handle_event(&mut self.surface, event)),
    }
  }

  pub fn open(&mut self, id: &ProjectId) -> Result<&ProjectRecord, CoreError> {
    self.portfolio.open_detail(&mut self.surface, id)
  }

  pub fn close(&mut self) {
    self.portfolio.close_detail(&mut self.surface);
  }

  /// Muestra las barras de habilidades con su ancho final.
  ///
  /// Para la salida estática, donde no hay intersecciones que despachar.
  pub fn reveal_skills(&mut self) -> bool {
    self.skills.reveal(&mut self.surface)
  }

  // -------- QUERY (read) --------

  pub fn portfolio(&self) -> &PortfolioView<S> {
    &self.portfolio
  }

  pub fn skills(&self) -> &SkillsPanel<S> {
    &self.skills
  }

  pub fn theme(&self) -> Theme {
    self.theme.current()
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  pub fn store(&self) -> &K {
    &self.store
  }

  /// Cancela observaciones pendientes y devuelve los adapters.
  ///
  /// El estado del modal se conserva en la página: si estaba abierto sigue
  /// abierto en el documento devuelto.
  pub fn teardown(mut self) -> (S, K) {
    self.skills.disarm(&mut self.surface);
    debug!(open = ?self.portfolio.selection(), "site torn down");
    (self.surface, self.store)
  }
}
