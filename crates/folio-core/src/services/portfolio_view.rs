use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

use crate::domain::{ProjectId, ProjectRecord};
use crate::errors::CoreError;
use crate::events::{ESCAPE_KEY, EventOutcome, UiEvent};
use crate::ports::{Anchor, Matcher, RenderSurface};
use crate::services::modal::ModalState;

/// Disparador del modal dentro de una tarjeta.
const OPEN_TRIGGER: Matcher<'static> = Matcher::Attr { name: "data-action", value: "open" };
const CARD: Matcher<'static> = Matcher::Class("project-card");

/// Bloqueo de scroll del documento mientras el modal está abierto.
const SCROLL_LOCK: &str = "overflow: hidden";

/// Declaraciones de `style` salvo `overflow`.
fn without_overflow(style: &str) -> Vec<&str> {
  style
    .split(';')
    .map(str::trim)
    .filter(|decl| !decl.is_empty())
    .filter(|decl| decl.split(':').next().map(str::trim) != Some("overflow"))
    .collect()
}

/// Sub-elementos fijos del modal, resueltos una sola vez.
struct ModalAnchors<H> {
  modal: H,
  title: H,
  lead: H,
  meta: H,
  details: H,
  links: H,
  preview: H,
}

/// Grid de proyectos + modal de detalle compartido.
///
/// Mantiene la colección ordenada (orden de inserción = orden en pantalla) y el
/// estado del modal. No posee el [`RenderSurface`]: cada operación que pinta
/// lo recibe prestado.
pub struct PortfolioView<S: RenderSurface> {
  projects: IndexMap<ProjectId, ProjectRecord>,
  state: ModalState,
  root: S::Handle,
  grid: S::Handle,
  anchors: ModalAnchors<S::Handle>,
}

fn require<S: RenderSurface>(surface: &S, scope: &S::Handle, anchor: Anchor) -> Result<S::Handle, CoreError> {
  surface.query(scope, anchor.matcher()).ok_or(CoreError::MissingAnchor(anchor))
}

impl<S: RenderSurface> PortfolioView<S> {
  /// Resuelve el grid y el marcado del modal.
  ///
  /// Falla con [`CoreError::MissingAnchor`] si la página no tiene la forma
  /// esperada: es un error de configuración, no algo recuperable.
  pub fn attach(surface: &S) -> Result<Self, CoreError> {
    let root = surface.root();
    let grid = require(surface, &root, Anchor::Grid)?;
    let modal = require(surface, &root, Anchor::Modal)?;

    // Las búsquedas del contenido se limitan al propio modal.
    let anchors = ModalAnchors {
      title: require(surface, &modal, Anchor::ModalTitle)?,
      lead: require(surface, &modal, Anchor::ModalLead)?,
      meta: require(surface, &modal, Anchor::ModalMeta)?,
      details: require(surface, &modal, Anchor::ModalDetails)?,
      links: require(surface, &modal, Anchor::ModalLinks)?,
      preview: require(surface, &modal, Anchor::ModalPreview)?,
      modal,
    };
    // El botón de cierre sólo se usa al despachar clicks, pero sin él el
    // modal no tiene forma de cerrarse con el ratón.
    require(surface, &anchors.modal, Anchor::ModalClose)?;

    Ok(Self { projects: IndexMap::new(), state: ModalState::Closed, root, grid, anchors })
  }

  /// Añade un proyecto al final de la colección.
  ///
  /// Un id repetido se rechaza y la colección no cambia.
  pub fn append(&mut self, record: ProjectRecord) -> Result<(), CoreError> {
    match self.projects.entry(record.id().clone()) {
      Entry::Occupied(e) => {
        warn!(project = %e.key(), "rejecting duplicate project id");
        Err(CoreError::DuplicateProject(e.key().clone()))
      }
      Entry::Vacant(e) => {
        e.insert(record);
        Ok(())
      }
    }
  }

  /// Vacía el grid y pinta una tarjeta por proyecto, en orden.
  pub fn render_all(&self, surface: &mut S) {
    surface.clear_children(&self.grid);
    for project in self.projects.values() {
      surface.append_view(&self.grid, &project.summary_view());
    }
    debug!(cards = self.projects.len(), "rendered project grid");
  }

  /// Rellena el modal con el proyecto `id` y lo muestra.
  ///
  /// Si el id no existe devuelve [`CoreError::ProjectNotFound`] sin tocar ni
  /// el estado ni la página. Abrir otro proyecto con el modal ya abierto lo
  /// re-puebla directamente.
  pub fn open_detail(&mut self, surface: &mut S, id: &ProjectId) -> Result<&ProjectRecord, CoreError> {
    let Some(project) = self.projects.get(id) else {
      warn!(project = %id, "open requested for unknown project");
      return Err(CoreError::ProjectNotFound(id.clone()));
    };

    let view = project.detail_view();
    let a = &self.anchors;
    surface.set_text(&a.title, &view.title);
    surface.set_text(&a.lead, &view.lead);
    surface.replace_children(&a.meta, &view.meta);
    surface.replace_children(&a.details, &view.details);
    surface.replace_children(&a.links, &view.links);
    surface.replace_children(&a.preview, std::slice::from_ref(&view.preview));
    surface.set_attribute(&a.modal, "aria-hidden", "false");
    self.lock_scroll(surface);

    debug!(project = %id, from = ?self.state, "modal open");
    self.state = ModalState::Open(id.clone());
    Ok(project)
  }

  /// Oculta el modal y borra la selección. Idempotente.
  pub fn close_detail(&mut self, surface: &mut S) {
    surface.set_attribute(&self.anchors.modal, "aria-hidden", "true");
    self.unlock_scroll(surface);

    if self.state.is_open() {
      debug!(from = ?self.state, "modal closed");
    }
    self.state = ModalState::Closed;
  }

  /// Añade `overflow: hidden` al `style` de la raíz, conservando el resto.
  fn lock_scroll(&self, surface: &mut S) {
    let current = surface.attribute(&self.root, "style").unwrap_or_default();
    let mut decls = without_overflow(&current);
    decls.push(SCROLL_LOCK);
    surface.set_attribute(&self.root, "style", &decls.join("; "));
  }

  fn unlock_scroll(&self, surface: &mut S) {
    let Some(current) = surface.attribute(&self.root, "style") else { return };
    let rest = without_overflow(&current);
    if rest.is_empty() {
      surface.remove_attribute(&self.root, "style");
    } else {
      surface.set_attribute(&self.root, "style", &rest.join("; "));
    }
  }

  /// Manejador delegado de eventos de la página.
  ///
  /// - click dentro de `[data-action="open"]` → abre el proyecto de la tarjeta
  /// - click en el fondo del modal o en `.modal-close` → cierra
  /// - tecla `Escape` → cierra
  pub fn handle_event(&mut self, surface: &mut S, event: &UiEvent<S::Handle>) -> EventOutcome {
    match event {
      UiEvent::Click { target } => self.handle_click(surface, target),
      UiEvent::KeyDown { key } if key == ESCAPE_KEY => {
        self.close_detail(surface);
        EventOutcome::Closed
      }
      _ => EventOutcome::Ignored,
    }
  }

  fn handle_click(&mut self, surface: &mut S, target: &S::Handle) -> EventOutcome {
    if let Some(trigger) = surface.closest(target, OPEN_TRIGGER) {
      let Some(id) = surface.closest(&trigger, CARD).and_then(|card| surface.attribute(&card, "data-id"))
      else {
        return EventOutcome::Ignored;
      };
      let id = ProjectId::from(id);
      return match self.open_detail(surface, &id) {
        Ok(_) => EventOutcome::Opened(id),
        Err(_) => EventOutcome::NotFound(id),
      };
    }

    let on_backdrop = *target == self.anchors.modal;
    if on_backdrop || surface.closest(target, Anchor::ModalClose.matcher()).is_some() {
      self.close_detail(surface);
      return EventOutcome::Closed;
    }

    EventOutcome::Ignored
  }

  // -------- QUERY (read) --------

  pub fn state(&self) -> &ModalState {
    &self.state
  }

  /// Id del proyecto abierto en el modal.
  pub fn selection(&self) -> Option<&ProjectId> {
    self.state.selection()
  }

  pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
    self.projects.get(id)
  }

  /// Proyectos en orden de visualización.
  pub fn projects(&self) -> impl Iterator<Item = &ProjectRecord> {
    self.projects.values()
  }

  pub fn len(&self) -> usize {
    self.projects.len()
  }

  pub fn is_empty(&self) -> bool {
    self.projects.is_empty()
  }
}
