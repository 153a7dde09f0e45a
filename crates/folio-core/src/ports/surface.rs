use std::fmt;

use crate::view::Node;

/// Selector mínimo que el núcleo necesita para localizar elementos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher<'a> {
  Id(&'a str),
  Class(&'a str),
  Tag(&'a str),
  Attr { name: &'a str, value: &'a str },
}

impl fmt::Display for Matcher<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Matcher::Id(id) => write!(f, "#{id}"),
      Matcher::Class(class) => write!(f, ".{class}"),
      Matcher::Tag(tag) => write!(f, "{tag}"),
      Matcher::Attr { name, value } => write!(f, "[{name}=\"{value}\"]"),
    }
  }
}

/// Puntos fijos de la página que el núcleo resuelve al arrancar.
///
/// El marcado del modal tiene una forma fija; si falta cualquiera de sus
/// sub-elementos el núcleo no puede funcionar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
  /// Contenedor de las tarjetas (`#projects-grid`).
  Grid,
  Modal,
  ModalTitle,
  ModalLead,
  ModalMeta,
  ModalDetails,
  ModalLinks,
  ModalPreview,
  ModalClose,
  /// Sección opcional de habilidades.
  Skills,
}

impl Anchor {
  pub fn matcher(self) -> Matcher<'static> {
    match self {
      Anchor::Grid => Matcher::Id("projects-grid"),
      Anchor::Modal => Matcher::Id("project-modal"),
      Anchor::ModalTitle => Matcher::Id("modal-title"),
      Anchor::ModalLead => Matcher::Class("modal-lead"),
      Anchor::ModalMeta => Matcher::Class("modal-meta"),
      Anchor::ModalDetails => Matcher::Class("modal-details"),
      Anchor::ModalLinks => Matcher::Class("modal-links"),
      Anchor::ModalPreview => Matcher::Class("modal-preview"),
      Anchor::ModalClose => Matcher::Class("modal-close"),
      Anchor::Skills => Matcher::Id("skills"),
    }
  }
}

impl fmt::Display for Anchor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.matcher(), f)
  }
}

/// Port del sustrato de renderizado (DOM o equivalente).
///
/// Todas las operaciones son síncronas y no fallan: crear nodos y fijar
/// atributos siempre tiene éxito. Las búsquedas devuelven `None` si no hay
/// coincidencia y es el núcleo quien decide si eso es fatal.
pub trait RenderSurface {
  type Handle: Clone + PartialEq + fmt::Debug;

  /// Elemento raíz del documento (`<html>`).
  fn root(&self) -> Self::Handle;

  /// Primer descendiente de `scope` que cumple `matcher`, en orden de documento.
  fn query(&self, scope: &Self::Handle, matcher: Matcher<'_>) -> Option<Self::Handle>;

  fn query_all(&self, scope: &Self::Handle, matcher: Matcher<'_>) -> Vec<Self::Handle>;

  /// El propio `from` o su ancestro más cercano que cumple `matcher`.
  fn closest(&self, from: &Self::Handle, matcher: Matcher<'_>) -> Option<Self::Handle>;

  fn attribute(&self, at: &Self::Handle, name: &str) -> Option<String>;

  fn set_attribute(&mut self, at: &Self::Handle, name: &str, value: &str);

  fn remove_attribute(&mut self, at: &Self::Handle, name: &str);

  /// Reemplaza los hijos de `at` por un único nodo de texto.
  fn set_text(&mut self, at: &Self::Handle, text: &str);

  fn clear_children(&mut self, at: &Self::Handle);

  /// Monta `view` como último hijo de `parent` y devuelve el nodo creado.
  fn append_view(&mut self, parent: &Self::Handle, view: &Node) -> Self::Handle;

  /// Registra una observación de intersección sobre `at`. El adapter avisa
  /// con [`UiEvent::Intersect`](crate::events::UiEvent::Intersect).
  fn observe_intersection(&mut self, at: &Self::Handle);

  fn unobserve_intersection(&mut self, at: &Self::Handle);

  /// Vacía `at` y monta `views` en orden.
  fn replace_children(&mut self, at: &Self::Handle, views: &[Node]) {
    self.clear_children(at);
    for view in views {
      self.append_view(at, view);
    }
  }
}
