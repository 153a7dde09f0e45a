//! Vistas de un [`ProjectRecord`]: la tarjeta resumida del grid y el
//! contenido del modal de detalle.

use std::borrow::Cow;

use crate::domain::project::ProjectRecord;
use crate::view::{Element, Node};

/// Longitud máxima (en caracteres) del extracto de la tarjeta.
pub const EXCERPT_LIMIT: usize = 120;

/// Marcador añadido al extracto cuando la descripción se recorta.
pub const TRUNCATION_MARKER: &str = "…";

/// Extracto de la descripción para la tarjeta.
///
/// La decisión de recortar se toma sobre la longitud de la descripción
/// completa; después se corta a [`EXCERPT_LIMIT`] caracteres y sólo entonces
/// se añade el marcador.
pub fn excerpt(description: &str) -> Cow<'_, str> {
  if description.chars().count() <= EXCERPT_LIMIT {
    return Cow::Borrowed(description);
  }

  let mut out: String = description.chars().take(EXCERPT_LIMIT).collect();
  out.push_str(TRUNCATION_MARKER);
  Cow::Owned(out)
}

fn external_link(class: &str, href: &str, label: &str) -> Node {
  Element::new("a")
    .class(class)
    .attr("target", "_blank")
    .attr("rel", "noopener noreferrer")
    .attr("href", href)
    .text(label)
    .into()
}

/// Contenido del modal para un proyecto, una entrada por cada ancla fija.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
  pub title: String,
  pub lead: String,
  pub meta: Vec<Node>,
  pub details: Vec<Node>,
  pub links: Vec<Node>,
  pub preview: Node,
}

impl ProjectRecord {
  /// Tarjeta del grid.
  ///
  /// Contiene siempre exactamente un enlace "Details" (`data-action="open"`),
  /// que es el único disparador del modal. "Live", "Code" y "Design" sólo
  /// aparecen si el registro tiene el enlace correspondiente.
  pub fn summary_view(&self) -> Node {
    let mut actions: Vec<Node> = vec![
      Element::new("a")
        .class("btn-mini link")
        .attr("data-action", "open")
        .attr("href", "#")
        .attr("role", "button")
        .text("Details")
        .into(),
    ];
    if let Some(live) = self.live() {
      actions.push(external_link("btn-mini", live, "Live"));
    }
    if let Some(code) = self.code() {
      actions.push(external_link("btn-mini", code, "Code"));
    }
    if let Some(design) = self.design() {
      actions.push(external_link("btn-mini", design, "Design"));
    }

    Element::new("article")
      .class("project-card")
      .attr("data-id", self.id().as_str())
      .child(Element::new("img").attr("src", self.image()).attr("alt", format!("{} screenshot", self.title())))
      .child(Element::new("h3").text(self.title()))
      .child(Element::new("div").class("project-meta").text(self.subtitle()))
      .child(Element::new("p").class("project-excerpt").text(excerpt(self.description())))
      .child(Element::new("div").class("project-actions").children(actions))
      .into()
  }

  /// Contenido del modal de detalle.
  pub fn detail_view(&self) -> DetailView {
    DetailView {
      title: self.title().to_string(),
      lead: self.subtitle().to_string(),
      meta: self.meta_lines(),
      details: self.detail_sections(),
      links: self.detail_links(),
      preview: Element::new("img")
        .attr("src", self.image())
        .attr("alt", format!("{} preview", self.title()))
        .into(),
    }
  }

  // Year, Tech, Role, Duration; una línea vacía no se pinta.
  fn meta_lines(&self) -> Vec<Node> {
    let tech = self.tech().join(", ");
    [("Year", self.year()), ("Tech", tech.as_str()), ("Role", self.role()), ("Duration", self.duration())]
      .into_iter()
      .filter(|(_, value)| !value.is_empty())
      .map(|(label, value)| {
        Element::new("p")
          .child(Element::new("strong").text(format!("{label}:")))
          .text(format!(" {value}"))
          .into()
      })
      .collect()
  }

  fn detail_sections(&self) -> Vec<Node> {
    let mut out: Vec<Node> = vec![Element::new("p").class("modal-description").text(self.description()).into()];

    if !self.features().is_empty() {
      out.push(Element::new("h4").text("Key features").into());
      out.push(
        Element::new("ul")
          .class("modal-features")
          .children(self.features().iter().map(|f| Element::new("li").text(f.as_str()).into()))
          .into(),
      );
    }
    if !self.challenges().is_empty() {
      out.push(Element::new("h4").text("Challenges").into());
      out.push(Element::new("p").class("modal-challenges").text(self.challenges()).into());
    }
    if !self.results().is_empty() {
      out.push(Element::new("h4").text("Results").into());
      out.push(Element::new("p").class("modal-results").text(self.results()).into());
    }
    out
  }

  // Demo en vivo, si no el aviso, si no nada; después código y diseño.
  fn detail_links(&self) -> Vec<Node> {
    let mut out = Vec::new();

    if let Some(live) = self.live() {
      out.push(external_link("btn-mini link", live, "Live Demo"));
    } else if let Some(notice) = self.notice() {
      out.push(Element::new("span").class("modal-notice").text(notice).into());
    }
    if let Some(code) = self.code() {
      out.push(external_link("btn-mini", code, "Source Code"));
    }
    if let Some(design) = self.design() {
      out.push(external_link("btn-mini", design, "Design"));
    }
    out
  }
}
