//! Marcado fijo de la página sobre el que trabaja el núcleo.

use folio_core::view::{Element, Node};

use crate::document::Document;

/// Datos de cabecera de la página.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellMeta {
  pub title: String,
  pub owner: String,
  pub tagline: String,
  pub stylesheet: String,
  /// Incluir la sección `#skills`.
  pub with_skills: bool,
}

fn modal() -> Element {
  Element::new("div")
    .attr("id", "project-modal")
    .class("modal")
    .attr("role", "dialog")
    .attr("aria-modal", "true")
    .attr("aria-labelledby", "modal-title")
    .attr("aria-hidden", "true")
    .child(
      Element::new("div")
        .class("modal-dialog")
        .child(Element::new("button").attr("type", "button").class("modal-close").attr("aria-label", "Close").text("×"))
        .child(Element::new("div").class("modal-preview"))
        .child(
          Element::new("div")
            .class("modal-content")
            .child(Element::new("h3").attr("id", "modal-title"))
            .child(Element::new("p").class("modal-lead"))
            .child(Element::new("div").class("modal-meta"))
            .child(Element::new("div").class("modal-details"))
            .child(Element::new("div").class("modal-links")),
        ),
    )
}

fn header(meta: &ShellMeta) -> Element {
  let heading = if meta.owner.is_empty() { meta.title.as_str() } else { meta.owner.as_str() };
  let mut header = Element::new("header").class("site-header").child(Element::new("h1").text(heading));
  if !meta.tagline.is_empty() {
    header = header.child(Element::new("p").class("tagline").text(meta.tagline.as_str()));
  }
  header.child(
    Element::new("button")
      .attr("type", "button")
      .class("theme-toggle")
      .attr("data-action", "toggle-theme")
      .attr("aria-pressed", "false")
      .text("Toggle theme"),
  )
}

/// Vista completa de la página, con el grid y el modal vacíos.
pub fn portfolio_shell(meta: &ShellMeta) -> Node {
  let mut main = Element::new("main").child(
    Element::new("section")
      .attr("id", "projects")
      .child(Element::new("h2").text("Projects"))
      .child(Element::new("div").attr("id", "projects-grid").class("projects-grid")),
  );
  if meta.with_skills {
    main = main.child(
      Element::new("section")
        .attr("id", "skills")
        .child(Element::new("h2").text("Skills"))
        .child(Element::new("div").class("skills-list")),
    );
  }

  Element::new("html")
    .attr("lang", "en")
    .child(
      Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("meta").attr("name", "viewport").attr("content", "width=device-width, initial-scale=1"))
        .child(Element::new("title").text(meta.title.as_str()))
        .child(Element::new("link").attr("rel", "stylesheet").attr("href", meta.stylesheet.as_str())),
    )
    .child(Element::new("body").child(header(meta)).child(main).child(modal()))
    .into()
}

impl Document {
  /// Documento listo para montar la aplicación.
  pub fn portfolio(meta: &ShellMeta) -> Self {
    Document::from_view(&portfolio_shell(meta))
  }
}
