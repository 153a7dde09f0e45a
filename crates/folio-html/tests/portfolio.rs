use folio_core::domain::{Catalog, ProjectConfig, ProjectId, ProjectRecord, SkillConfig, Theme};
use folio_core::events::{EventOutcome, UiEvent};
use folio_core::ports::{Anchor, KeyValueStore, Matcher, RenderSurface};
use folio_core::services::{ModalState, PortfolioView, SiteApp, THEME_KEY};
use folio_core::view::{Element, Node};
use folio_core::CoreError;
use folio_html::{Document, NodeId, ShellMeta};
use folio_storage::MemoryStore;
use pretty_assertions::assert_eq;

fn shell() -> Document {
  Document::portfolio(&ShellMeta { title: "Folio".into(), with_skills: true, ..Default::default() })
}

fn project(id: &str, title: &str) -> ProjectConfig {
  ProjectConfig { id: id.into(), title: title.into(), ..Default::default() }
}

fn anchor(doc: &Document, anchor: Anchor) -> NodeId {
  doc.find(anchor.matcher()).unwrap()
}

fn modal_hidden(doc: &Document) -> Option<&str> {
  doc.attr(anchor(doc, Anchor::Modal), "aria-hidden")
}

fn card_ids(doc: &Document) -> Vec<String> {
  doc
    .find_all(Matcher::Class("project-card"))
    .into_iter()
    .map(|card| doc.attr(card, "data-id").unwrap().to_string())
    .collect()
}

fn details_trigger(doc: &Document, id: &str) -> NodeId {
  let card = doc.find(Matcher::Attr { name: "data-id", value: id }).unwrap();
  doc.query(&card, Matcher::Attr { name: "data-action", value: "open" }).unwrap()
}

fn view_with(doc: &Document, projects: &[ProjectConfig]) -> PortfolioView<Document> {
  let mut view = PortfolioView::attach(doc).unwrap();
  for p in projects {
    view.append(ProjectRecord::from_config(p.clone())).unwrap();
  }
  view
}

#[test]
fn example_walkthrough() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[ProjectConfig { description: Some("x".repeat(150)), ..project("a", "T") }]);

  view.render_all(&mut doc);
  let excerpt = doc.find(Matcher::Class("project-excerpt")).unwrap();
  assert_eq!(doc.text_content(excerpt), format!("{}…", "x".repeat(120)));

  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  assert_eq!(doc.text_content(anchor(&doc, Anchor::ModalTitle)), "T");
  assert_eq!(modal_hidden(&doc), Some("false"));

  let before = doc.to_html();
  let err = view.open_detail(&mut doc, &ProjectId::from("missing")).unwrap_err();
  assert!(matches!(err, CoreError::ProjectNotFound(ref id) if id.as_str() == "missing"));
  assert_eq!(doc.to_html(), before);
  assert_eq!(view.state(), &ModalState::Open(ProjectId::from("a")));

  view.close_detail(&mut doc);
  assert_eq!(modal_hidden(&doc), Some("true"));
  assert_eq!(view.selection(), None);
}

#[test]
fn render_all_twice_does_not_duplicate() {
  let mut doc = shell();
  let view = view_with(&doc, &[project("b", "B"), project("a", "A"), project("c", "C")]);

  view.render_all(&mut doc);
  view.render_all(&mut doc);

  assert_eq!(card_ids(&doc), ["b", "a", "c"]);
}

#[test]
fn duplicate_id_is_rejected_and_collection_unchanged() {
  let doc = shell();
  let mut view = view_with(&doc, &[project("a", "First")]);

  let err = view.append(ProjectRecord::from_config(project("a", "Second"))).unwrap_err();

  assert!(matches!(err, CoreError::DuplicateProject(_)));
  assert_eq!(view.len(), 1);
  assert_eq!(view.get(&ProjectId::from("a")).unwrap().title(), "First");
}

#[test]
fn missing_modal_markup_is_fatal() {
  let doc = Document::from_view(
    &Element::new("html")
      .child(Element::new("body").child(Element::new("div").attr("id", "projects-grid")))
      .into(),
  );

  let err = PortfolioView::attach(&doc).err().unwrap();
  assert!(matches!(err, CoreError::MissingAnchor(Anchor::Modal)));
}

/// Página con el modal completo salvo el sub-elemento `missing`.
fn page_without(missing: Anchor) -> Document {
  let parts = [
    (Anchor::ModalClose, Element::new("button").class("modal-close")),
    (Anchor::ModalPreview, Element::new("div").class("modal-preview")),
    (Anchor::ModalTitle, Element::new("h3").attr("id", "modal-title")),
    (Anchor::ModalLead, Element::new("p").class("modal-lead")),
    (Anchor::ModalMeta, Element::new("div").class("modal-meta")),
    (Anchor::ModalDetails, Element::new("div").class("modal-details")),
    (Anchor::ModalLinks, Element::new("div").class("modal-links")),
  ];
  let modal = Element::new("div")
    .attr("id", "project-modal")
    .children(parts.into_iter().filter(|(anchor, _)| *anchor != missing).map(|(_, el)| Node::from(el)));

  Document::from_view(
    &Element::new("html")
      .child(Element::new("body").child(Element::new("div").attr("id", "projects-grid")).child(modal))
      .into(),
  )
}

#[test]
fn missing_modal_sub_element_is_fatal() {
  for missing in [
    Anchor::ModalTitle,
    Anchor::ModalLead,
    Anchor::ModalMeta,
    Anchor::ModalDetails,
    Anchor::ModalLinks,
    Anchor::ModalPreview,
    Anchor::ModalClose,
  ] {
    let err = PortfolioView::attach(&page_without(missing)).err().unwrap();
    assert!(matches!(err, CoreError::MissingAnchor(a) if a == missing), "{missing}: got {err}");
  }
}

#[test]
fn complete_modal_markup_attaches() {
  assert!(PortfolioView::attach(&page_without(Anchor::Skills)).is_ok());
}

#[test]
fn open_then_close_restores_closed_state_and_scroll() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A")]);
  let root = doc.root_id();

  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  assert_eq!(doc.attr(root, "style"), Some("overflow: hidden"));

  view.close_detail(&mut doc);
  view.close_detail(&mut doc);

  assert_eq!(view.state(), &ModalState::Closed);
  assert_eq!(doc.attr(root, "style"), None);
  assert_eq!(modal_hidden(&doc), Some("true"));
}

#[test]
fn scroll_lock_keeps_other_root_styles() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A")]);
  let root = doc.root_id();
  doc.set_attribute(&root, "style", "color: red; overflow: auto");

  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  assert_eq!(doc.attr(root, "style"), Some("color: red; overflow: hidden"));

  view.close_detail(&mut doc);
  assert_eq!(doc.attr(root, "style"), Some("color: red"));
}

#[test]
fn reopening_repopulates_without_close() {
  let mut doc = shell();
  let mut view = view_with(
    &doc,
    &[
      ProjectConfig { tech: Some(vec!["Rust".into()]), ..project("a", "A") },
      ProjectConfig { year: Some("2023".into()), ..project("b", "B") },
    ],
  );

  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  view.open_detail(&mut doc, &ProjectId::from("b")).unwrap();

  assert_eq!(view.selection().map(ProjectId::as_str), Some("b"));
  assert_eq!(doc.text_content(anchor(&doc, Anchor::ModalTitle)), "B");
  assert_eq!(doc.text_content(anchor(&doc, Anchor::ModalMeta)), "Year: 2023");
}

#[test]
fn repeated_renders_do_not_grow_the_document() {
  let mut doc = shell();
  let mut view = view_with(
    &doc,
    &[ProjectConfig { features: Some(vec!["One".into(), "Two".into()]), ..project("a", "A") }, project("b", "B")],
  );

  view.render_all(&mut doc);
  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  view.open_detail(&mut doc, &ProjectId::from("b")).unwrap();
  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  let size = doc.arena_len();

  for _ in 0..20 {
    view.render_all(&mut doc);
    view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
    view.open_detail(&mut doc, &ProjectId::from("b")).unwrap();
  }

  assert_eq!(doc.arena_len(), size);
}

#[test]
fn opening_twice_is_idempotent() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[ProjectConfig { features: Some(vec!["One".into()]), ..project("a", "A") }]);

  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();
  let first = doc.to_html();
  view.open_detail(&mut doc, &ProjectId::from("a")).unwrap();

  assert_eq!(doc.to_html(), first);
}

#[test]
fn links_block_precedence() {
  let mut doc = shell();
  let mut view = view_with(
    &doc,
    &[
      ProjectConfig {
        live: Some("https://live.example".into()),
        notice: Some("Private".into()),
        ..project("both", "Both")
      },
      project("neither", "Neither"),
    ],
  );
  let links = anchor(&doc, Anchor::ModalLinks);

  view.open_detail(&mut doc, &ProjectId::from("both")).unwrap();
  assert_eq!(doc.text_content(links), "Live Demo");

  view.open_detail(&mut doc, &ProjectId::from("neither")).unwrap();
  assert!(doc.children(links).is_empty());
}

#[test]
fn click_on_details_opens_the_card_project() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A"), project("b", "B")]);
  view.render_all(&mut doc);

  let trigger = details_trigger(&doc, "b");
  let label = doc.children(trigger)[0];
  let outcome = view.handle_event(&mut doc, &UiEvent::click(label));

  assert_eq!(outcome, EventOutcome::Opened(ProjectId::from("b")));
  assert_eq!(doc.text_content(anchor(&doc, Anchor::ModalTitle)), "B");
}

#[test]
fn click_elsewhere_on_card_is_ignored() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A")]);
  view.render_all(&mut doc);

  let card = doc.find(Matcher::Class("project-card")).unwrap();
  let heading = doc.query(&card, Matcher::Tag("h3")).unwrap();

  assert_eq!(view.handle_event(&mut doc, &UiEvent::click(heading)), EventOutcome::Ignored);
  assert_eq!(view.state(), &ModalState::Closed);
}

#[test]
fn dismissal_signals_close_the_modal() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A")]);
  let id = ProjectId::from("a");
  let modal = anchor(&doc, Anchor::Modal);
  let close = anchor(&doc, Anchor::ModalClose);
  let title = anchor(&doc, Anchor::ModalTitle);

  view.open_detail(&mut doc, &id).unwrap();
  assert_eq!(view.handle_event(&mut doc, &UiEvent::escape()), EventOutcome::Closed);

  view.open_detail(&mut doc, &id).unwrap();
  assert_eq!(view.handle_event(&mut doc, &UiEvent::click(modal)), EventOutcome::Closed);

  view.open_detail(&mut doc, &id).unwrap();
  assert_eq!(view.handle_event(&mut doc, &UiEvent::click(close)), EventOutcome::Closed);

  // click dentro del diálogo, fuera del botón: no es el fondo
  view.open_detail(&mut doc, &id).unwrap();
  assert_eq!(view.handle_event(&mut doc, &UiEvent::click(title)), EventOutcome::Ignored);
  assert!(view.state().is_open());

  assert_eq!(view.handle_event(&mut doc, &UiEvent::key("Enter")), EventOutcome::Ignored);
}

#[test]
fn stale_card_click_reports_not_found() {
  let mut doc = shell();
  let mut view = view_with(&doc, &[project("a", "A")]);
  let grid = anchor(&doc, Anchor::Grid);
  // tarjeta pintada por otro medio, con un id que la vista no conoce
  let ghost = ProjectRecord::from_config(project("ghost", "Ghost")).summary_view();
  doc.append_view(&grid, &ghost);

  let trigger = details_trigger(&doc, "ghost");
  let outcome = view.handle_event(&mut doc, &UiEvent::click(trigger));

  assert_eq!(outcome, EventOutcome::NotFound(ProjectId::from("ghost")));
  assert_eq!(view.state(), &ModalState::Closed);
}

#[test]
fn injected_content_is_escaped_in_page() {
  let mut doc = shell();
  let mut view = view_with(
    &doc,
    &[ProjectConfig {
      subtitle: Some("<script>alert(1)</script>".into()),
      live: Some("javascript:alert(1)".into()),
      ..project("x", "<b>bold</b>")
    }],
  );
  view.render_all(&mut doc);
  view.open_detail(&mut doc, &ProjectId::from("x")).unwrap();

  let html = doc.to_html();
  assert!(!html.contains("<script>alert"));
  assert!(!html.contains("<b>bold</b>"));
  assert!(!html.contains("href=\"javascript:"));
  assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
}

// -------- SiteApp --------

fn catalog() -> Catalog {
  Catalog {
    projects: vec![project("a", "A"), project("b", "B")],
    skills: vec![
      SkillConfig { name: "Rust".into(), level: 80 },
      SkillConfig { name: "CSS".into(), level: 95 },
    ],
  }
}

#[test]
fn app_start_renders_everything() {
  let mut app = SiteApp::mount(shell(), MemoryStore::new(), catalog()).unwrap();
  app.start();

  let doc = app.surface();
  assert_eq!(card_ids(doc), ["a", "b"]);
  assert_eq!(doc.find_all(Matcher::Class("skill-bar")).len(), 2);
  assert_eq!(doc.attr(doc.root_id(), "data-theme"), Some("light"));
  assert!(doc.is_observed(anchor(doc, Anchor::Skills)));
}

#[test]
fn app_rejects_duplicate_catalog_ids() {
  let mut bad = catalog();
  bad.projects.push(project("a", "Again"));

  let err = SiteApp::mount(shell(), MemoryStore::new(), bad).err().unwrap();
  assert!(matches!(err, CoreError::DuplicateProject(_)));
}

#[test]
fn theme_toggle_persists_and_applies() {
  let mut app = SiteApp::mount(shell(), MemoryStore::with(THEME_KEY, "dark"), catalog()).unwrap();
  app.start();
  assert_eq!(app.theme(), Theme::Dark);

  let button = app.surface().find(Matcher::Attr { name: "data-action", value: "toggle-theme" }).unwrap();
  let outcome = app.dispatch(&UiEvent::click(button)).unwrap();

  assert_eq!(outcome, EventOutcome::ThemeChanged(Theme::Light));
  assert_eq!(app.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
  let doc = app.surface();
  assert_eq!(doc.attr(doc.root_id(), "data-theme"), Some("light"));
  assert_eq!(doc.attr(button, "aria-pressed"), Some("false"));
}

#[test]
fn unknown_stored_theme_falls_back_to_default() {
  let app = SiteApp::mount(shell(), MemoryStore::with(THEME_KEY, "sepia"), catalog()).unwrap();
  assert_eq!(app.theme(), Theme::Light);
}

#[test]
fn skills_reveal_at_most_once() {
  let mut app = SiteApp::mount(shell(), MemoryStore::new(), catalog()).unwrap();
  app.start();
  let section = anchor(app.surface(), Anchor::Skills);

  assert_eq!(app.dispatch(&UiEvent::Intersect { target: section }).unwrap(), EventOutcome::SkillsRevealed);
  assert_eq!(app.dispatch(&UiEvent::Intersect { target: section }).unwrap(), EventOutcome::Ignored);

  let doc = app.surface();
  let widths: Vec<_> =
    doc.find_all(Matcher::Class("skill-bar")).into_iter().map(|bar| doc.attr(bar, "style").unwrap()).collect();
  assert_eq!(widths, ["width: 80%", "width: 95%"]);
  assert!(!doc.is_observed(section));
  assert!(app.skills().is_revealed());
}

#[test]
fn app_routes_card_clicks_and_tears_down() {
  let mut app = SiteApp::mount(shell(), MemoryStore::new(), catalog()).unwrap();
  app.start();

  let trigger = details_trigger(app.surface(), "a");
  assert_eq!(app.dispatch(&UiEvent::click(trigger)).unwrap(), EventOutcome::Opened(ProjectId::from("a")));
  assert_eq!(app.dispatch(&UiEvent::escape()).unwrap(), EventOutcome::Closed);

  let (doc, _store) = app.teardown();
  assert!(doc.observed().is_empty());
  assert_eq!(modal_hidden(&doc), Some("true"));
}

#[test]
fn static_reveal_sets_widths_once() {
  let mut app = SiteApp::mount(shell(), MemoryStore::new(), catalog()).unwrap();
  app.start();
  let section = anchor(app.surface(), Anchor::Skills);

  assert!(app.reveal_skills());
  assert!(!app.reveal_skills());
  assert_eq!(app.dispatch(&UiEvent::Intersect { target: section }).unwrap(), EventOutcome::Ignored);

  let doc = app.surface();
  let widths: Vec<_> =
    doc.find_all(Matcher::Class("skill-bar")).into_iter().map(|bar| doc.attr(bar, "style").unwrap()).collect();
  assert_eq!(widths, ["width: 80%", "width: 95%"]);
  assert!(!doc.is_observed(section));
}
