use anyhow::Context;
use folio_config::SiteConfig;
use folio_core::domain::{Catalog, ProjectId, Theme};
use folio_core::ports::KeyValueStore;
use folio_core::services::{SiteApp, ThemeToggle};
use folio_html::{Document, ShellMeta};
use folio_storage::LocalStore;
use tracing::info;

use crate::cli::{Command, ThemeAction};
use crate::config::ProjectSummaryDto;

pub fn execute(command: Command) -> anyhow::Result<()> {
  match command {
    Command::Render { out, open } => {
      let site = SiteConfig::load().context("loading [site] config")?;
      let catalog = folio_config::load_catalog().context("loading project catalog")?;
      let store = LocalStore::new_from_config().context("opening local store")?;

      let html = render_page(&site, catalog, store, open.as_deref())?;

      let path = out.unwrap_or_else(|| site.output_file());
      folio_fs::atomic_write_creating_dirs(&path, &html).with_context(|| format!("writing {}", path.display()))?;
      info!(path = %path.display(), bytes = html.len(), "page written");
      Ok(())
    }

    Command::List { json } => {
      let catalog = folio_config::load_catalog().context("loading project catalog")?;
      let projects: Vec<ProjectSummaryDto> = catalog.records().map(|p| ProjectSummaryDto::from(&p)).collect();

      if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
      } else {
        for p in &projects {
          println!("{:<24} {}", p.id, p.title);
        }
      }
      Ok(())
    }

    Command::Theme { action } => {
      let mut store = LocalStore::new_from_config().context("opening local store")?;
      let mut toggle = ThemeToggle::load(&store)?;
      // La página no existe fuera de `render`; basta un documento vacío.
      let mut scratch = Document::new();

      let theme = match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => toggle.current(),
        ThemeAction::Toggle => toggle.toggle(&mut store, &mut scratch)?,
        ThemeAction::Set { theme } => toggle.set(Theme::from(theme), &mut store, &mut scratch)?,
      };
      println!("{theme}");
      Ok(())
    }
  }
}

/// Monta la aplicación sobre la página vacía y devuelve el HTML final.
///
/// Las barras de habilidades salen ya con su ancho final.
///
/// Con `open` la página se genera con el modal abierto sobre ese proyecto; un
/// id desconocido es un error.
pub fn render_page<K: KeyValueStore>(
  site: &SiteConfig,
  catalog: Catalog,
  store: K,
  open: Option<&str>,
) -> anyhow::Result<String> {
  let meta = ShellMeta {
    title: site.title.clone(),
    owner: site.owner.clone(),
    tagline: site.tagline.clone(),
    stylesheet: site.stylesheet.clone(),
    with_skills: !catalog.skills.is_empty(),
  };

  let mut app = SiteApp::mount(Document::portfolio(&meta), store, catalog)?;
  app.start();
  // La página sale sin script: nadie va a disparar la animación.
  app.reveal_skills();
  if let Some(id) = open {
    app.open(&ProjectId::from(id))?;
  }

  let (doc, _store) = app.teardown();
  Ok(doc.to_html())
}
