use folio_core::domain::ProjectRecord;
use serde::Serialize;

/// Proyecto tal como lo muestra `folio list --json`.
#[derive(Debug, Serialize)]
pub struct ProjectSummaryDto {
  pub id: String,
  pub title: String,
  pub subtitle: String,
  pub tech: Vec<String>,
  pub live: Option<String>,
  pub code: Option<String>,
  pub design: Option<String>,
}

impl From<&ProjectRecord> for ProjectSummaryDto {
  fn from(p: &ProjectRecord) -> Self {
    ProjectSummaryDto {
      id: p.id().to_string(),
      title: p.title().to_string(),
      subtitle: p.subtitle().to_string(),
      tech: p.tech().to_vec(),
      live: p.live().map(str::to_string),
      code: p.code().map(str::to_string),
      design: p.design().map(str::to_string),
    }
  }
}
