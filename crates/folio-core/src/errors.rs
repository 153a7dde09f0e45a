// crates/folio-core/src/errors.rs
use thiserror::Error;

use crate::domain::ProjectId;
use crate::ports::{Anchor, StoreError};

/// Error genérico del núcleo de Folio.
///
/// El binario lo mapea a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Se intentó añadir un proyecto con un id ya presente.
  #[error("duplicate project id '{0}': ids must be unique within the portfolio")]
  DuplicateProject(ProjectId),

  #[error("project not found: '{0}'")]
  ProjectNotFound(ProjectId),

  /// Falta un elemento fijo del marcado de la página.
  #[error("page markup is missing required element {0}")]
  MissingAnchor(Anchor),

  #[error("store error: {0}")]
  Store(#[from] StoreError),
}
