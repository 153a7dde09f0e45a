use crate::domain::ProjectId;

/// Estado de visibilidad del modal de detalle.
///
/// Como mucho hay un proyecto abierto; cerrar borra la selección.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
  #[default]
  Closed,
  Open(ProjectId),
}

impl ModalState {
  pub fn is_open(&self) -> bool {
    matches!(self, ModalState::Open(_))
  }

  /// Id del proyecto mostrado, si lo hay.
  pub fn selection(&self) -> Option<&ProjectId> {
    match self {
      ModalState::Open(id) => Some(id),
      ModalState::Closed => None,
    }
  }
}
