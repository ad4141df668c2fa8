//! Veterinary specialty reference value.

use serde::Serialize;

use super::identity::EntityId;

/// A veterinary specialty (radiology, surgery, ...).
///
/// Referenced by [`super::Vet`], never owned by it: the specialty's own
/// lifecycle is managed by a lookup collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Specialty {
    pub id: EntityId,
    pub name: String,
}

impl Specialty {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
