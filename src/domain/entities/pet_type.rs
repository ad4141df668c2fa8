//! Pet type reference value (cat, dog, ...).

use serde::Serialize;

use super::identity::EntityId;

/// A kind of pet, referenced by [`super::Pet`].
///
/// Reference data supplied by a lookup collaborator; the clinic core only
/// associates types with pets and never mints or validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PetType {
    pub id: EntityId,
    pub name: String,
}

impl PetType {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
