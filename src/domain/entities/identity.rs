//! Record identity shared by all clinic entities.

use serde::{Deserialize, Serialize};

/// Identity of a stored record.
///
/// A record starts out with no identifier ("new") and receives one exactly
/// once, when the persistence layer stores it. That transition is one-way:
/// an assigned identifier is never changed or cleared, and its presence is
/// the only signal distinguishing stored records from unsaved ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Option<i32>);

impl EntityId {
    /// Identity of a record that has not been stored yet.
    pub const fn unassigned() -> Self {
        Self(None)
    }

    /// Identity of a record already stored under `id`.
    pub const fn assigned(id: i32) -> Self {
        Self(Some(id))
    }

    /// True while no identifier has been assigned.
    pub const fn is_new(&self) -> bool {
        self.0.is_none()
    }

    pub const fn value(&self) -> Option<i32> {
        self.0
    }

    /// Assigns the identifier. Assignment happens once; later calls keep
    /// the first value.
    pub fn assign(&mut self, id: i32) {
        self.0.get_or_insert(id);
    }

    /// Whether two identities denote the same stored record.
    ///
    /// Unsaved records carry no identity yet, so they are never the same
    /// record as anything, themselves included.
    pub fn same_record(&self, other: EntityId) -> bool {
        matches!((self.0, other.0), (Some(a), Some(b)) if a == b)
    }
}
