//! Veterinarian entity with its specialty set.

use serde::Serialize;

use super::identity::EntityId;
use super::specialty::Specialty;

/// A veterinarian and the specialties assigned to them.
///
/// The specialty store is insertion-ordered with identity-based dedup;
/// reads project it as a freshly sorted list so callers can never observe
/// or disturb the storage order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vet {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    specialties: Vec<Specialty>,
}

impl Vet {
    /// Assigns a specialty. Assigning the same stored specialty again
    /// (matching identifier) is a no-op.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        let present = self
            .specialties
            .iter()
            .any(|s| s.id.same_record(specialty.id));
        if !present {
            self.specialties.push(specialty);
        }
    }

    /// The vet's specialties sorted ascending by name.
    ///
    /// Allocates a new list on every call; mutating the result leaves the
    /// vet untouched.
    pub fn specialties(&self) -> Vec<Specialty> {
        let mut sorted = self.specialties.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}
