//! Pet entity owning its visit history.

use chrono::NaiveDate;
use serde::Serialize;

use super::identity::EntityId;
use super::pet_type::PetType;
use super::visit::Visit;

/// A pet belonging to exactly one owner.
///
/// `name`, `birth_date`, and `kind` are required for a valid record but
/// enforced at validation time (see [`crate::domain::validation`]), so a
/// partially filled pet can exist while a form is being corrected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pet {
    pub id: EntityId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub kind: Option<PetType>,
    visits: Vec<Visit>,
}

impl Pet {
    /// Creates an unsaved pet with the given name and no visit history.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a visit, preserving insertion order.
    ///
    /// Re-adding a visit that is already stored on this pet (same assigned
    /// identifier) leaves the history untouched. Unsaved visits carry no
    /// identity yet and always append, so two distinct visits with
    /// identical field values both remain.
    pub fn add_visit(&mut self, visit: Visit) {
        let present = self.visits.iter().any(|v| v.id.same_record(visit.id));
        if !present {
            self.visits.push(visit);
        }
    }

    /// Visit history in insertion order. Empty for a pet with no visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Live access to the visit history, for collaborators that attach
    /// already-stored visits or assign identifiers on save. Ordinary
    /// mutation goes through [`Pet::add_visit`].
    pub fn visits_mut(&mut self) -> &mut Vec<Visit> {
        &mut self.visits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_described(description: &str) -> Visit {
        let mut visit = Visit::new();
        visit.description = description.to_string();
        visit
    }

    #[test]
    fn test_add_visit_appends() {
        let mut pet = Pet::named("Max");
        pet.add_visit(visit_described("Annual vaccination"));

        assert_eq!(pet.visits().len(), 1);
        assert_eq!(pet.visits()[0].description, "Annual vaccination");
    }

    #[test]
    fn test_add_visit_keeps_insertion_order() {
        let mut pet = Pet::named("Max");
        pet.add_visit(visit_described("Vaccination"));
        pet.add_visit(visit_described("General check-up"));
        pet.add_visit(visit_described("Weight control"));

        let descriptions: Vec<_> = pet.visits().iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            ["Vaccination", "General check-up", "Weight control"]
        );
    }

    #[test]
    fn test_add_visit_dedups_same_stored_record() {
        let mut pet = Pet::named("Max");
        let mut visit = visit_described("Vaccination");
        visit.id.assign(1);

        pet.add_visit(visit.clone());
        pet.add_visit(visit);

        assert_eq!(pet.visits().len(), 1);
    }

    #[test]
    fn test_add_visit_keeps_distinct_unsaved_visits_with_equal_fields() {
        let mut pet = Pet::named("Max");
        pet.add_visit(visit_described("Vaccination"));
        pet.add_visit(visit_described("Vaccination"));

        assert_eq!(pet.visits().len(), 2);
    }

    #[test]
    fn test_visits_empty_for_fresh_pet() {
        let pet = Pet::named("Max");
        assert!(pet.visits().is_empty());
    }

    #[test]
    fn test_named_pet_is_new() {
        let pet = Pet::named("Max");
        assert!(pet.id.is_new());
        assert!(pet.birth_date.is_none());
        assert!(pet.kind.is_none());
    }
}
