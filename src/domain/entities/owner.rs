//! Owner aggregate root: contact details plus the owned pet collection.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::json;
use validator::Validate;

use crate::error::ClinicError;

use super::identity::EntityId;
use super::pet::Pet;
use super::visit::Visit;

/// Compiled pattern for telephone numbers: exactly ten digits.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// A pet owner and the pets registered under them.
///
/// The pet list is live, in insertion order: the persistence collaborator
/// attaches already-stored pets to it directly, while new pets go through
/// [`Owner::add_pet`]. An owner exclusively owns its pets; a pet never
/// outlives its owner or belongs to two owners.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct Owner {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    #[validate(regex(path = "*TELEPHONE_REGEX", message = "must be a 10-digit number"))]
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Adds a pet that has not been stored yet.
    ///
    /// A pet that already carries an identifier is presumed linked through
    /// the stored relationship, and the call leaves the list untouched.
    pub fn add_pet(&mut self, pet: Pet) {
        if pet.id.is_new() {
            self.pets.push(pet);
        }
    }

    /// Finds a pet by name, including pets not stored yet.
    pub fn pet_by_name(&self, name: &str) -> Option<&Pet> {
        self.pet_by_name_filtered(name, false)
    }

    /// Finds the first pet whose name matches `name` case-insensitively,
    /// in insertion order. With `ignore_new` set, pets that have not been
    /// stored yet never match.
    pub fn pet_by_name_filtered(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets
            .iter()
            .filter(|pet| !ignore_new || !pet.id.is_new())
            .find(|pet| pet.name.to_lowercase() == wanted)
    }

    /// Finds a stored pet by identifier. Pets without an identifier never
    /// match, whatever `id` is.
    pub fn pet(&self, id: i32) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id.value() == Some(id))
    }

    fn pet_mut(&mut self, id: i32) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id.value() == Some(id))
    }

    /// Appends `visit` to the history of the stored pet identified by
    /// `pet_id`.
    ///
    /// Both arguments are optional so that unresolved form input can be
    /// rejected here, with the aggregate left unchanged:
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidArgument`] when `pet_id` is absent,
    /// when `visit` is absent, or when no stored pet on this owner has the
    /// given identifier.
    pub fn add_visit(
        &mut self,
        pet_id: Option<i32>,
        visit: Option<Visit>,
    ) -> Result<(), ClinicError> {
        let pet_id = pet_id.ok_or_else(|| {
            ClinicError::invalid_argument("Pet identifier must not be null", json!({}))
        })?;
        let visit = visit.ok_or_else(|| {
            ClinicError::invalid_argument("Visit must not be null", json!({ "pet_id": pet_id }))
        })?;
        let pet = self.pet_mut(pet_id).ok_or_else(|| {
            ClinicError::invalid_argument("Invalid Pet identifier", json!({ "pet_id": pet_id }))
        })?;

        pet.add_visit(visit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_owner() -> Owner {
        Owner {
            id: EntityId::assigned(1),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "1234567890".to_string(),
            pets: Vec::new(),
        }
    }

    fn stored_pet(id: i32, name: &str) -> Pet {
        let mut pet = Pet::named(name);
        pet.id.assign(id);
        pet
    }

    #[test]
    fn test_add_pet_appends_new_pet() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert_eq!(owner.pets.len(), 1);
        assert_eq!(owner.pets[0].name, "Max");
    }

    #[test]
    fn test_add_pet_ignores_stored_pet() {
        let mut owner = sample_owner();
        owner.add_pet(stored_pet(10, "Bella"));

        assert!(owner.pets.is_empty());
    }

    #[test]
    fn test_add_pet_keeps_insertion_order() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));
        owner.add_pet(Pet::named("Bella"));
        owner.add_pet(Pet::named("Charlie"));

        let names: Vec<_> = owner.pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Max", "Bella", "Charlie"]);
    }

    #[test]
    fn test_pet_by_name_exact_match() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert_eq!(owner.pet_by_name("Max").map(|p| p.name.as_str()), Some("Max"));
    }

    #[test]
    fn test_pet_by_name_ignores_case() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert_eq!(owner.pet_by_name("max").map(|p| p.name.as_str()), Some("Max"));
    }

    #[test]
    fn test_pet_by_name_misses_unknown_name() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert!(owner.pet_by_name("Bella").is_none());
    }

    #[test]
    fn test_pet_by_name_on_empty_owner() {
        let owner = sample_owner();
        assert!(owner.pet_by_name("Max").is_none());
    }

    #[test]
    fn test_pet_by_name_matches_new_pets_by_default() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        let found = owner.pet_by_name("Max").unwrap();
        assert!(found.id.is_new());
    }

    #[test]
    fn test_pet_by_name_filtered_equivalent_to_default_when_not_ignoring() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));
        owner.pets.push(stored_pet(5, "Bella"));

        for name in ["Max", "Bella", "missing"] {
            assert_eq!(
                owner.pet_by_name(name).map(|p| p.name.as_str()),
                owner.pet_by_name_filtered(name, false).map(|p| p.name.as_str()),
            );
        }
    }

    #[test]
    fn test_pet_by_name_filtered_skips_new_pets() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert!(owner.pet_by_name_filtered("Max", true).is_none());
    }

    #[test]
    fn test_pet_by_name_filtered_finds_stored_pets() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        let found = owner.pet_by_name_filtered("Max", true).unwrap();
        assert!(!found.id.is_new());
    }

    #[test]
    fn test_pet_by_id_matches_stored_pet() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        let found = owner.pet(5).unwrap();
        assert_eq!(found.id.value(), Some(5));
        assert_eq!(found.name, "Max");
    }

    #[test]
    fn test_pet_by_id_misses_unknown_id() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        assert!(owner.pet(10).is_none());
    }

    #[test]
    fn test_pet_by_id_never_matches_new_pets() {
        let mut owner = sample_owner();
        owner.add_pet(Pet::named("Max"));

        assert!(owner.pet(1).is_none());
    }

    #[test]
    fn test_pet_by_id_on_empty_owner() {
        let owner = sample_owner();
        assert!(owner.pet(5).is_none());
    }

    #[test]
    fn test_add_visit_appends_to_target_pet() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        let mut visit = Visit::new();
        visit.description = "Annual vaccination".to_string();
        owner.add_visit(Some(5), Some(visit)).unwrap();

        let pet = owner.pet(5).unwrap();
        assert_eq!(pet.visits().len(), 1);
        assert_eq!(pet.visits()[0].description, "Annual vaccination");
    }

    #[test]
    fn test_add_visit_rejects_missing_pet_id() {
        let mut owner = sample_owner();

        let err = owner.add_visit(None, Some(Visit::new())).unwrap_err();
        assert!(err.to_string().contains("Pet identifier must not be null"));
    }

    #[test]
    fn test_add_visit_rejects_missing_visit() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        let err = owner.add_visit(Some(5), None).unwrap_err();
        assert!(err.to_string().contains("Visit must not be null"));
    }

    #[test]
    fn test_add_visit_rejects_unknown_pet_id() {
        let mut owner = sample_owner();

        let err = owner.add_visit(Some(999), Some(Visit::new())).unwrap_err();
        assert!(err.to_string().contains("Invalid Pet identifier"));
    }

    #[test]
    fn test_failed_add_visit_leaves_graph_unchanged() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        owner.add_visit(Some(999), Some(Visit::new())).unwrap_err();

        assert!(owner.pet(5).unwrap().visits().is_empty());
    }

    #[test]
    fn test_add_visit_accumulates_in_order() {
        let mut owner = sample_owner();
        owner.pets.push(stored_pet(5, "Max"));

        for description in ["Vaccination", "General check-up", "Weight control"] {
            let mut visit = Visit::new();
            visit.description = description.to_string();
            owner.add_visit(Some(5), Some(visit)).unwrap();
        }

        let descriptions: Vec<_> = owner
            .pet(5)
            .unwrap()
            .visits()
            .iter()
            .map(|v| v.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            ["Vaccination", "General check-up", "Weight control"]
        );
    }

    #[test]
    fn test_telephone_validation() {
        let mut owner = sample_owner();
        assert!(owner.validate().is_ok());

        owner.telephone = "12345".to_string();
        assert!(owner.validate().is_err());

        owner.telephone = "12345abcde".to_string();
        assert!(owner.validate().is_err());
    }
}
