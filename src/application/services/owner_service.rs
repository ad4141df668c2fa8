//! Owner, pet, and visit registration service.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Owner, Pet, PetType, Visit};
use crate::domain::repositories::{OwnerRepository, PetTypeRepository};
use crate::domain::validation::{
    duplicate_name_error, duplicate_pet_name, validate_owner, validate_pet, validate_visit,
};
use crate::error::ClinicError;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service for managing owners and the pets registered under them.
///
/// Every mutation follows the same shape: load the owner graph, validate
/// the input against the field rules and the duplicate pet-name policy,
/// mutate through the aggregate's own operations, and store the result.
/// Nothing is stored when validation fails.
pub struct OwnerService<R: OwnerRepository, T: PetTypeRepository> {
    owner_repository: Arc<R>,
    pet_type_repository: Arc<T>,
}

impl<R: OwnerRepository, T: PetTypeRepository> OwnerService<R, T> {
    /// Creates a new owner service.
    pub fn new(owner_repository: Arc<R>, pet_type_repository: Arc<T>) -> Self {
        Self {
            owner_repository,
            pet_type_repository,
        }
    }

    /// Registers a new owner.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Validation`] when a contact field fails the
    /// field rules (blank names, malformed telephone).
    pub async fn register_owner(&self, owner: Owner) -> Result<Owner, ClinicError> {
        validate_owner(&owner)?;

        info!(last_name = %owner.last_name, "registering owner");
        self.owner_repository.save(owner).await
    }

    /// Updates an already-stored owner's contact details.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidArgument`] when the owner carries no
    /// identifier, and [`ClinicError::Validation`] on field errors.
    pub async fn update_owner(&self, owner: Owner) -> Result<Owner, ClinicError> {
        let owner_id = owner.id.value().ok_or_else(|| {
            ClinicError::invalid_argument("Owner identifier must not be null", json!({}))
        })?;
        validate_owner(&owner)?;

        debug!(owner_id, "updating owner details");
        self.owner_repository.save(owner).await
    }

    /// Loads an owner by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when no owner has that
    /// identifier.
    pub async fn owner(&self, id: i32) -> Result<Owner, ClinicError> {
        self.owner_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClinicError::not_found("Owner not found", json!({ "id": id })))
    }

    /// Owners whose last name starts with `prefix`. An empty prefix lists
    /// every owner.
    pub async fn owners_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, ClinicError> {
        self.owner_repository.find_by_last_name(prefix).await
    }

    /// Registers a new pet under an owner.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] for an unknown owner,
    /// [`ClinicError::InvalidArgument`] when the pet already carries an
    /// identifier, and [`ClinicError::Validation`] when field rules fail
    /// or the name is already taken by another stored pet of this owner.
    pub async fn add_new_pet(&self, owner_id: i32, pet: Pet) -> Result<Owner, ClinicError> {
        let mut owner = self.owner(owner_id).await?;

        if !pet.id.is_new() {
            return Err(ClinicError::invalid_argument(
                "Pet already has an identifier",
                json!({ "pet_id": pet.id.value() }),
            ));
        }

        let mut errors = validate_pet(&pet, today());
        if duplicate_pet_name(&owner, &pet.name, None) {
            errors.add("name".into(), duplicate_name_error());
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        debug!(owner_id, pet = %pet.name, "registering new pet");
        owner.add_pet(pet);
        self.owner_repository.save(owner).await
    }

    /// Updates a stored pet's details (name, birth date, type), keeping
    /// its visit history.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] for an unknown owner,
    /// [`ClinicError::InvalidArgument`] when the pet carries no identifier
    /// or is not registered under this owner, and
    /// [`ClinicError::Validation`] when field rules fail or the proposed
    /// name belongs to a different stored pet of the same owner.
    pub async fn update_pet(&self, owner_id: i32, pet: Pet) -> Result<Owner, ClinicError> {
        let mut owner = self.owner(owner_id).await?;

        let pet_id = pet.id.value().ok_or_else(|| {
            ClinicError::invalid_argument("Pet identifier must not be null", json!({}))
        })?;
        if owner.pet(pet_id).is_none() {
            return Err(ClinicError::invalid_argument(
                "Invalid Pet identifier",
                json!({ "owner_id": owner_id, "pet_id": pet_id }),
            ));
        }

        let mut errors = validate_pet(&pet, today());
        if duplicate_pet_name(&owner, &pet.name, Some(&pet)) {
            errors.add("name".into(), duplicate_name_error());
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        if let Some(stored) = owner.pets.iter_mut().find(|p| p.id.value() == Some(pet_id)) {
            stored.name = pet.name;
            stored.birth_date = pet.birth_date;
            stored.kind = pet.kind;
        }

        debug!(owner_id, pet_id, "updating pet details");
        self.owner_repository.save(owner).await
    }

    /// Records a visit on one of the owner's stored pets.
    ///
    /// Both `pet_id` and `visit` are optional so unresolved form input is
    /// rejected by the aggregate with its invalid-argument contract.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] for an unknown owner,
    /// [`ClinicError::Validation`] for a blank description, and
    /// [`ClinicError::InvalidArgument`] from
    /// [`Owner::add_visit`] for absent or unknown arguments.
    pub async fn add_visit(
        &self,
        owner_id: i32,
        pet_id: Option<i32>,
        visit: Option<Visit>,
    ) -> Result<Owner, ClinicError> {
        let mut owner = self.owner(owner_id).await?;

        if let Some(visit) = visit.as_ref() {
            validate_visit(visit)?;
        }
        owner.add_visit(pet_id, visit)?;

        debug!(owner_id, ?pet_id, "recording visit");
        self.owner_repository.save(owner).await
    }

    /// Resolves a pet type by its name, as entered in a form.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when no type carries that name.
    pub async fn resolve_pet_type(&self, name: &str) -> Result<PetType, ClinicError> {
        let types = self.pet_type_repository.find_pet_types().await?;
        types
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| {
                ClinicError::not_found(format!("type not found: {name}"), json!({ "name": name }))
            })
    }
}
