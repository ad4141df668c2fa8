//! Vet directory and specialty assignment service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::Vet;
use crate::domain::repositories::{SpecialtyRepository, VetRepository};
use crate::error::ClinicError;

/// Service for the vet directory.
///
/// Vets are mostly read (the directory listing); the one mutation is
/// assigning a specialty, which is idempotent thanks to the aggregate's
/// identity-based dedup.
pub struct VetService<R: VetRepository, S: SpecialtyRepository> {
    vet_repository: Arc<R>,
    specialty_repository: Arc<S>,
}

impl<R: VetRepository, S: SpecialtyRepository> VetService<R, S> {
    /// Creates a new vet service.
    pub fn new(vet_repository: Arc<R>, specialty_repository: Arc<S>) -> Self {
        Self {
            vet_repository,
            specialty_repository,
        }
    }

    /// Every vet in the directory.
    pub async fn vets(&self) -> Result<Vec<Vet>, ClinicError> {
        self.vet_repository.find_all().await
    }

    /// Loads a vet by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when no vet has that identifier.
    pub async fn vet(&self, id: i32) -> Result<Vet, ClinicError> {
        self.vet_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClinicError::not_found("Vet not found", json!({ "id": id })))
    }

    /// Assigns a specialty to a vet. Assigning one the vet already has is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when the vet or the specialty
    /// does not exist.
    pub async fn assign_specialty(&self, vet_id: i32, specialty_id: i32) -> Result<Vet, ClinicError> {
        let mut vet = self.vet(vet_id).await?;
        let specialty = self
            .specialty_repository
            .find_by_id(specialty_id)
            .await?
            .ok_or_else(|| {
                ClinicError::not_found("Specialty not found", json!({ "id": specialty_id }))
            })?;

        debug!(vet_id, specialty = %specialty.name, "assigning specialty");
        vet.add_specialty(specialty);
        self.vet_repository.save(vet).await
    }
}
