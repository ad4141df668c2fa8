//! Repository trait for vets.

use crate::domain::entities::Vet;
use crate::error::ClinicError;
use async_trait::async_trait;

/// Storage interface for vets and their specialty assignments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// Stores the vet, assigning an identifier if it is new, and returns
    /// the stored state.
    async fn save(&self, vet: Vet) -> Result<Vet, ClinicError>;

    /// Finds a vet by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Vet>, ClinicError>;

    /// Every vet in the directory, in identifier order.
    async fn find_all(&self) -> Result<Vec<Vet>, ClinicError>;
}
