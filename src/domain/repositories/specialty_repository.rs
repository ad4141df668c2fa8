//! Repository trait for specialty reference data.

use crate::domain::entities::Specialty;
use crate::error::ClinicError;
use async_trait::async_trait;

/// Lookup interface for veterinary specialties.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    /// Stores a specialty, assigning an identifier if it is new.
    async fn save(&self, specialty: Specialty) -> Result<Specialty, ClinicError>;

    /// Finds a specialty by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Specialty>, ClinicError>;

    /// Every specialty, sorted ascending by name.
    async fn find_all(&self) -> Result<Vec<Specialty>, ClinicError>;
}
