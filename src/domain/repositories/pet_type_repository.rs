//! Repository trait for pet type reference data.

use crate::domain::entities::PetType;
use crate::error::ClinicError;
use async_trait::async_trait;

/// Lookup interface for pet types.
///
/// Pet types are reference data: the clinic core associates them with pets
/// but never creates or validates them itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    /// Stores a pet type, assigning an identifier if it is new.
    async fn save(&self, pet_type: PetType) -> Result<PetType, ClinicError>;

    /// Finds a pet type by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, ClinicError>;

    /// Every pet type, sorted ascending by name.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, ClinicError>;
}
