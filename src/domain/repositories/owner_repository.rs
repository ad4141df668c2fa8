//! Repository trait for owner aggregates.

use crate::domain::entities::Owner;
use crate::error::ClinicError;
use async_trait::async_trait;

/// Storage interface for owner aggregates.
///
/// An owner is always loaded and stored as a whole graph: the owner, its
/// pets, and each pet's visits travel together.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryOwnerRepository`] - in-memory reference implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Stores the owner graph and returns the stored state.
    ///
    /// Storing is where identity is assigned: the owner and any of its
    /// pets and visits that are still new receive identifiers exactly
    /// once, never to change again.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::NotFound`] when an already-stored owner no
    /// longer exists in the store.
    async fn save(&self, owner: Owner) -> Result<Owner, ClinicError>;

    /// Finds an owner by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Owner))` with the full graph if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, ClinicError>;

    /// Owners whose last name starts with `prefix`, in identifier order.
    /// An empty prefix lists every owner.
    async fn find_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, ClinicError>;
}
