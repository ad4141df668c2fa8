//! Repository trait definitions for the domain layer.
//!
//! This module defines the persistence-collaborator interfaces (traits)
//! that abstract record storage following the Repository pattern. The core
//! never performs I/O itself: collaborators hand it fully materialized
//! aggregates and store them back after mutation, assigning identifiers to
//! new records as they go.
//!
//! # Architecture
//!
//! - Traits define the contract for record storage and lookup
//! - In-memory reference implementations live in
//!   `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owner aggregates with their pets and visits
//! - [`VetRepository`] - Vets with their specialties
//! - [`PetTypeRepository`] - Pet type reference data
//! - [`SpecialtyRepository`] - Specialty reference data

pub mod owner_repository;
pub mod pet_type_repository;
pub mod specialty_repository;
pub mod vet_repository;

pub use owner_repository::OwnerRepository;
pub use pet_type_repository::PetTypeRepository;
pub use specialty_repository::SpecialtyRepository;
pub use vet_repository::VetRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_type_repository::MockPetTypeRepository;
#[cfg(test)]
pub use specialty_repository::MockSpecialtyRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
