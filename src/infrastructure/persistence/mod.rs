//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! mutex-guarded maps. Storing a record is where identity is assigned:
//! each store hands out sequential identifiers exactly once, and an owner
//! save cascades assignment to its new pets and their new visits.
//!
//! Reads and writes work on clones, so a stored graph can only change
//! through another `save`.
//!
//! # Repositories
//!
//! - [`MemoryOwnerRepository`] - Owner graphs (pets and visits included)
//! - [`MemoryVetRepository`] - Vets with their specialties
//! - [`MemoryPetTypeRepository`] - Pet type reference data
//! - [`MemorySpecialtyRepository`] - Specialty reference data

pub mod memory_owner_repository;
pub mod memory_pet_type_repository;
pub mod memory_specialty_repository;
pub mod memory_vet_repository;

pub use memory_owner_repository::MemoryOwnerRepository;
pub use memory_pet_type_repository::MemoryPetTypeRepository;
pub use memory_specialty_repository::MemorySpecialtyRepository;
pub use memory_vet_repository::MemoryVetRepository;
