//! # PetClinic
//!
//! Veterinary-clinic record keeping: owners with their pets and visit
//! histories, and vets with their specialties.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, and the
//!   validation policies
//! - **Application Layer** ([`application`]) - Use-case services
//!   orchestrating load, validate, mutate, save
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//!   implementations carrying the identity-assignment lifecycle
//!
//! ## The aggregate model
//!
//! An [`domain::entities::Owner`] exclusively owns its pets, and each pet
//! its visits; a [`domain::entities::Vet`] references shared specialties.
//! Records are "new" until the persistence collaborator assigns them an
//! identifier, and every consistency rule (guarded pet insertion,
//! persisted-only lookups, identity-deduped visit and specialty sets, the
//! duplicate pet-name policy) derives from that one-way transition.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use petclinic::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ClinicError> {
//! let owners = Arc::new(MemoryOwnerRepository::new());
//! let types = Arc::new(MemoryPetTypeRepository::with_default_types());
//! let service = OwnerService::new(owners, types);
//!
//! let mut owner = Owner::default();
//! owner.first_name = "George".to_string();
//! owner.last_name = "Franklin".to_string();
//! owner.address = "110 W. Liberty St.".to_string();
//! owner.city = "Madison".to_string();
//! owner.telephone = "6085551023".to_string();
//!
//! let owner = service.register_owner(owner).await?;
//! assert!(!owner.id.is_new());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ClinicError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{OwnerService, VetService};
    pub use crate::domain::entities::{EntityId, Owner, Pet, PetType, Specialty, Vet, Visit};
    pub use crate::domain::repositories::{
        OwnerRepository, PetTypeRepository, SpecialtyRepository, VetRepository,
    };
    pub use crate::error::ClinicError;
    pub use crate::infrastructure::persistence::{
        MemoryOwnerRepository, MemoryPetTypeRepository, MemorySpecialtyRepository,
        MemoryVetRepository,
    };
}
