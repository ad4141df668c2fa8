//! Business logic services for the application layer.

pub mod owner_service;
pub mod vet_service;

pub use owner_service::OwnerService;
pub use vet_service::VetService;
