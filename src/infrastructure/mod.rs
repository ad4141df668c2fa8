//! Infrastructure layer backing the domain's collaborator contracts.
//!
//! This layer implements interfaces defined by the domain layer. The crate
//! ships in-memory reference implementations only; they carry the full
//! identity-assignment lifecycle so the aggregates can be exercised
//! end-to-end without external storage.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
