#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use petclinic::prelude::*;

/// Installs a fmt subscriber honoring `RUST_LOG`; repeat calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn sample_owner() -> Owner {
    let mut owner = Owner::default();
    owner.first_name = "John".to_string();
    owner.last_name = "Doe".to_string();
    owner.address = "123 Main St".to_string();
    owner.city = "Springfield".to_string();
    owner.telephone = "1234567890".to_string();
    owner
}

pub fn new_pet(name: &str) -> Pet {
    let mut pet = Pet::named(name);
    pet.birth_date = NaiveDate::from_ymd_opt(2020, 5, 15);
    pet.kind = Some(PetType::new(EntityId::assigned(2), "dog"));
    pet
}

pub fn visit_described(description: &str) -> Visit {
    let mut visit = Visit::new();
    visit.description = description.to_string();
    visit
}

pub fn owner_service() -> OwnerService<MemoryOwnerRepository, MemoryPetTypeRepository> {
    OwnerService::new(
        Arc::new(MemoryOwnerRepository::new()),
        Arc::new(MemoryPetTypeRepository::with_default_types()),
    )
}
