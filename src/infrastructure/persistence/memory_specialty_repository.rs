//! In-memory specialty repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{EntityId, Specialty};
use crate::domain::repositories::SpecialtyRepository;
use crate::error::ClinicError;

#[derive(Default)]
struct SpecialtyStore {
    specialties: BTreeMap<i32, Specialty>,
    last_id: i32,
}

/// [`SpecialtyRepository`] backed by a mutex-guarded map.
#[derive(Default)]
pub struct MemorySpecialtyRepository {
    store: Mutex<SpecialtyStore>,
}

impl MemorySpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository preloaded with the clinic's standard specialties.
    pub fn with_default_specialties() -> Self {
        let repository = Self::new();
        {
            let mut store = repository
                .store
                .lock()
                .expect("specialty store lock poisoned");
            for name in ["radiology", "surgery", "dentistry"] {
                store.last_id += 1;
                let id = store.last_id;
                store
                    .specialties
                    .insert(id, Specialty::new(EntityId::assigned(id), name));
            }
        }
        repository
    }
}

#[async_trait]
impl SpecialtyRepository for MemorySpecialtyRepository {
    async fn save(&self, mut specialty: Specialty) -> Result<Specialty, ClinicError> {
        let mut store = self.store.lock().expect("specialty store lock poisoned");

        let specialty_id = match specialty.id.value() {
            Some(id) if store.specialties.contains_key(&id) => id,
            Some(id) => {
                return Err(ClinicError::not_found(
                    "Specialty not found",
                    json!({ "id": id }),
                ));
            }
            None => {
                store.last_id += 1;
                let id = store.last_id;
                specialty.id.assign(id);
                id
            }
        };

        store.specialties.insert(specialty_id, specialty.clone());
        Ok(specialty)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Specialty>, ClinicError> {
        let store = self.store.lock().expect("specialty store lock poisoned");
        Ok(store.specialties.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Specialty>, ClinicError> {
        let store = self.store.lock().expect("specialty store lock poisoned");
        let mut specialties: Vec<_> = store.specialties.values().cloned().collect();
        specialties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specialties)
    }
}
