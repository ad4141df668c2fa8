//! In-memory pet type repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{EntityId, PetType};
use crate::domain::repositories::PetTypeRepository;
use crate::error::ClinicError;

#[derive(Default)]
struct PetTypeStore {
    types: BTreeMap<i32, PetType>,
    last_id: i32,
}

/// [`PetTypeRepository`] backed by a mutex-guarded map.
#[derive(Default)]
pub struct MemoryPetTypeRepository {
    store: Mutex<PetTypeStore>,
}

impl MemoryPetTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository preloaded with the clinic's standard pet types.
    pub fn with_default_types() -> Self {
        let repository = Self::new();
        {
            let mut store = repository.store.lock().expect("pet type store lock poisoned");
            for name in ["cat", "dog", "lizard", "snake", "bird", "hamster"] {
                store.last_id += 1;
                let id = store.last_id;
                store.types.insert(id, PetType::new(EntityId::assigned(id), name));
            }
        }
        repository
    }
}

#[async_trait]
impl PetTypeRepository for MemoryPetTypeRepository {
    async fn save(&self, mut pet_type: PetType) -> Result<PetType, ClinicError> {
        let mut store = self.store.lock().expect("pet type store lock poisoned");

        let type_id = match pet_type.id.value() {
            Some(id) if store.types.contains_key(&id) => id,
            Some(id) => {
                return Err(ClinicError::not_found(
                    "Pet type not found",
                    json!({ "id": id }),
                ));
            }
            None => {
                store.last_id += 1;
                let id = store.last_id;
                pet_type.id.assign(id);
                id
            }
        };

        store.types.insert(type_id, pet_type.clone());
        Ok(pet_type)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, ClinicError> {
        let store = self.store.lock().expect("pet type store lock poisoned");
        Ok(store.types.get(&id).cloned())
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, ClinicError> {
        let store = self.store.lock().expect("pet type store lock poisoned");
        let mut types: Vec<_> = store.types.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }
}
