//! In-memory vet repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::Vet;
use crate::domain::repositories::VetRepository;
use crate::error::ClinicError;

#[derive(Default)]
struct VetStore {
    vets: BTreeMap<i32, Vet>,
    last_id: i32,
}

/// [`VetRepository`] backed by a mutex-guarded map.
#[derive(Default)]
pub struct MemoryVetRepository {
    store: Mutex<VetStore>,
}

impl MemoryVetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VetRepository for MemoryVetRepository {
    async fn save(&self, mut vet: Vet) -> Result<Vet, ClinicError> {
        let mut store = self.store.lock().expect("vet store lock poisoned");

        let vet_id = match vet.id.value() {
            Some(id) if store.vets.contains_key(&id) => id,
            Some(id) => {
                return Err(ClinicError::not_found("Vet not found", json!({ "id": id })));
            }
            None => {
                store.last_id += 1;
                let id = store.last_id;
                vet.id.assign(id);
                id
            }
        };

        store.vets.insert(vet_id, vet.clone());
        debug!(vet_id, "stored vet");
        Ok(vet)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vet>, ClinicError> {
        let store = self.store.lock().expect("vet store lock poisoned");
        Ok(store.vets.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vet>, ClinicError> {
        let store = self.store.lock().expect("vet store lock poisoned");
        Ok(store.vets.values().cloned().collect())
    }
}
