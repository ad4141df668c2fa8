//! In-memory owner repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::ClinicError;

#[derive(Default)]
struct OwnerStore {
    owners: BTreeMap<i32, Owner>,
    last_owner_id: i32,
    last_pet_id: i32,
    last_visit_id: i32,
}

/// [`OwnerRepository`] backed by a mutex-guarded map.
///
/// Saving assigns identifiers to the owner and cascades assignment to any
/// new pets and visits in the graph, then stores a clone; loading returns
/// clones, so a stored graph only changes through another save.
#[derive(Default)]
pub struct MemoryOwnerRepository {
    store: Mutex<OwnerStore>,
}

impl MemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for MemoryOwnerRepository {
    async fn save(&self, mut owner: Owner) -> Result<Owner, ClinicError> {
        let mut store = self.store.lock().expect("owner store lock poisoned");

        let owner_id = match owner.id.value() {
            Some(id) if store.owners.contains_key(&id) => id,
            Some(id) => {
                return Err(ClinicError::not_found(
                    "Owner not found",
                    json!({ "id": id }),
                ));
            }
            None => {
                store.last_owner_id += 1;
                let id = store.last_owner_id;
                owner.id.assign(id);
                id
            }
        };

        for pet in &mut owner.pets {
            if pet.id.is_new() {
                store.last_pet_id += 1;
                pet.id.assign(store.last_pet_id);
            }
            for visit in pet.visits_mut() {
                if visit.id.is_new() {
                    store.last_visit_id += 1;
                    visit.id.assign(store.last_visit_id);
                }
            }
        }

        store.owners.insert(owner_id, owner.clone());
        debug!(owner_id, pets = owner.pets.len(), "stored owner graph");
        Ok(owner)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, ClinicError> {
        let store = self.store.lock().expect("owner store lock poisoned");
        Ok(store.owners.get(&id).cloned())
    }

    async fn find_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, ClinicError> {
        let store = self.store.lock().expect("owner store lock poisoned");
        Ok(store
            .owners
            .values()
            .filter(|owner| owner.last_name.starts_with(prefix))
            .cloned()
            .collect())
    }
}
