use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PetResult;
use crate::models::{NewPet, Pet, PetUpdate};

/// Repository trait for Pet persistence
///
/// Identifiers are already parsed when they reach the repository, so every
/// error from an implementation is a storage failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Insert a pet and return the id the store assigned
    async fn insert(&self, pet: NewPet) -> PetResult<ObjectId>;

    /// Every pet, in storage order
    async fn find_all(&self) -> PetResult<Vec<Pet>>;

    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>>;

    /// `$set` the update; `false` when no document matched
    async fn update_by_id(&self, id: ObjectId, update: PetUpdate) -> PetResult<bool>;

    /// `false` when nothing was removed
    async fn delete_by_id(&self, id: ObjectId) -> PetResult<bool>;

    /// Remove every pet and return how many were removed
    async fn delete_all(&self) -> PetResult<u64>;
}

/// In-memory implementation of PetRepository
///
/// Keeps insertion order so listings match what MongoDB returns for a
/// collection without deletes.
#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<Vec<Pet>>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn insert(&self, pet: NewPet) -> PetResult<ObjectId> {
        let id = ObjectId::new();
        self.pets.write().await.push(Pet::from_new(id, pet));
        Ok(id)
    }

    async fn find_all(&self) -> PetResult<Vec<Pet>> {
        Ok(self.pets.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let pets = self.pets.read().await;
        Ok(pets.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: ObjectId, update: PetUpdate) -> PetResult<bool> {
        let mut pets = self.pets.write().await;
        match pets.iter_mut().find(|p| p.id == id) {
            Some(pet) => {
                pet.apply_update(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> PetResult<bool> {
        let mut pets = self.pets.write().await;
        let before = pets.len();
        pets.retain(|p| p.id != id);
        Ok(pets.len() < before)
    }

    async fn delete_all(&self) -> PetResult<u64> {
        let mut pets = self.pets.write().await;
        let removed = pets.len() as u64;
        pets.clear();
        Ok(removed)
    }
}
