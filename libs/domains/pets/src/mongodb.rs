//! MongoDB implementation of PetRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId, to_document},
};
use tracing::instrument;

use crate::error::{PetError, PetResult};
use crate::models::{NewPet, Pet, PetUpdate};
use crate::repository::PetRepository;

pub const COLLECTION_NAME: &str = "pets";

/// MongoDB implementation of the PetRepository
pub struct MongoPetRepository {
    collection: Collection<Pet>,
}

impl MongoPetRepository {
    /// Repository over the `pets` collection of `db`
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoPetRepository::new(client.database("pet_store"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Pet>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Pet> {
        &self.collection
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    #[instrument(skip(self, pet), fields(breed = %pet.fields.breed))]
    async fn insert(&self, pet: NewPet) -> PetResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewPet>()
            .insert_one(&pet)
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            PetError::Database(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> PetResult<Vec<Pet>> {
        let cursor = self.collection.find(doc! {}).await?;
        let pets: Vec<Pet> = cursor.try_collect().await?;
        Ok(pets)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> PetResult<Option<Pet>> {
        let pet = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(pet)
    }

    #[instrument(skip(self, update))]
    async fn update_by_id(&self, id: ObjectId, update: PetUpdate) -> PetResult<bool> {
        let set = to_document(&update).map_err(|e| PetError::Internal(e.to_string()))?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> PetResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> PetResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
