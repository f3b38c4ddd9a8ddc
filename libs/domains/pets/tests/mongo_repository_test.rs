//! MongoDB repository tests
//!
//! Run against a throwaway MongoDB container, so they need Docker:
//! `cargo test -p domain_pets --test mongo_repository_test -- --ignored`

use ::mongodb::bson::{Document, doc, oid::ObjectId};
use domain_pets::{
    Age, MongoPetRepository, NewPet, PetError, PetInput, PetRepository, PetResponse, PetService,
    PetUpdate,
};
use test_utils::{TestDataBuilder, TestMongo};

fn new_pet(builder: &TestDataBuilder, suffix: &str) -> NewPet {
    NewPet {
        fields: PetInput {
            breed: builder.name("breed", suffix),
            pet_type: "dog".to_string(),
            age: Some(Age::Fractional(1.5)),
            rate: builder.rate(),
            description: None,
            image_url: None,
        },
        created_at: "2024-03-01 14:05:09".to_string(),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_insert_find_update_delete() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_insert_find_update_delete");
    let repo = MongoPetRepository::new(mongo.database(&builder.database_name()));

    let id = repo.insert(new_pet(&builder, "main")).await.unwrap();
    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.breed, builder.name("breed", "main"));
    assert_eq!(stored.age, Some(Age::Fractional(1.5)));
    assert_eq!(stored.rate, builder.rate());
    assert!(stored.updated_at.is_none());

    let update = PetUpdate {
        fields: PetInput {
            age: Some(Age::Whole(2)),
            description: Some("Updated".to_string()),
            ..new_pet(&builder, "renamed").fields
        },
        updated_at: "2024-03-01 15:00:00".to_string(),
    };
    assert!(repo.update_by_id(id, update).await.unwrap());

    let updated = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(updated.breed, builder.name("breed", "renamed"));
    assert_eq!(updated.age, Some(Age::Whole(2)));
    assert_eq!(updated.created_at.as_deref(), Some("2024-03-01 14:05:09"));
    assert_eq!(updated.updated_at.as_deref(), Some("2024-03-01 15:00:00"));

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unknown_id_reports_no_match() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_unknown_id");
    let repo = MongoPetRepository::new(mongo.database(&builder.database_name()));

    let missing = ObjectId::new();
    let update = PetUpdate {
        fields: new_pet(&builder, "x").fields,
        updated_at: "2024-03-01 15:00:00".to_string(),
    };

    assert!(repo.find_by_id(missing).await.unwrap().is_none());
    assert!(!repo.update_by_id(missing, update).await.unwrap());
    assert!(!repo.delete_by_id(missing).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_and_delete_all() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_find_all_delete_all");
    let repo = MongoPetRepository::new(mongo.database(&builder.database_name()));

    for suffix in ["a", "b", "c"] {
        repo.insert(new_pet(&builder, suffix)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 3);

    assert_eq!(repo.delete_all().await.unwrap(), 3);
    assert!(repo.find_all().await.unwrap().is_empty());
    assert_eq!(repo.delete_all().await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_reads_documents_written_by_other_clients() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_foreign_documents");
    let db = mongo.database(&builder.database_name());
    let repo = MongoPetRepository::new(db.clone());

    // integer rate, no optional fields, no timestamps
    let raw = db.collection::<Document>("pets");
    let result = raw
        .insert_one(doc! { "breed": "Siamese", "pet_type": "cat", "rate": 750 })
        .await
        .unwrap();
    let id = result.inserted_id.as_object_id().unwrap();

    let pet = repo.find_by_id(id).await.unwrap().unwrap();
    let response = PetResponse::from(&pet);
    assert_eq!(response.rate, "₹750.00");
    assert!(response.age.is_none());
    assert!(response.created_at.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_service_over_mongo() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_service");
    let service = PetService::new(MongoPetRepository::new(
        mongo.database(&builder.database_name()),
    ));

    let created = service
        .create_pet(new_pet(&builder, "svc").fields)
        .await
        .unwrap();
    assert_eq!(created.contact_number, "7036131241");

    let fetched = service.get_pet(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    assert!(matches!(service.get_pet("xyz").await, Err(PetError::InvalidId(_))));

    let message = service.delete_all_pets().await.unwrap();
    assert_eq!(message.message, "Deleted 1 pets successfully");
}
