use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Age in years, keeping whether the client sent an integer or a fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Whole(i64),
    Fractional(f64),
}

/// Editable pet fields, accepted by both create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PetInput {
    #[validate(length(min = 1))]
    #[schema(example = "Labrador")]
    pub breed: String,

    #[validate(length(min = 1))]
    #[schema(example = "dog")]
    pub pet_type: String,

    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 2)]
    pub age: Option<Age>,

    /// Price as a plain number
    #[schema(example = 500.0)]
    pub rate: f64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Stored pet document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub breed: String,
    pub pet_type: String,
    #[serde(default)]
    pub age: Option<Age>,
    pub rate: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Pet {
    /// Materialize an inserted document under its assigned id
    pub fn from_new(id: ObjectId, new: NewPet) -> Self {
        let NewPet { fields, created_at } = new;
        Self {
            id,
            breed: fields.breed,
            pet_type: fields.pet_type,
            age: fields.age,
            rate: fields.rate,
            description: fields.description,
            image_url: fields.image_url,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    /// Overwrite every editable field and stamp `updated_at`
    pub fn apply_update(&mut self, update: PetUpdate) {
        let PetUpdate { fields, updated_at } = update;
        self.breed = fields.breed;
        self.pet_type = fields.pet_type;
        self.age = fields.age;
        self.rate = fields.rate;
        self.description = fields.description;
        self.image_url = fields.image_url;
        self.updated_at = Some(updated_at);
    }
}

/// Document written on create; the store assigns `_id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPet {
    #[serde(flatten)]
    pub fields: PetInput,
    pub created_at: String,
}

/// `$set` payload for a full replace of the editable fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetUpdate {
    #[serde(flatten)]
    pub fields: PetInput,
    pub updated_at: String,
}

/// Wire representation of a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetResponse {
    #[schema(example = "65f1c0ffee0ddba11ca7f00d")]
    pub id: String,
    pub breed: String,
    pub pet_type: String,
    #[schema(value_type = Option<f64>)]
    pub age: Option<Age>,
    /// Currency formatted price
    #[schema(example = "₹500.00")]
    pub rate: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[schema(example = "7036131241")]
    pub contact_number: String,
    #[schema(example = "2024-03-01 14:05:09")]
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
