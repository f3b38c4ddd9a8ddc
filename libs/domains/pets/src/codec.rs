//! Store to wire mapping.

use crate::models::{Pet, PetResponse};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Contact number attached to every serialized pet
pub const CONTACT_NUMBER: &str = "7036131241";

/// Render a price with the currency symbol and two decimal places
///
/// ```
/// use domain_pets::codec::format_rate;
///
/// assert_eq!(format_rate(19.5), "₹19.50");
/// assert_eq!(format_rate(100.0), "₹100.00");
/// ```
pub fn format_rate(rate: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, rate)
}

impl From<&Pet> for PetResponse {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.to_hex(),
            breed: pet.breed.clone(),
            pet_type: pet.pet_type.clone(),
            age: pet.age,
            rate: format_rate(pet.rate),
            description: pet.description.clone(),
            image_url: pet.image_url.clone(),
            contact_number: CONTACT_NUMBER.to_string(),
            created_at: pet.created_at.clone(),
            updated_at: pet.updated_at.clone(),
        }
    }
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        PetResponse::from(&pet)
    }
}
