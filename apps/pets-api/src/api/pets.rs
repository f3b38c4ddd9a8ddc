//! Pets API routes

use axum::Router;
use domain_pets::{MongoPetRepository, PetService, handlers};

use crate::state::AppState;

/// Wire the pets domain to the MongoDB collection
pub fn router(state: &AppState) -> Router {
    let repository = MongoPetRepository::new(state.db.clone());
    let service = PetService::new(repository);

    handlers::router(service)
}
