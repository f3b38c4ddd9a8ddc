//! Pets Domain
//!
//! CRUD over the pet catalog, stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id parsing, timestamps, response shaping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, DTOs, codec
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_pets::{handlers, MongoPetRepository, PetService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("pet_store");
//!
//! let service = PetService::new(MongoPetRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{PetError, PetResult};
pub use handlers::ApiDoc;
pub use models::{Age, MessageResponse, NewPet, Pet, PetInput, PetResponse, PetUpdate};
pub use self::mongodb::MongoPetRepository;
pub use repository::{InMemoryPetRepository, PetRepository};
pub use service::PetService;
