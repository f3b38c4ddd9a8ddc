//! Pet Service - Business logic layer

use observability::PetMetrics;
use std::sync::Arc;
use tracing::{error, info, instrument};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::error::{PetError, PetResult, parse_id};
use crate::models::{MessageResponse, NewPet, PetInput, PetResponse, PetUpdate};
use crate::repository::PetRepository;

/// Client-facing message for every create failure, including a missing re-read
pub const CREATE_FAILED_MESSAGE: &str = "Error creating pet";

/// Pet service providing the catalog operations
///
/// Identifiers arrive as raw path strings and are parsed here, before any
/// repository call. Results are returned in wire shape.
pub struct PetService<R: PetRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: PetRepository> PetService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    fn check_input(input: &PetInput) -> PetResult<()> {
        input
            .validate()
            .map_err(|e| PetError::Validation(e.to_string()))
    }

    /// Create a pet and return it as re-read from the store
    #[instrument(skip(self, input), fields(breed = %input.breed))]
    pub async fn create_pet(&self, input: PetInput) -> PetResult<PetResponse> {
        Self::check_input(&input)?;

        let new_pet = NewPet {
            fields: input,
            created_at: self.clock.timestamp(),
        };

        let stored = async {
            let id = self.repository.insert(new_pet).await?;
            self.repository.find_by_id(id).await
        }
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create pet");
            PetError::Internal(CREATE_FAILED_MESSAGE.to_string())
        })?;

        let pet = stored.ok_or_else(|| {
            error!("Failed to retrieve inserted pet");
            PetError::Internal(CREATE_FAILED_MESSAGE.to_string())
        })?;

        info!(pet_id = %pet.id, "Pet created");
        PetMetrics::record_created();
        Ok(PetResponse::from(&pet))
    }

    #[instrument(skip(self))]
    pub async fn list_pets(&self) -> PetResult<Vec<PetResponse>> {
        let pets = self.repository.find_all().await?;
        PetMetrics::record_listed(pets.len());
        Ok(pets.iter().map(PetResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: &str) -> PetResult<PetResponse> {
        let id = parse_id(id)?;
        self.repository
            .find_by_id(id)
            .await?
            .map(PetResponse::from)
            .ok_or(PetError::NotFound(id))
    }

    /// Replace every editable field and refresh `updated_at`
    #[instrument(skip(self, input))]
    pub async fn update_pet(&self, id: &str, input: PetInput) -> PetResult<PetResponse> {
        let id = parse_id(id)?;
        Self::check_input(&input)?;

        let update = PetUpdate {
            fields: input,
            updated_at: self.clock.timestamp(),
        };

        if !self.repository.update_by_id(id, update).await? {
            return Err(PetError::NotFound(id));
        }

        let pet = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PetError::NotFound(id))?;

        info!(pet_id = %id, "Pet updated");
        PetMetrics::record_updated();
        Ok(PetResponse::from(&pet))
    }

    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: &str) -> PetResult<MessageResponse> {
        let id = parse_id(id)?;

        if !self.repository.delete_by_id(id).await? {
            return Err(PetError::NotFound(id));
        }

        info!(pet_id = %id, "Pet deleted");
        PetMetrics::record_deleted();
        Ok(MessageResponse::new("Pet deleted successfully"))
    }

    #[instrument(skip(self))]
    pub async fn delete_all_pets(&self) -> PetResult<MessageResponse> {
        let deleted = self.repository.delete_all().await?;

        info!(count = deleted, "Deleted {} pets", deleted);
        PetMetrics::record_bulk_deleted(deleted);
        Ok(MessageResponse::new(format!(
            "Deleted {} pets successfully",
            deleted
        )))
    }
}

impl<R: PetRepository> Clone for PetService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}
