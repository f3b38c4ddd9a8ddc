use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{MethodRouter, get},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestInvalidIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PetResult;
use crate::models::{MessageResponse, PetInput, PetResponse};
use crate::repository::PetRepository;
use crate::service::PetService;

/// OpenAPI documentation for Pets API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_pets,
        create_pet,
        delete_all_pets,
        get_pet,
        update_pet,
        delete_pet,
    ),
    components(
        schemas(PetInput, PetResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestInvalidIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Pets", description = "Pet catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<PetService<R>>;

fn collection_routes<R: PetRepository + 'static>() -> MethodRouter<SharedService<R>> {
    get(list_pets::<R>)
        .post(create_pet::<R>)
        .delete(delete_all_pets::<R>)
}

/// Create the pets router
///
/// Routes are absolute; the collection answers on both `/pets` and `/pets/`.
pub fn router<R: PetRepository + 'static>(service: PetService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/pets", collection_routes::<R>())
        .route("/pets/", collection_routes::<R>())
        .route(
            "/pets/{id}",
            get(get_pet::<R>).put(update_pet::<R>).delete(delete_pet::<R>),
        )
        .with_state(shared_service)
}

/// List every pet
#[utoipa::path(
    get,
    path = "/pets/",
    tag = "Pets",
    responses(
        (status = 200, description = "All pets in storage order", body = Vec<PetResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_pets<R: PetRepository>(
    State(service): State<SharedService<R>>,
) -> PetResult<Json<Vec<PetResponse>>> {
    let pets = service.list_pets().await?;
    Ok(Json(pets))
}

/// Create a pet
#[utoipa::path(
    post,
    path = "/pets/",
    tag = "Pets",
    request_body = PetInput,
    responses(
        (status = 200, description = "Pet created", body = PetResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_pet<R: PetRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(input): ValidatedJson<PetInput>,
) -> PetResult<Json<PetResponse>> {
    let pet = service.create_pet(input).await?;
    Ok(Json(pet))
}

/// Delete every pet
#[utoipa::path(
    delete,
    path = "/pets/",
    tag = "Pets",
    responses(
        (status = 200, description = "Number of pets deleted", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_all_pets<R: PetRepository>(
    State(service): State<SharedService<R>>,
) -> PetResult<Json<MessageResponse>> {
    let message = service.delete_all_pets().await?;
    Ok(Json(message))
}

/// Get a pet by ID
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Pet found", body = PetResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_pet<R: PetRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> PetResult<Json<PetResponse>> {
    let pet = service.get_pet(&id).await?;
    Ok(Json(pet))
}

/// Replace a pet's fields
#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24 hex characters)")
    ),
    request_body = PetInput,
    responses(
        (status = 200, description = "Pet updated", body = PetResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_pet<R: PetRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<PetInput>,
) -> PetResult<Json<PetResponse>> {
    let pet = service.update_pet(&id, input).await?;
    Ok(Json(pet))
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Pet deleted", body = MessageResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_pet<R: PetRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> PetResult<Json<MessageResponse>> {
    let message = service.delete_pet(&id).await?;
    Ok(Json(message))
}
