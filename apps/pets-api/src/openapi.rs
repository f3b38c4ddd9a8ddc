//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Catalog API",
        version = "0.1.0",
        description = "CRUD API for the pet catalog, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation
///
/// The pets routes are mounted at the root, so their document is merged as is
/// rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(domain_pets::ApiDoc::openapi());
        doc
    }
}
