use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::create_permissive_cors_layer;
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Wraps API routes with documentation UIs and cross-cutting middleware.
///
/// Routes are mounted at the root exactly as the domain router defines them.
/// The returned router adds:
/// - Swagger UI at `/swagger-ui` (document at `/api-docs/openapi.json`),
///   ReDoc at `/redoc`, RapiDoc at `/rapidoc` and Scalar at `/scalar`
/// - JSON 404 and 405 fallbacks
/// - request tracing at INFO level
/// - permissive CORS
///
/// `apis` must already have its state applied.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/pets", get(list))
///     .with_state(service);
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(create_permissive_cors_layer())
}

/// Production server with coordinated shutdown and cleanup.
///
/// On SIGINT/SIGTERM the server stops accepting connections and drains
/// in-flight requests. Only once the server has stopped does `cleanup` run,
/// bounded by `shutdown_timeout`, so it may close resources handlers use.
///
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     mongo_client.shutdown().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let coordinator = ShutdownCoordinator::default();
    let signal = async move { coordinator.wait_for_signal().await };

    serve_then_cleanup(listener, router, signal, shutdown_timeout, cleanup).await
}

/// Serve until `signal` completes and the drain finishes, then run `cleanup`.
async fn serve_then_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    signal: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()>,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => {
            tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    serve_result
}
