use tower_http::cors::CorsLayer;

/// CORS layer that allows any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_any_origin_is_allowed() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_permissive_cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://somewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
