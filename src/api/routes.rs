//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use crate::config::ServerConfig;
use crate::error::ErrorResponse;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the machine-readable API description
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gopher API",
        version = "1.1",
        description = "Sample REST API managing a collection of gophers.",
        contact(name = "API Support", url = "http://www.swagger.io/support", email = "support@swagger.io"),
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html"),
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        handlers::create_gopher,
        handlers::list_gophers,
        handlers::get_gopher,
        handlers::update_gopher,
        handlers::delete_gopher,
        handlers::health_check,
    ),
    components(schemas(
        Gopher,
        CreateGopherRequest,
        UpdateGopherRequest,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Gophers", description = "Gopher management endpoints"),
        (name = "Probes", description = "Liveness endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let docs_enabled = state.settings.docs.enabled;
    let server = state.settings.server.clone();

    let router = Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Gopher resource endpoints
        .route(
            "/gophers",
            get(handlers::list_gophers).post(handlers::create_gopher),
        )
        .route(
            "/gophers/:id",
            get(handlers::get_gopher)
                .put(handlers::update_gopher)
                .delete(handlers::delete_gopher),
        );

    let router = if docs_enabled {
        router
            .route("/", get(handlers::docs_redirect))
            .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
    } else {
        router
    };

    apply_layers(router.with_state(state), &server)
}

/// Wrap a router with the request timeout, optional CORS and tracing layers
pub fn apply_layers(router: Router, server: &ServerConfig) -> Router {
    let router = router.layer(TimeoutLayer::new(Duration::from_secs(
        server.request_timeout_secs,
    )));

    let router = if server.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
