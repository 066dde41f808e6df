use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::maintenance::{repository::MaintenanceRequestRepository, MaintenanceRequestService};

use crate::openapi::ApiDoc;

pub mod maintenance_requests;

pub const MAINTENANCE_REQUESTS_PATH: &str = "/api/v1/maintenance-requests";
const MAINTENANCE_REQUEST_LOOKUP_PATH: &str = "/api/v1/maintenance-requests/lookup";
const MAINTENANCE_REQUEST_ITEM_PATH: &str = "/api/v1/maintenance-requests/:id";

/// Shared handler state; storage is injected behind the repository trait.
#[derive(Clone)]
pub struct ServerState {
    pub maintenance: Arc<MaintenanceRequestService<dyn MaintenanceRequestRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn MaintenanceRequestRepository>) -> Self {
        Self { maintenance: Arc::new(MaintenanceRequestService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API docs and the maintenance request resource
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let maintenance = Router::new()
        .route(
            MAINTENANCE_REQUESTS_PATH,
            get(maintenance_requests::list).post(maintenance_requests::create),
        )
        .route(MAINTENANCE_REQUEST_LOOKUP_PATH, get(maintenance_requests::lookup))
        .route(
            MAINTENANCE_REQUEST_ITEM_PATH,
            get(maintenance_requests::get)
                .put(maintenance_requests::update)
                .delete(maintenance_requests::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(maintenance)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
