mod categories;
mod places;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use townscout_core::AppConfig;
use townscout_osm::{GeocoderClient, OsmError, OverpassClient};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub geocoder: Arc<GeocoderClient>,
    pub overpass: Arc<OverpassClient>,
}

/// Structured error payload: a machine-readable code and a human-readable
/// detail message, serialized as the response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self {
            code: "invalid_input",
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            code: "not_found",
            detail: detail.into(),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self {
            code: "upstream_unavailable",
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            "invalid_input" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "upstream_unavailable" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<OsmError> for ApiError {
    fn from(error: OsmError) -> Self {
        match error {
            OsmError::TownNotFound(town) => Self::not_found(format!("Town not found: {town}")),
            OsmError::Http(e) => {
                tracing::error!(error = %e, "upstream request failed");
                Self::unavailable("Upstream map service is unavailable")
            }
            OsmError::Upstream { service, status } => {
                tracing::error!(service, status, "upstream returned an error status");
                Self::unavailable(format!("The {service} service is unavailable"))
            }
            OsmError::Deserialize { ref context, .. } => {
                tracing::error!(%context, "upstream response malformed");
                Self::unavailable("Upstream map service returned an unexpected response")
            }
            OsmError::InvalidNumber { service, .. } => {
                tracing::error!(service, "upstream response carried invalid coordinates");
                Self::unavailable("Upstream map service returned an unexpected response")
            }
            OsmError::InvalidBaseUrl(ref url) => {
                tracing::error!(%url, "client misconfigured");
                Self {
                    code: "internal_error",
                    detail: "Server misconfiguration".to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn healthz() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/places", get(places::search_places))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}
