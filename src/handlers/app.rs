use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::models::LOCATIONS;

/// Unauthenticated health check. Reports the protected endpoints and the
/// size of the directory.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "MedRehab Location API Running",
        "endpoints": ["/get-locations", "/find-location"],
        "locations_count": LOCATIONS.len(),
    }))
}
