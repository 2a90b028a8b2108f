use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{find_by_prefix, fsa_prefix, Location, LOCATIONS};

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct FindLocationRequest {
    #[serde(default)]
    pub postal_code: String,
}

/// Header line followed by one formatted block per record, blocks separated
/// by a blank line.
fn directory_text(header: &str, locations: &[&Location]) -> String {
    let blocks: Vec<String> = locations.iter().map(|loc| loc.formatted()).collect();
    format!("{}\n\n{}", header, blocks.join("\n\n"))
}

/// `POST /get-locations` — every record in the directory as readable text.
pub async fn get_all_locations() -> Json<LocationsResponse> {
    tracing::info!("Get locations request received");

    let all: Vec<&Location> = LOCATIONS.iter().collect();
    let header = format!("We have {} MedRehab Group locations:", LOCATIONS.len());

    Json(LocationsResponse {
        success: true,
        message: directory_text(&header, &all),
    })
}

/// `POST /find-location` — records whose FSA matches the caller's postal
/// code prefix. With no match the full directory is returned instead of an
/// empty result, still as success.
pub async fn find_location(
    body: Option<Json<FindLocationRequest>>,
) -> Result<Json<LocationsResponse>, AppError> {
    // A malformed or absent body reads the same as a missing field.
    let postal_code = body.map(|Json(req)| req.postal_code).unwrap_or_default();

    tracing::info!(postal_code = %postal_code, "Find location request received");

    if postal_code.is_empty() {
        return Err(AppError::MissingParameter("postal_code"));
    }

    let prefix = fsa_prefix(&postal_code);
    let matches = find_by_prefix(&prefix);

    let message = if matches.is_empty() {
        let all: Vec<&Location> = LOCATIONS.iter().collect();
        let header = format!(
            "No MedRehab Group locations found near postal code {}. Here are all our locations:",
            postal_code
        );
        directory_text(&header, &all)
    } else {
        let header = format!("MedRehab Group locations near {}:", postal_code);
        directory_text(&header, &matches)
    };

    Ok(Json(LocationsResponse {
        success: true,
        message,
    }))
}

/// Empty success for OPTIONS on the protected routes; pre-flight is never
/// authenticated.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
