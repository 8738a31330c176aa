pub mod client_ip;
pub mod model;

use crate::domain::LocationRecord;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use client_ip::ClientIp;
use model::{parse_coordinate, ApiError, ApiMessage, JsonLocation, SaveLocationRequest};

pub fn locations_router() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_location_handler))
        .route("/data", get(list_locations_handler))
}

async fn save_location_handler(
    State(state): State<AppState>,
    client_ip: ClientIp,
    Json(body): Json<SaveLocationRequest>,
) -> Result<Json<ApiMessage>, (StatusCode, Json<ApiError>)> {
    // reject before touching the store, so a bad submission never writes
    let (Some(raw_lat), Some(raw_long)) = (body.lat.as_ref(), body.long.as_ref()) else {
        return Err(bad_request("lat & long required"));
    };

    let (Some(lat), Some(long)) = (parse_coordinate(raw_lat), parse_coordinate(raw_long)) else {
        return Err(bad_request("lat & long must be numeric"));
    };

    let record = LocationRecord {
        ip: client_ip.0,
        lat,
        long,
        time: Utc::now(),
    };

    match state.repo.insert_location(&record).await {
        Ok(()) => Ok(Json(ApiMessage {
            message: "Location saved!".to_string(),
        })),
        Err(e) => {
            tracing::error!("failed to save location: {e:#}");
            Err(internal_error("Failed to save"))
        }
    }
}

async fn list_locations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonLocation>>, (StatusCode, Json<ApiError>)> {
    let records = state
        .repo
        .get_locations_newest_first()
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch locations: {e:#}");
            internal_error("Failed to fetch")
        })?;

    let locations: Vec<JsonLocation> = records.iter().map(record_to_json_location).collect();

    Ok(Json(locations))
}

fn record_to_json_location(record: &LocationRecord) -> JsonLocation {
    JsonLocation {
        ip: record.ip.to_owned(),
        lat: record.lat,
        long: record.long,
        time: record.time.to_rfc3339(),
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: message.to_string(),
        }),
    )
}

fn internal_error(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: message.to_string(),
        }),
    )
}
