use axum::{
    extract::{Path, State},
    http::{
        header::{HeaderName, LOCATION},
        StatusCode,
    },
    Json,
};

use crate::{
    api::middleware::{ApiResult, AppState},
    models::*,
    services::HeaderService,
};

/// GET /api/Ohlds - List all holiday headers with their ranges
pub async fn list_headers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<HolidayHeaderProjection>>> {
    let header_service = HeaderService::new(state.db.clone());

    let headers = header_service.list_headers().await?;

    Ok(Json(headers))
}

/// GET /api/Ohlds/:code - Get a single holiday header (scalar columns only)
pub async fn get_header(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<HolidayHeader>> {
    let header_service = HeaderService::new(state.db.clone());

    let header = header_service.get_header(&code).await?;

    Ok(Json(header))
}

/// POST /api/Ohlds - Create a holiday header
pub async fn create_header(
    State(state): State<AppState>,
    Json(header): Json<HolidayHeader>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<HolidayHeader>)> {
    let header_service = HeaderService::new(state.db.clone());

    let created = header_service.create_header(header).await?;
    let location = format!("/api/Ohlds/{}", created.code);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// PUT /api/Ohlds/:code - Replace a holiday header
pub async fn replace_header(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(header): Json<HolidayHeader>,
) -> ApiResult<StatusCode> {
    let header_service = HeaderService::new(state.db.clone());

    header_service.replace_header(&code, header).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Ohlds/:code - Delete a holiday header and its ranges
pub async fn delete_header(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<StatusCode> {
    let header_service = HeaderService::new(state.db.clone());

    header_service.delete_header(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
