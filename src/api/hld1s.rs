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
    models::HolidayRange,
    services::{datetime::format_datetime, RangeService},
};

/// GET /api/Hld1s - List all holiday ranges
pub async fn list_ranges(State(state): State<AppState>) -> ApiResult<Json<Vec<HolidayRange>>> {
    let range_service = RangeService::new(state.db.clone());

    let ranges = range_service.list_ranges().await?;

    Ok(Json(ranges))
}

/// GET /api/Hld1s/:code/:start_date/:end_date - Get one range by composite key
pub async fn get_range(
    State(state): State<AppState>,
    Path((code, start_date, end_date)): Path<(String, String, String)>,
) -> ApiResult<Json<HolidayRange>> {
    let range_service = RangeService::new(state.db.clone());

    let range = range_service
        .get_range(&code, &start_date, &end_date)
        .await?;

    Ok(Json(range))
}

/// POST /api/Hld1s - Create a holiday range
pub async fn create_range(
    State(state): State<AppState>,
    Json(range): Json<HolidayRange>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<HolidayRange>)> {
    let range_service = RangeService::new(state.db.clone());

    let created = range_service.create_range(range).await?;
    let location = format!(
        "/api/Hld1s/{}/{}/{}",
        created.code,
        format_datetime(&created.start_date),
        format_datetime(&created.end_date)
    );

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// PUT /api/Hld1s/:code/:start_date/:end_date - Replace a holiday range
pub async fn replace_range(
    State(state): State<AppState>,
    Path((code, start_date, end_date)): Path<(String, String, String)>,
    Json(range): Json<HolidayRange>,
) -> ApiResult<StatusCode> {
    let range_service = RangeService::new(state.db.clone());

    range_service
        .replace_range(&code, &start_date, &end_date, range)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Hld1s/:code/:start_date/:end_date - Delete a holiday range
pub async fn delete_range(
    State(state): State<AppState>,
    Path((code, start_date, end_date)): Path<(String, String, String)>,
) -> ApiResult<StatusCode> {
    let range_service = RangeService::new(state.db.clone());

    range_service
        .delete_range(&code, &start_date, &end_date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
