use crate::api::middleware::error::{ApiError, ApiResult};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Canonical text encoding for key dates, on the wire and in storage.
/// Second precision, so equal keys compare equal as plain text.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render a key date in the canonical encoding.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Parse a key date from a URL path segment.
///
/// Accepts the canonical `YYYY-MM-DDTHH:MM:SS` form and a bare `YYYY-MM-DD`,
/// which resolves to midnight. Anything else is a client error.
pub fn parse_date_segment(raw: &str) -> ApiResult<NaiveDateTime> {
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
        return Ok(value);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(value) = date.and_hms_opt(0, 0, 0) {
            return Ok(value);
        }
    }

    Err(ApiError::BadRequest(format!(
        "Invalid date segment '{}'. Expected YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
        raw
    )))
}

/// Parse a key date read back from storage. Stored values are always in the
/// canonical encoding, so a failure here means the row is corrupt.
pub fn parse_stored_datetime(raw: &str) -> ApiResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .map_err(|e| ApiError::Internal(format!("Corrupt datetime '{}' in storage: {}", raw, e)))
}

/// Drop sub-second precision so an echoed entity matches what storage holds.
pub fn truncate_to_seconds(value: NaiveDateTime) -> NaiveDateTime {
    value.with_nanosecond(0).unwrap_or(value)
}
