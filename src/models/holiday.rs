use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holiday header master record, one row per holiday code (SAP B1 table OHLD).
///
/// The single-character window flags are opaque pass-through values; their
/// meaning lives upstream in SAP and is not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayHeader {
    pub code: String,
    pub window_from: Option<String>,
    pub window_to: Option<String>,
    pub is_current_year: Option<String>,
    pub ignore_window: Option<String>,
    pub week_number_rule: Option<String>,
}

/// Date interval owned by a holiday header (SAP B1 table HLD1).
///
/// Identified by the full (code, start_date, end_date) tuple. `code` holds the
/// parent key value only; the header object is resolved by lookup when needed,
/// never stored as a live back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRange {
    pub code: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub remarks: Option<String>,
}

// ========== Transfer shapes (list-headers response) ==========

/// Flattened header shape for the list response. Carries plain values only,
/// so serialization cannot run into a parent/child reference cycle.
#[derive(Debug, Serialize)]
pub struct HolidayHeaderProjection {
    pub code: String,
    pub window_from: Option<String>,
    pub window_to: Option<String>,
    pub is_current_year: Option<String>,
    pub ignore_window: Option<String>,
    pub week_number_rule: Option<String>,
    pub ranges: Vec<HolidayRangeProjection>,
}

/// Flat (code, start, end, remarks) tuple for a child range.
#[derive(Debug, Serialize)]
pub struct HolidayRangeProjection {
    pub code: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub remarks: Option<String>,
}

impl From<HolidayRange> for HolidayRangeProjection {
    fn from(range: HolidayRange) -> Self {
        Self {
            code: range.code,
            start_date: range.start_date,
            end_date: range.end_date,
            remarks: range.remarks,
        }
    }
}

/// Group pre-loaded ranges under their headers and flatten both sides.
///
/// Pure transformation: headers keep their input order, and each header's
/// ranges keep the order they were loaded in. A header with no ranges gets an
/// empty collection, and ranges whose header is missing from `headers` are
/// dropped (the foreign key makes that combination unreachable in practice).
pub fn project_headers(
    headers: Vec<HolidayHeader>,
    ranges: Vec<HolidayRange>,
) -> Vec<HolidayHeaderProjection> {
    let mut grouped: HashMap<String, Vec<HolidayRangeProjection>> = HashMap::new();
    for range in ranges {
        grouped
            .entry(range.code.clone())
            .or_default()
            .push(HolidayRangeProjection::from(range));
    }

    headers
        .into_iter()
        .map(|header| {
            let ranges = grouped.remove(&header.code).unwrap_or_default();
            HolidayHeaderProjection {
                code: header.code,
                window_from: header.window_from,
                window_to: header.window_to,
                is_current_year: header.is_current_year,
                ignore_window: header.ignore_window,
                week_number_rule: header.week_number_rule,
                ranges,
            }
        })
        .collect()
}
