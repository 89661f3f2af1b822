#![allow(unused_imports)]
#![allow(dead_code)]
pub mod test_db;

pub use test_db::*;

use chrono::{NaiveDate, NaiveDateTime};
use sap_holiday_api::models::{HolidayHeader, HolidayRange};

pub fn sample_header(code: &str) -> HolidayHeader {
    HolidayHeader {
        code: code.to_string(),
        window_from: Some("1".to_string()),
        window_to: Some("5".to_string()),
        is_current_year: Some("Y".to_string()),
        ignore_window: Some("N".to_string()),
        week_number_rule: Some("A".to_string()),
    }
}

pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub fn sample_range(code: &str, start: NaiveDateTime, end: NaiveDateTime) -> HolidayRange {
    HolidayRange {
        code: code.to_string(),
        start_date: start,
        end_date: end,
        remarks: Some("Public holiday".to_string()),
    }
}
