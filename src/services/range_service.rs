use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::HolidayRange,
    services::datetime::{parse_date_segment, truncate_to_seconds},
};

/// Service for holiday range (HLD1) operations. Ranges are addressed by the
/// composite key (code, start_date, end_date), which arrives as three URL
/// segments.
#[derive(Clone)]
pub struct RangeService {
    db: Database,
}

impl RangeService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_ranges(&self) -> ApiResult<Vec<HolidayRange>> {
        self.db.list_ranges().await
    }

    pub async fn get_range(
        &self,
        code: &str,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<HolidayRange> {
        let start_date = parse_date_segment(start_date)?;
        let end_date = parse_date_segment(end_date)?;

        self.db
            .get_range(code, &start_date, &end_date)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound("No record found with the specified composite key".to_string())
            })
    }

    /// Stored datetimes carry second precision, so the payload is truncated
    /// before it is written and the echoed entity matches what a later read
    /// returns.
    pub async fn create_range(&self, mut range: HolidayRange) -> ApiResult<HolidayRange> {
        // 1. Normalize the key dates
        range.start_date = truncate_to_seconds(range.start_date);
        range.end_date = truncate_to_seconds(range.end_date);

        // 2. Save to database (duplicate key is a 409, missing parent
        //    header is a foreign key violation)
        self.db.create_range(&range).await?;

        Ok(range)
    }

    /// Replace the range addressed by the URL key.
    pub async fn replace_range(
        &self,
        code: &str,
        start_date: &str,
        end_date: &str,
        mut range: HolidayRange,
    ) -> ApiResult<()> {
        let start_date = parse_date_segment(start_date)?;
        let end_date = parse_date_segment(end_date)?;

        range.start_date = truncate_to_seconds(range.start_date);
        range.end_date = truncate_to_seconds(range.end_date);

        // 1. The URL key and the body key must agree on all three parts
        if code != range.code || start_date != range.start_date || end_date != range.end_date {
            return Err(ApiError::BadRequest(
                "The composite key in the URL does not match the one in the request body"
                    .to_string(),
            ));
        }

        // 2. Apply the update
        self.db.update_range(&range).await
    }

    pub async fn delete_range(
        &self,
        code: &str,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<()> {
        let start_date = parse_date_segment(start_date)?;
        let end_date = parse_date_segment(end_date)?;

        self.db.delete_range(code, &start_date, &end_date).await
    }
}
