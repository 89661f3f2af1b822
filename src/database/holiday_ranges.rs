use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::HolidayRange,
    services::datetime::{format_datetime, parse_stored_datetime},
};
use chrono::NaiveDateTime;
use sqlx::{any::AnyRow, Row};

impl Database {
    /// All holiday ranges, ordered by the composite key. The stored format
    /// sorts lexicographically in date order, so this is chronological per
    /// calendar.
    pub async fn list_ranges(&self) -> ApiResult<Vec<HolidayRange>> {
        let rows = sqlx::query(
            "SELECT code, start_date, end_date, remarks
             FROM holiday_ranges
             ORDER BY code, start_date, end_date",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(range_from_row).collect()
    }

    pub async fn get_range(
        &self,
        code: &str,
        start_date: &NaiveDateTime,
        end_date: &NaiveDateTime,
    ) -> ApiResult<Option<HolidayRange>> {
        let row = sqlx::query(
            "SELECT code, start_date, end_date, remarks
             FROM holiday_ranges
             WHERE code = ? AND start_date = ? AND end_date = ?",
        )
        .bind(code)
        .bind(format_datetime(start_date))
        .bind(format_datetime(end_date))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(range_from_row).transpose()
    }

    pub async fn range_exists(
        &self,
        code: &str,
        start_date: &NaiveDateTime,
        end_date: &NaiveDateTime,
    ) -> ApiResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM holiday_ranges WHERE code = ? AND start_date = ? AND end_date = ?",
        )
        .bind(code)
        .bind(format_datetime(start_date))
        .bind(format_datetime(end_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Insert a new range. Duplicate check and insert share one transaction.
    /// A missing parent header surfaces as a foreign key violation from the
    /// driver.
    pub async fn create_range(&self, range: &HolidayRange) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM holiday_ranges WHERE code = ? AND start_date = ? AND end_date = ?",
        )
        .bind(&range.code)
        .bind(format_datetime(&range.start_date))
        .bind(format_datetime(&range.end_date))
        .fetch_one(&mut *tx)
        .await?;

        if count > 0 {
            return Err(ApiError::Conflict(
                "A record already exists with that composite key".to_string(),
            ));
        }

        sqlx::query(
            "INSERT INTO holiday_ranges (code, start_date, end_date, remarks)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&range.code)
        .bind(format_datetime(&range.start_date))
        .bind(format_datetime(&range.end_date))
        .bind(&range.remarks)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Replace the non-key column of a range addressed by its full composite
    /// key. Zero rows affected resolves to NotFound when the row is gone and
    /// to a concurrency fault otherwise.
    pub async fn update_range(&self, range: &HolidayRange) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE holiday_ranges
             SET remarks = ?
             WHERE code = ? AND start_date = ? AND end_date = ?",
        )
        .bind(&range.remarks)
        .bind(&range.code)
        .bind(format_datetime(&range.start_date))
        .bind(format_datetime(&range.end_date))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if !self
                .range_exists(&range.code, &range.start_date, &range.end_date)
                .await?
            {
                return Err(ApiError::NotFound(
                    "No record found with the specified composite key".to_string(),
                ));
            }
            return Err(ApiError::Concurrency(format!(
                "Holiday range for '{}' was changed by another request",
                range.code
            )));
        }

        Ok(())
    }

    /// Fetch-then-remove in one transaction.
    pub async fn delete_range(
        &self,
        code: &str,
        start_date: &NaiveDateTime,
        end_date: &NaiveDateTime,
    ) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(
            "SELECT code FROM holiday_ranges WHERE code = ? AND start_date = ? AND end_date = ?",
        )
        .bind(code)
        .bind(format_datetime(start_date))
        .bind(format_datetime(end_date))
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_none() {
            return Err(ApiError::NotFound(
                "No record found with the specified composite key".to_string(),
            ));
        }

        sqlx::query("DELETE FROM holiday_ranges WHERE code = ? AND start_date = ? AND end_date = ?")
            .bind(code)
            .bind(format_datetime(start_date))
            .bind(format_datetime(end_date))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

fn range_from_row(row: &AnyRow) -> ApiResult<HolidayRange> {
    let start_date: String = row.try_get("start_date")?;
    let end_date: String = row.try_get("end_date")?;

    Ok(HolidayRange {
        code: row.try_get("code")?,
        start_date: parse_stored_datetime(&start_date)?,
        end_date: parse_stored_datetime(&end_date)?,
        remarks: row.try_get("remarks")?,
    })
}
