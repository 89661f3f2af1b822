use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::HolidayHeader,
};
use sqlx::{any::AnyRow, Row};

impl Database {
    /// All holiday headers, ordered by code.
    pub async fn list_headers(&self) -> ApiResult<Vec<HolidayHeader>> {
        let rows = sqlx::query(
            "SELECT code, window_from, window_to, is_current_year, ignore_window, week_number_rule
             FROM holiday_headers
             ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(header_from_row).collect()
    }

    pub async fn get_header(&self, code: &str) -> ApiResult<Option<HolidayHeader>> {
        let row = sqlx::query(
            "SELECT code, window_from, window_to, is_current_year, ignore_window, week_number_rule
             FROM holiday_headers
             WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(header_from_row).transpose()
    }

    pub async fn header_exists(&self, code: &str) -> ApiResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM holiday_headers WHERE code = ?",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Insert a new header. The duplicate check and the insert run in one
    /// transaction so create is a single unit of work.
    pub async fn create_header(&self, header: &HolidayHeader) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM holiday_headers WHERE code = ?",
        )
        .bind(&header.code)
        .fetch_one(&mut *tx)
        .await?;

        if count > 0 {
            return Err(ApiError::Conflict(format!(
                "A record already exists with holiday code: {}",
                header.code
            )));
        }

        sqlx::query(
            "INSERT INTO holiday_headers (code, window_from, window_to, is_current_year, ignore_window, week_number_rule)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&header.code)
        .bind(&header.window_from)
        .bind(&header.window_to)
        .bind(&header.is_current_year)
        .bind(&header.ignore_window)
        .bind(&header.week_number_rule)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Full-row replace keyed by code. A zero-row update resolves through an
    /// existence check: a vanished row is NotFound, anything else is a
    /// concurrency fault left for the caller.
    pub async fn update_header(&self, header: &HolidayHeader) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE holiday_headers
             SET window_from = ?, window_to = ?, is_current_year = ?, ignore_window = ?, week_number_rule = ?
             WHERE code = ?",
        )
        .bind(&header.window_from)
        .bind(&header.window_to)
        .bind(&header.is_current_year)
        .bind(&header.ignore_window)
        .bind(&header.week_number_rule)
        .bind(&header.code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if !self.header_exists(&header.code).await? {
                return Err(ApiError::NotFound(format!(
                    "No record found with holiday code: {}",
                    header.code
                )));
            }
            return Err(ApiError::Concurrency(format!(
                "Holiday header '{}' was changed by another request",
                header.code
            )));
        }

        Ok(())
    }

    /// Fetch-then-remove in one transaction. Deleting a header cascades to its
    /// ranges through the foreign key.
    pub async fn delete_header(&self, code: &str) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT code FROM holiday_headers WHERE code = ?")
            .bind(code)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_none() {
            return Err(ApiError::NotFound(format!(
                "No record found with holiday code: {}",
                code
            )));
        }

        sqlx::query("DELETE FROM holiday_headers WHERE code = ?")
            .bind(code)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

fn header_from_row(row: &AnyRow) -> ApiResult<HolidayHeader> {
    Ok(HolidayHeader {
        code: row.try_get("code")?,
        window_from: row.try_get("window_from")?,
        window_to: row.try_get("window_to")?,
        is_current_year: row.try_get("is_current_year")?,
        ignore_window: row.try_get("ignore_window")?,
        week_number_rule: row.try_get("week_number_rule")?,
    })
}
