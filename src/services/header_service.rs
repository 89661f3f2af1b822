use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::*,
};

/// Service for holiday header (OHLD) operations.
#[derive(Clone)]
pub struct HeaderService {
    db: Database,
}

impl HeaderService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List every header with its ranges attached, projected for the wire.
    pub async fn list_headers(&self) -> ApiResult<Vec<HolidayHeaderProjection>> {
        let headers = self.db.list_headers().await?;
        let ranges = self.db.list_ranges().await?;

        Ok(project_headers(headers, ranges))
    }

    /// Single header by code, scalar columns only.
    pub async fn get_header(&self, code: &str) -> ApiResult<HolidayHeader> {
        self.db.get_header(code).await?.ok_or_else(|| {
            ApiError::NotFound(format!("No record found with holiday code: {}", code))
        })
    }

    /// Column constraints (code length, one-character flags) are enforced by
    /// the schema, not re-checked here.
    pub async fn create_header(&self, header: HolidayHeader) -> ApiResult<HolidayHeader> {
        self.db.create_header(&header).await?;

        Ok(header)
    }

    /// Full replace of the header addressed by the URL code.
    pub async fn replace_header(&self, code: &str, header: HolidayHeader) -> ApiResult<()> {
        // 1. The URL key and the body key must agree
        if code != header.code {
            return Err(ApiError::BadRequest(
                "The code in the URL does not match the code in the request body".to_string(),
            ));
        }

        // 2. Apply the update
        self.db.update_header(&header).await
    }

    /// Delete the header and, through the cascade, all of its ranges.
    pub async fn delete_header(&self, code: &str) -> ApiResult<()> {
        self.db.delete_header(code).await
    }
}
