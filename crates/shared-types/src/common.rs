use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::table::PaginationInfo;

/// Response envelope returned by the dashboard's service endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: String::new(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
            success: false,
        }
    }

    /// Unwrap the envelope, turning `success: false` or a missing payload
    /// into an [`AppError`] carrying the service message.
    pub fn into_result(self) -> Result<T, AppError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(AppError::service(if self.message.is_empty() {
                "Response contained no data".to_string()
            } else {
                self.message
            })),
            (false, _) => Err(AppError::service(if self.message.is_empty() {
                "Request failed".to_string()
            } else {
                self.message
            })),
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            1
        };
        let has_next = page < total_pages;
        let has_prev = page > 1;

        Self {
            data: items,
            meta: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }

    /// Pagination info for the table's pagination bar.
    pub fn pagination(&self) -> PaginationInfo {
        PaginationInfo::from(&self.meta)
    }
}

/// Helper to normalize pagination params with safe defaults.
pub fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}
