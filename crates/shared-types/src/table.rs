use serde::{Deserialize, Serialize};

use crate::common::PaginationMeta;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The single active sort of a table. Absence of a sort is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Advance the sort state after a header activation on `field`.
///
/// Repeated activation of the same field cycles asc → desc → none.
/// Activating a different field always restarts at ascending.
pub fn next_sort(current: Option<&SortDescriptor>, field: &str) -> Option<SortDescriptor> {
    match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Asc => Some(SortDescriptor::desc(field)),
            SortDirection::Desc => None,
        },
        _ => Some(SortDescriptor::asc(field)),
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page position supplied by the caller. Values are displayed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationInfo {
    /// Build pagination info, deriving `total_pages` from `total` and `page_size`.
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size > 0 {
            total.div_ceil(page_size)
        } else {
            0
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }

    /// 1-based index of the first item on the current page (0 when empty).
    pub fn start_item(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.page.saturating_sub(1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item on the current page.
    pub fn end_item(&self) -> u64 {
        (self.page * self.page_size).min(self.total)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Range text shown beside the navigation controls.
    pub fn range_label(&self) -> String {
        format!(
            "{} to {} of {}",
            self.start_item(),
            self.end_item(),
            self.total
        )
    }
}

impl From<&PaginationMeta> for PaginationInfo {
    fn from(meta: &PaginationMeta) -> Self {
        Self {
            page: meta.page.max(0) as u64,
            page_size: meta.limit.max(0) as u64,
            total: meta.total.max(0) as u64,
            total_pages: meta.total_pages.max(0) as u64,
        }
    }
}
