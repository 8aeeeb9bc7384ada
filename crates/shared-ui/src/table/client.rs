//! Client-side table mode: filter, sort and paginate an in-memory row set
//! the same way a service would, so pages can hand the grid a fully loaded
//! collection.

use shared_types::{
    parse_filter_date, CellValue, FilterDescriptor, FilterKind, FilterValue, FilterValues,
    PaginationInfo, SortDescriptor, SortDirection,
};
use std::cmp::Ordering;

use super::column::Column;
use super::row::TableRow;

/// Table state driving a client-side query.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientQuery {
    pub sort: Option<SortDescriptor>,
    pub filters: FilterValues,
    pub page: u64,
    pub page_size: u64,
}

impl ClientQuery {
    pub fn new(page_size: u64) -> Self {
        Self {
            sort: None,
            filters: FilterValues::new(),
            page: 1,
            page_size,
        }
    }
}

/// One page of locally processed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientPage<T> {
    pub rows: Vec<T>,
    pub pagination: PaginationInfo,
}

fn column_value<T: TableRow>(columns: &[Column<T>], id: &str, row: &T) -> CellValue {
    columns
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.value(row))
        .unwrap_or_else(|| row.field(id))
}

fn cell_date(value: &CellValue) -> Option<chrono::NaiveDate> {
    match value {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_filter_date(s),
        _ => None,
    }
}

/// Whether `cell` satisfies `filter` for a control of `kind`.
pub fn matches_filter(kind: Option<FilterKind>, cell: &CellValue, filter: &FilterValue) -> bool {
    match filter {
        FilterValue::Null => true,
        FilterValue::Text(needle) => {
            if kind == Some(FilterKind::Date) {
                if let Some(date) = parse_filter_date(needle) {
                    return cell_date(cell) == Some(date);
                }
            }
            let text = cell.to_string();
            if kind == Some(FilterKind::Select) {
                text == *needle
            } else {
                text.to_lowercase().contains(&needle.to_lowercase())
            }
        }
        FilterValue::Number(n) => cell
            .as_f64()
            .or_else(|| cell.to_string().trim().parse().ok())
            .is_some_and(|v| v == *n),
        FilterValue::Bool(b) => match cell {
            CellValue::Bool(v) => v == b,
            other => other.to_string() == b.to_string(),
        },
        FilterValue::Date(d) => cell_date(cell) == Some(*d),
        FilterValue::DateRange { from, to } => match cell_date(cell) {
            Some(date) => {
                from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
            }
            None => false,
        },
        FilterValue::List(items) => {
            let text = cell.to_string();
            items.iter().any(|item| *item == text)
        }
    }
}

/// Rows satisfying every active filter.
pub fn filter_rows<T: TableRow + Clone>(
    rows: &[T],
    columns: &[Column<T>],
    descriptors: &[FilterDescriptor],
    filters: &FilterValues,
) -> Vec<T> {
    rows.iter()
        .filter(|row| {
            filters.iter().all(|(id, value)| {
                let kind = descriptors.iter().find(|d| d.id == *id).and_then(|d| d.kind);
                matches_filter(kind, &column_value(columns, id, *row), value)
            })
        })
        .cloned()
        .collect()
}

/// Stable sort by the sort field's column value.
pub fn sort_rows<T: TableRow>(rows: &mut [T], columns: &[Column<T>], sort: Option<&SortDescriptor>) {
    let Some(sort) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let left = column_value(columns, &sort.field, a);
        let right = column_value(columns, &sort.field, b);
        match (left.is_empty(), right.is_empty()) {
            // Empty values stay last in both directions.
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match sort.direction {
                SortDirection::Asc => left.compare(&right),
                SortDirection::Desc => right.compare(&left),
            },
        }
    });
}

/// Slice out `page` (1-based) of `rows`.
pub fn paginate<T: Clone>(rows: &[T], page: u64, page_size: u64) -> ClientPage<T> {
    let pagination = PaginationInfo::new(page, page_size, rows.len() as u64);
    let start = (page.saturating_sub(1) * page_size) as usize;
    let page_rows = rows
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();
    ClientPage {
        rows: page_rows,
        pagination,
    }
}

/// Filter, sort and paginate `rows` for `query`.
pub fn apply<T: TableRow + Clone>(
    rows: &[T],
    columns: &[Column<T>],
    descriptors: &[FilterDescriptor],
    query: &ClientQuery,
) -> ClientPage<T> {
    let mut matching = filter_rows(rows, columns, descriptors, &query.filters);
    sort_rows(&mut matching, columns, query.sort.as_ref());
    paginate(&matching, query.page, query.page_size)
}
