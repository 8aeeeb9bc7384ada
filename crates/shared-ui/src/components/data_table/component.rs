use dioxus::prelude::*;
use shared_types::{
    next_sort, FilterDescriptor, FilterValues, PaginationInfo, SortDescriptor, SortDirection,
    TableConfig,
};

use crate::components::checkbox::Checkbox;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::table::selection::{select_all, toggle};
use crate::table::{
    render_key, resolve_cell, resolve_row_id, Cell, Column, Ownership, RowFn, RowKey,
    SelectionState, TableRow, ACTIONS_COLUMN,
};

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table {class}",
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell. `column` is exposed as `data-column`.
#[component]
pub fn DataTableColumn(
    #[props(default)] column: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        th {
            "data-column": column,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Table row, marked clickable when it has a click handler.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    let base = if has_click {
        "data-table-row clickable"
    } else {
        "data-table-row"
    };
    rsx! {
        tr {
            class: "{base} {class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(
    #[props(default)] column: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        td {
            "data-column": column,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}

fn sort_indicator(sort: Option<&SortDescriptor>, column: &str) -> &'static str {
    match sort {
        Some(s) if s.field == column => match s.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        },
        _ => "↕",
    }
}

fn header_class<T>(column: &Column<T>, sort: Option<&SortDescriptor>) -> String {
    let mut class = String::from(column.align.class());
    if column.sortable {
        class.push_str(" sortable");
    }
    if sort.is_some_and(|s| s.field == column.id) {
        class.push_str(" sorted");
    }
    class
}

fn row_class(clickable: bool, selected: bool, extra: &str) -> String {
    let mut parts = Vec::new();
    if clickable {
        parts.push("clickable");
    }
    if selected {
        parts.push("selected");
    }
    if !extra.is_empty() {
        parts.push(extra);
    }
    parts.join(" ")
}

/// Props for [`DataGrid`].
#[derive(Props, Clone, PartialEq)]
pub struct DataGridProps<T: TableRow + Clone + PartialEq + 'static> {
    /// Rows for the current page.
    pub data: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[props(default)]
    pub loading: bool,
    /// Pagination footer state. No footer is rendered without it.
    #[props(default)]
    pub pagination: Option<PaginationInfo>,
    #[props(default)]
    pub filters: Vec<FilterDescriptor>,
    /// Seed for the filter bar. Replacing it re-seeds the bar.
    #[props(default)]
    pub initial_filters: FilterValues,
    #[props(default)]
    pub initial_sort: Option<SortDescriptor>,
    #[props(default)]
    pub selectable: bool,
    /// Controlled selection. When absent the grid tracks selection itself.
    #[props(default)]
    pub selected: Option<Vec<String>>,
    #[props(default)]
    pub row_key: Option<RowKey<T>>,
    #[props(default = true)]
    pub show_pagination: bool,
    #[props(default = true)]
    pub show_filters: bool,
    #[props(default)]
    pub empty_message: Option<String>,
    #[props(default)]
    pub page_size_options: Option<Vec<u64>>,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub row_clickable: bool,
    #[props(default)]
    pub row_class_name: Option<RowFn<T, String>>,
    #[props(default)]
    pub on_page_change: Option<EventHandler<u64>>,
    #[props(default)]
    pub on_page_size_change: Option<EventHandler<u64>>,
    #[props(default)]
    pub on_sort_change: Option<EventHandler<Option<SortDescriptor>>>,
    #[props(default)]
    pub on_filter_change: Option<EventHandler<FilterValues>>,
    #[props(default)]
    pub on_selection_change: Option<EventHandler<Vec<String>>>,
    #[props(default)]
    pub on_row_click: Option<EventHandler<T>>,
}

/// Sortable, filterable, selectable data table.
///
/// Sorting is owned by the grid and reported through `on_sort_change`; the
/// caller is expected to reload `data` for the new order. Filters, paging
/// and selection follow the same report-and-reload contract, with selection
/// optionally controlled through `selected`.
#[component]
pub fn DataGrid<T: TableRow + Clone + PartialEq + 'static>(props: DataGridProps<T>) -> Element {
    let config = try_use_context::<TableConfig>().unwrap_or_default();
    let mut sort = use_signal(|| props.initial_sort.clone());
    let mut selection = use_signal(|| SelectionState::new(Ownership::for_prop(&props.selected)));

    let controlled = props.selected.clone();
    let selected_now = selection.read().current(controlled.as_deref());
    let current_sort = sort.read().clone();
    let colspan = props.columns.len() + usize::from(props.selectable);
    let row_key = props.row_key.clone();

    let on_sort_change = props.on_sort_change;
    let on_selection_change = props.on_selection_change;
    let on_row_click = props.on_row_click;
    let on_filter_change = props.on_filter_change;
    let on_page_change = props.on_page_change;
    let on_page_size_change = props.on_page_size_change;

    let all_ids: Vec<String> = props
        .data
        .iter()
        .enumerate()
        .map(|(index, row)| resolve_row_id(row, index, row_key.as_ref()))
        .collect();
    let all_selected = !all_ids.is_empty() && all_ids.iter().all(|id| selected_now.contains(id));

    let select_all_cell = props.selectable.then(|| {
        let controlled = controlled.clone();
        let all_ids = all_ids.clone();
        rsx! {
            DataTableColumn { class: "data-grid-select",
                Checkbox {
                    checked: all_selected,
                    aria_label: "Select all rows",
                    on_change: move |_| {
                        let current = selection.read().current(controlled.as_deref());
                        let next = select_all(&current, all_ids.clone());
                        let reported = selection.write().commit(next);
                        tracing::debug!(selected = reported.len(), "select all toggled");
                        if let Some(handler) = &on_selection_change {
                            handler.call(reported);
                        }
                    },
                }
            }
        }
    });

    let headers = props.columns.iter().map(|column| {
        let id = column.id.clone();
        let sortable = column.sortable;
        let class = header_class(column, current_sort.as_ref());
        let style = column
            .width
            .as_ref()
            .map(|w| format!("width: {w}"))
            .unwrap_or_default();
        let indicator = sort_indicator(current_sort.as_ref(), &column.id);
        rsx! {
            DataTableColumn {
                key: "{column.id}",
                column: column.id.clone(),
                class: "{class}",
                style: "{style}",
                onclick: move |_| {
                    if !sortable {
                        return;
                    }
                    let next = next_sort(sort.read().as_ref(), &id);
                    tracing::debug!(field = %id, sort = ?next, "sort changed");
                    sort.set(next.clone());
                    if let Some(handler) = &on_sort_change {
                        handler.call(next);
                    }
                },
                "{column.header}"
                if sortable {
                    span { class: "data-grid-sort-indicator", "{indicator}" }
                }
            }
        }
    });

    let body = if props.loading {
        rsx! {
            tr { class: "data-grid-loading",
                td { colspan: "{colspan}",
                    div { class: "data-grid-spinner" }
                    span { "{config.loading_message}" }
                }
            }
        }
    } else if props.data.is_empty() {
        let message = props
            .empty_message
            .clone()
            .unwrap_or_else(|| config.empty_message.clone());
        rsx! {
            tr { class: "data-grid-empty",
                td { colspan: "{colspan}", "{message}" }
            }
        }
    } else {
        let rows = props.data.iter().enumerate().map(|(index, row)| {
            let key = render_key(row, index, row_key.as_ref());
            let row_id = all_ids[index].clone();
            let is_selected = selected_now.contains(&row_id);
            let extra = props
                .row_class_name
                .as_ref()
                .map(|f| f.call(row))
                .unwrap_or_default();
            let class = row_class(props.row_clickable, is_selected, &extra);

            let select_cell = props.selectable.then(|| {
                let controlled = controlled.clone();
                let row_id = row_id.clone();
                rsx! {
                    DataTableCell { class: "data-grid-select",
                        Checkbox {
                            checked: is_selected,
                            aria_label: "Select row",
                            on_change: move |_| {
                                let current = selection.read().current(controlled.as_deref());
                                let next = toggle(&current, &row_id);
                                let reported = selection.write().commit(next);
                                tracing::debug!(row = %row_id, selected = reported.len(), "row selection toggled");
                                if let Some(handler) = &on_selection_change {
                                    handler.call(reported);
                                }
                            },
                        }
                    }
                }
            });

            let cells = props.columns.iter().map(|column| {
                let fires = column.id != ACTIONS_COLUMN;
                let clicked = row.clone();
                let content = match resolve_cell(column, row) {
                    Cell::Rendered(element) => element,
                    Cell::Value(value) => rsx! { "{value}" },
                };
                rsx! {
                    DataTableCell {
                        key: "{column.id}",
                        column: column.id.clone(),
                        class: "{column.align.class()}",
                        onclick: move |_| {
                            if !fires {
                                return;
                            }
                            if let Some(handler) = &on_row_click {
                                handler.call(clicked.clone());
                            }
                        },
                        {content}
                    }
                }
            });

            rsx! {
                DataTableRow { key: "{key}", class: "{class}",
                    {select_cell}
                    {cells}
                }
            }
        });
        rsx! {
            {rows}
        }
    };

    let filter_bar = (props.show_filters && !props.filters.is_empty()).then(|| {
        rsx! {
            FilterBar {
                filters: props.filters.clone(),
                initial_filters: props.initial_filters.clone(),
                debounce_ms: config.debounce_ms,
                on_filter_change: move |values: FilterValues| {
                    if let Some(handler) = &on_filter_change {
                        handler.call(values);
                    }
                },
            }
        }
    });

    let page_size_options = props
        .page_size_options
        .clone()
        .unwrap_or_else(|| config.page_size_options.clone());
    let footer = match (props.show_pagination, props.pagination) {
        (true, Some(info)) => Some(rsx! {
            Pagination {
                pagination: info,
                page_size_options: page_size_options,
                on_page_change: move |page: u64| {
                    if let Some(handler) = &on_page_change {
                        handler.call(page);
                    }
                },
                on_page_size_change: move |size: u64| {
                    if let Some(handler) = &on_page_size_change {
                        handler.call(size);
                    }
                },
            }
        }),
        _ => None,
    };

    rsx! {
        div { class: "data-grid {props.class}",
            {filter_bar}
            DataTable {
                DataTableHeader {
                    {select_all_cell}
                    {headers}
                }
                DataTableBody {
                    {body}
                }
            }
            {footer}
        }
    }
}
