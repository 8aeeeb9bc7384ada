use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{
    FilterDescriptor, FilterKind, FilterOption, FilterValue, FilterValues, PaginationInfo,
    SortDescriptor,
};
use shared_ui::{Column, DataGrid, FilterBar, ACTIONS_COLUMN};
use std::time::Duration;

use crate::common::{columns, count, new_log, people, Harness, Log};

fn sortable_grid(sorts: Log<Option<SortDescriptor>>) -> Element {
    rsx! {
        DataGrid::<Value> {
            data: people(),
            columns: columns(),
            on_sort_change: move |sort: Option<SortDescriptor>| sorts.borrow_mut().push(sort),
        }
    }
}

#[test]
fn header_clicks_cycle_asc_desc_none() {
    let sorts = new_log();
    let mut grid = Harness::new(sortable_grid, sorts.clone());

    let name = grid.element("data-column", "name");
    for _ in 0..3 {
        grid.click(name);
    }
    assert_eq!(
        *sorts.borrow(),
        vec![
            Some(SortDescriptor::asc("name")),
            Some(SortDescriptor::desc("name")),
            None,
        ]
    );

    let email = grid.element("data-column", "email");
    grid.click(email);
    assert_eq!(sorts.borrow().len(), 3, "email is not sortable");
}

fn paged_grid(pages: Log<u64>) -> Element {
    rsx! {
        DataGrid::<Value> {
            data: people(),
            columns: columns(),
            pagination: PaginationInfo::new(3, 20, 100),
            on_page_change: move |page: u64| pages.borrow_mut().push(page),
        }
    }
}

#[test]
fn footer_buttons_request_absolute_pages() {
    let pages = new_log();
    let mut grid = Harness::new(paged_grid, pages.clone());

    for title in ["Next page", "Previous page", "First page", "Last page"] {
        let button = grid.element("title", title);
        grid.click(button);
    }
    assert_eq!(*pages.borrow(), vec![4, 2, 1, 5]);
}

fn grid_with_actions(clicks: Log<String>) -> Element {
    let mut columns = columns();
    columns.push(Column::rendered(ACTIONS_COLUMN, "", |_: &Value| {
        rsx! { button { "Edit" } }
    }));
    rsx! {
        DataGrid::<Value> {
            data: people(),
            columns: columns,
            on_row_click: move |row: Value| {
                let name = row["name"].as_str().unwrap_or_default().to_string();
                clicks.borrow_mut().push(name);
            },
        }
    }
}

#[test]
fn actions_cells_do_not_trigger_row_clicks() {
    let clicks = new_log();
    let mut grid = Harness::new(grid_with_actions, clicks.clone());

    // The first match of each column is its header.
    let actions = grid.elements("data-column", "actions");
    assert_eq!(actions.len(), 4);
    grid.click(actions[2]);
    assert!(clicks.borrow().is_empty());

    let emails = grid.elements("data-column", "email");
    grid.click(emails[2]);
    let names = grid.elements("data-column", "name");
    grid.click(names[3]);
    assert_eq!(*clicks.borrow(), vec!["Bob".to_string(), "Carol".to_string()]);
}

fn uncontrolled_grid(selections: Log<Vec<String>>) -> Element {
    rsx! {
        DataGrid::<Value> {
            data: people(),
            columns: columns(),
            selectable: true,
            on_selection_change: move |ids: Vec<String>| selections.borrow_mut().push(ids),
        }
    }
}

#[test]
fn uncontrolled_checkboxes_update_and_report_selection() {
    let selections = new_log();
    let mut grid = Harness::new(uncontrolled_grid, selections.clone());

    let rows = grid.elements("aria-label", "Select row");
    assert_eq!(rows.len(), 3);
    grid.change(rows[1], "on");
    assert_eq!(count(&grid.html(), "selected\""), 1);

    let all = grid.element("aria-label", "Select all rows");
    grid.change(all, "on");
    assert_eq!(count(&grid.html(), "selected\""), 3);
    grid.change(all, "on");
    assert_eq!(count(&grid.html(), "selected\""), 0);

    let ids = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    assert_eq!(
        *selections.borrow(),
        vec![ids(&["2"]), ids(&["1", "2", "3"]), ids(&[])]
    );
}

fn controlled_grid(selections: Log<Vec<String>>) -> Element {
    rsx! {
        DataGrid::<Value> {
            data: people(),
            columns: columns(),
            selectable: true,
            selected: vec!["1".to_string()],
            on_selection_change: move |ids: Vec<String>| selections.borrow_mut().push(ids),
        }
    }
}

#[test]
fn controlled_checkboxes_only_report() {
    let selections = new_log();
    let mut grid = Harness::new(controlled_grid, selections.clone());

    let rows = grid.elements("aria-label", "Select row");
    grid.change(rows[1], "on");
    grid.change(rows[1], "on");

    let expected = vec!["1".to_string(), "2".to_string()];
    assert_eq!(*selections.borrow(), vec![expected.clone(), expected]);
    assert_eq!(count(&grid.html(), "selected\""), 1, "the caller did not accept the change");
}

fn role_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("admin", "Admin"),
        FilterOption::new("viewer", "Viewer"),
    ]
}

fn name_filter(changes: Log<FilterValues>) -> Element {
    rsx! {
        FilterBar {
            filters: vec![FilterDescriptor::new("name", "Name", FilterKind::Text)],
            debounce_ms: 100,
            on_filter_change: move |values: FilterValues| changes.borrow_mut().push(values),
        }
    }
}

#[tokio::test]
async fn typing_reports_the_settled_text_once() {
    let changes = new_log();
    let mut bar = Harness::new(name_filter, changes.clone());

    let input = bar.element("placeholder", "Filter by name");
    for text in ["J", "Jo", "Joh", "John"] {
        bar.input(input, text);
    }
    assert!(changes.borrow().is_empty());

    bar.settle(Duration::from_millis(400)).await;
    assert_eq!(
        *changes.borrow(),
        vec![FilterValues::new().with("name", Some(FilterValue::text("John")))]
    );
}

fn name_and_role_filters(changes: Log<FilterValues>) -> Element {
    rsx! {
        FilterBar {
            filters: vec![
                FilterDescriptor::new("name", "Name", FilterKind::Text),
                FilterDescriptor::new("role", "Role", FilterKind::Select).with_options(role_options()),
            ],
            initial_filters: FilterValues::new().with("role", Some(FilterValue::text("admin"))),
            debounce_ms: 100,
            on_filter_change: move |values: FilterValues| changes.borrow_mut().push(values),
        }
    }
}

#[tokio::test]
async fn clear_all_drops_unsettled_keystrokes() {
    let changes = new_log();
    let mut bar = Harness::new(name_and_role_filters, changes.clone());

    let input = bar.element("placeholder", "Filter by name");
    bar.input(input, "Jo");
    let clear = bar.element("title", "Clear all filters");
    bar.click(clear);

    bar.settle(Duration::from_millis(400)).await;
    assert_eq!(*changes.borrow(), vec![FilterValues::new()]);
    let html = bar.html();
    assert!(!html.contains("value=\"Jo\""));
    assert!(!html.contains("active</span>"));
}

#[tokio::test]
async fn typing_after_clear_all_reports_normally() {
    let changes = new_log();
    let mut bar = Harness::new(name_and_role_filters, changes.clone());

    let clear = bar.element("title", "Clear all filters");
    bar.click(clear);
    bar.settle(Duration::from_millis(50)).await;

    let input = bar.element("placeholder", "Filter by name");
    bar.input(input, "Ann");
    bar.settle(Duration::from_millis(400)).await;
    assert_eq!(
        *changes.borrow(),
        vec![
            FilterValues::new(),
            FilterValues::new().with("name", Some(FilterValue::text("Ann"))),
        ]
    );
}

fn seeded_name_filter(changes: Log<FilterValues>) -> Element {
    rsx! {
        FilterBar {
            filters: vec![FilterDescriptor::new("name", "Name", FilterKind::Text)],
            initial_filters: FilterValues::new().with("name", Some(FilterValue::text("Ann"))),
            debounce_ms: 100,
            on_filter_change: move |values: FilterValues| changes.borrow_mut().push(values),
        }
    }
}

#[tokio::test]
async fn clearing_one_field_reports_at_once_and_drops_its_keystrokes() {
    let changes = new_log();
    let mut bar = Harness::new(seeded_name_filter, changes.clone());

    let input = bar.element("placeholder", "Filter by name");
    bar.input(input, "Anne");
    let clear = bar.element("title", "Clear name");
    bar.click(clear);
    assert_eq!(*changes.borrow(), vec![FilterValues::new()]);

    bar.settle(Duration::from_millis(400)).await;
    assert_eq!(changes.borrow().len(), 1, "the typed text was never reported");
    assert!(!bar.html().contains("value=\"Anne\""));
}
