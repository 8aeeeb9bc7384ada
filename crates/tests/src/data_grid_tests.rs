use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{SortDescriptor, TableConfig};
use shared_ui::{Column, DataGrid, RowFn, ACTIONS_COLUMN};

use crate::common::{columns, count, people, render};

#[test]
fn loading_renders_one_spanning_row_and_no_data() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> { data: people(), columns: columns(), loading: true, selectable: true }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "<tr"), 2, "header row plus the loading row");
    assert_eq!(count(&html, "data-grid-loading"), 1);
    assert!(html.contains("colspan=\"4\""), "three columns plus the selection column");
    assert!(html.contains("data-grid-spinner"));
    assert!(html.contains("Loading..."));
    assert!(!html.contains("Alice"));
}

#[test]
fn empty_data_uses_the_caller_message() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: Vec::new(),
                columns: columns(),
                empty_message: "No users yet".to_string(),
            }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "data-grid-empty"), 1);
    assert!(html.contains("colspan=\"3\""));
    assert!(html.contains("No users yet"));
}

#[test]
fn empty_data_falls_back_to_the_default_message() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> { data: Vec::new(), columns: columns() }
        }
    }
    assert!(render(app).contains("No data available"));
}

#[test]
fn table_config_context_overrides_defaults() {
    fn app() -> Element {
        use_context_provider(|| TableConfig {
            loading_message: "Fetching rows".to_string(),
            ..TableConfig::default()
        });
        rsx! {
            DataGrid::<Value> { data: Vec::new(), columns: columns(), loading: true }
        }
    }
    let html = render(app);
    assert!(html.contains("Fetching rows"));
    assert!(!html.contains("Loading..."));
}

#[test]
fn rows_render_in_data_order() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> { data: people(), columns: columns() }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "<tr"), 4);
    let alice = html.find("Alice").unwrap();
    let bob = html.find("Bob").unwrap();
    let carol = html.find("Carol").unwrap();
    assert!(alice < bob && bob < carol);
    assert!(html.contains("bob@example.com"));
}

#[test]
fn missing_fields_render_as_empty_cells() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: vec![json!({"id": 9, "name": "Dana"})],
                columns: columns(),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Dana"));
    assert_eq!(count(&html, "<td"), 3);
}

#[test]
fn initial_sort_marks_the_header() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: people(),
                columns: columns(),
                initial_sort: SortDescriptor::desc("name"),
            }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "▼"), 1);
    assert_eq!(count(&html, "sorted"), 1);
    // Only the sortable column carries an indicator.
    assert_eq!(count(&html, "data-grid-sort-indicator"), 1);
}

#[test]
fn rendered_and_hybrid_columns_use_their_renderers() {
    fn app() -> Element {
        let columns = vec![
            Column::field("name", "Name").render_with(|row: &Value| {
                let name = row["name"].as_str().unwrap_or_default().to_uppercase();
                rsx! { strong { "{name}" } }
            }),
            Column::rendered(ACTIONS_COLUMN, "", |_: &Value| rsx! { button { "Edit" } }),
            Column::blank("notes", "Notes"),
        ];
        rsx! {
            DataGrid::<Value> { data: people(), columns: columns }
        }
    }
    let html = render(app);

    assert!(html.contains("<strong>ALICE</strong>"));
    assert_eq!(count(&html, ">Edit</button>"), 3);
    assert!(html.contains("Notes"));
}

#[test]
fn controlled_selection_marks_rows_and_header() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: people(),
                columns: columns(),
                selectable: true,
                selected: vec!["2".to_string()],
            }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "type=\"checkbox\""), 4);
    assert_eq!(count(&html, "selected\""), 1);
    assert_eq!(count(&html, "data-grid-select"), 4);
}

#[test]
fn row_class_name_and_clickable_rows() {
    fn app() -> Element {
        let row_class = RowFn::new(|row: &Value| {
            if row["role"] == "admin" {
                "is-admin".to_string()
            } else {
                String::new()
            }
        });
        rsx! {
            DataGrid::<Value> {
                data: people(),
                columns: columns(),
                row_clickable: true,
                row_class_name: row_class,
            }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "clickable"), 3);
    assert_eq!(count(&html, "is-admin"), 1);
}

#[test]
fn filter_bar_and_footer_follow_visibility_flags() {
    fn app() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: people(),
                columns: columns(),
                filters: vec![shared_types::FilterDescriptor::new(
                    "name",
                    "Name",
                    shared_types::FilterKind::Text,
                )],
                pagination: shared_types::PaginationInfo::new(1, 20, 3),
                show_filters: false,
                show_pagination: false,
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("filter-bar"));
    assert!(!html.contains("pagination-info"));

    fn visible() -> Element {
        rsx! {
            DataGrid::<Value> {
                data: people(),
                columns: columns(),
                filters: vec![shared_types::FilterDescriptor::new(
                    "name",
                    "Name",
                    shared_types::FilterKind::Text,
                )],
                pagination: shared_types::PaginationInfo::new(1, 20, 3),
            }
        }
    }
    let html = render(visible);
    assert!(html.contains("filter-bar"));
    assert!(html.contains("1 to 3 of 3"));
}
