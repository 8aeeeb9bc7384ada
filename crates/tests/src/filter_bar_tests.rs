use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{FilterDescriptor, FilterKind, FilterOption, FilterValue, FilterValues};
use shared_ui::FilterBar;

use crate::common::{count, is_disabled, opening_tag, render};

fn role_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("admin", "Admin"),
        FilterOption::new("viewer", "Viewer"),
    ]
}

#[test]
fn each_kind_renders_its_control() {
    fn app() -> Element {
        rsx! {
            FilterBar {
                filters: vec![
                    FilterDescriptor::new("name", "Name", FilterKind::Text).with_placeholder("Search names"),
                    FilterDescriptor::new("age", "Age", FilterKind::Number),
                    FilterDescriptor::new("joined", "Joined", FilterKind::Date),
                    FilterDescriptor::new("active", "Active between", FilterKind::DateRange),
                    FilterDescriptor::new("role", "Role", FilterKind::Select).with_options(role_options()),
                    FilterDescriptor::new("tags", "Tags", FilterKind::MultiSelect).with_options(role_options()),
                ],
            }
        }
    }
    let html = render(app);

    assert!(html.contains("placeholder=\"Search names\""));
    assert_eq!(count(&html, "type=\"number\""), 1);
    assert_eq!(count(&html, "type=\"date\""), 3, "one date input plus a from/to pair");
    assert!(html.contains(">All</option>"));
    assert_eq!(count(&html, "<option"), 3);
    assert_eq!(count(&html, "type=\"checkbox\""), 2);
    assert_eq!(count(&html, "class=\"filter-label\""), 6);
}

#[test]
fn unknown_kind_renders_label_only() {
    fn app() -> Element {
        let legacy: FilterDescriptor =
            serde_json::from_str(r#"{"id":"region","label":"Region","type":"map"}"#).unwrap();
        let untyped: FilterDescriptor =
            serde_json::from_str(r#"{"id":"misc","label":"Misc"}"#).unwrap();
        rsx! {
            FilterBar { filters: vec![legacy, untyped] }
        }
    }
    let html = render(app);

    assert!(html.contains("Region"));
    assert!(html.contains("Misc"));
    assert_eq!(count(&html, "<input"), 0);
    assert_eq!(count(&html, "<select"), 0);
}

#[test]
fn initial_filters_seed_controls_and_active_count() {
    fn app() -> Element {
        let initial = FilterValues::new()
            .with("name", Some(FilterValue::text("john")))
            .with("role", Some(FilterValue::text("admin")))
            .with("tags", Some(FilterValue::List(vec!["viewer".into()])));
        rsx! {
            FilterBar {
                filters: vec![
                    FilterDescriptor::new("name", "Name", FilterKind::Text),
                    FilterDescriptor::new("role", "Role", FilterKind::Select).with_options(role_options()),
                    FilterDescriptor::new("tags", "Tags", FilterKind::MultiSelect).with_options(role_options()),
                ],
                initial_filters: initial,
            }
        }
    }
    let html = render(app);

    assert!(html.contains("3 active"));
    assert!(html.contains("value=\"john\""));
    let checked = opening_tag(&html, "checked=true")
        .or_else(|| opening_tag(&html, "checked=\"true\""))
        .unwrap();
    assert!(checked.contains("type=\"checkbox\""));
}

#[test]
fn no_active_filters_hides_the_badge() {
    fn app() -> Element {
        rsx! {
            FilterBar {
                filters: vec![FilterDescriptor::new("name", "Name", FilterKind::Text)],
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("active</span>"));
    let clear = opening_tag(&html, "title=\"Clear all filters\"").unwrap();
    assert!(is_disabled(clear), "nothing to clear");
}

#[test]
fn zero_valued_filter_can_still_be_cleared() {
    fn app() -> Element {
        rsx! {
            FilterBar {
                filters: vec![FilterDescriptor::new("seats", "Seats", FilterKind::Number)],
                initial_filters: FilterValues::new().with("seats", Some(FilterValue::Number(0.0))),
            }
        }
    }
    let html = render(app);

    assert!(!html.contains("active</span>"), "zero is stored but not counted");
    assert!(html.contains("value=\"0\""));
    let clear = opening_tag(&html, "title=\"Clear all filters\"").unwrap();
    assert!(!is_disabled(clear));
}

#[test]
fn text_filter_offers_a_clear_button_only_when_filled() {
    fn app() -> Element {
        rsx! {
            FilterBar {
                filters: vec![
                    FilterDescriptor::new("name", "Name", FilterKind::Text),
                    FilterDescriptor::new("email", "Email", FilterKind::Text),
                ],
                initial_filters: FilterValues::new().with("name", Some(FilterValue::text("Ann"))),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("title=\"Clear name\""));
    assert!(!html.contains("title=\"Clear email\""));
}
