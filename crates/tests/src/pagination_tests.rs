use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::PaginationInfo;
use shared_ui::Pagination;

use crate::common::{count, is_disabled, opening_tag, render};

fn button(html: &str, title: &str) -> String {
    opening_tag(html, &format!("title=\"{title}\""))
        .unwrap_or_else(|| panic!("no {title} button"))
        .to_string()
}

#[test]
fn middle_page_shows_range_and_enables_everything() {
    fn app() -> Element {
        rsx! {
            Pagination { pagination: PaginationInfo::new(3, 20, 100) }
        }
    }
    let html = render(app);

    assert!(html.contains("41 to 60 of 100"));
    assert!(html.contains("Page 3 of 5"));
    for title in ["First page", "Previous page", "Next page", "Last page"] {
        assert!(!is_disabled(&button(&html, title)), "{title} should be enabled");
    }
}

#[test]
fn empty_result_disables_all_navigation() {
    fn app() -> Element {
        rsx! {
            Pagination { pagination: PaginationInfo::new(1, 20, 0) }
        }
    }
    let html = render(app);

    assert!(html.contains("0 to 0 of 0"));
    assert!(html.contains("Page 0 of 0"));
    for title in ["First page", "Previous page", "Next page", "Last page"] {
        assert!(is_disabled(&button(&html, title)), "{title} should be disabled");
    }
}

#[test]
fn first_and_last_pages_disable_one_side() {
    fn first() -> Element {
        rsx! {
            Pagination { pagination: PaginationInfo::new(1, 10, 35) }
        }
    }
    let html = render(first);
    assert!(is_disabled(&button(&html, "First page")));
    assert!(is_disabled(&button(&html, "Previous page")));
    assert!(!is_disabled(&button(&html, "Next page")));

    fn last() -> Element {
        rsx! {
            Pagination { pagination: PaginationInfo::new(4, 10, 35) }
        }
    }
    let html = render(last);
    assert!(html.contains("31 to 35 of 35"));
    assert!(!is_disabled(&button(&html, "Previous page")));
    assert!(is_disabled(&button(&html, "Next page")));
    assert!(is_disabled(&button(&html, "Last page")));
}

#[test]
fn page_size_selector_lists_options() {
    fn defaults() -> Element {
        rsx! {
            Pagination { pagination: PaginationInfo::new(1, 20, 100) }
        }
    }
    let html = render(defaults);
    assert_eq!(count(&html, "<option"), 4);
    assert!(html.contains("100 / page"));

    fn custom() -> Element {
        rsx! {
            Pagination {
                pagination: PaginationInfo::new(1, 25, 100),
                page_size_options: vec![25, 75],
            }
        }
    }
    let html = render(custom);
    assert_eq!(count(&html, "<option"), 2);
    assert!(html.contains("75 / page"));
}

#[test]
fn current_page_size_is_listed_even_when_not_offered() {
    fn app() -> Element {
        rsx! {
            Pagination {
                pagination: PaginationInfo::new(1, 30, 100),
                page_size_options: vec![10, 50],
            }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "<option"), 3);
    let options: Vec<&str> = html
        .match_indices(" / page")
        .map(|(at, _)| {
            let start = html[..at].rfind('>').map_or(0, |i| i + 1);
            &html[start..at]
        })
        .collect();
    assert_eq!(options, vec!["10", "30", "50"]);
}
