use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronLeft, LdChevronRight, LdChevronsLeft, LdChevronsRight,
};
use dioxus_free_icons::Icon;
use shared_types::{FilterOption, PaginationInfo, TableConfig};

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::form_select::FormSelect;

/// Page navigation footer with a range summary and page-size selector.
///
/// Buttons request absolute page numbers; the owner reloads and passes the
/// new `pagination` back in.
#[component]
pub fn Pagination(
    pagination: PaginationInfo,
    #[props(default)] page_size_options: Vec<u64>,
    #[props(default)] on_page_change: Option<EventHandler<u64>>,
    #[props(default)] on_page_size_change: Option<EventHandler<u64>>,
) -> Element {
    let mut options = if page_size_options.is_empty() {
        TableConfig::default().page_size_options
    } else {
        page_size_options
    };
    // The current size is always selectable, even when the caller's list
    // does not offer it.
    if !options.contains(&pagination.page_size) {
        options.push(pagination.page_size);
        options.sort_unstable();
    }
    let size_choices: Vec<FilterOption> = options
        .iter()
        .map(|size| FilterOption::new(size.to_string(), format!("{size} / page")))
        .collect();
    let range = pagination.range_label();
    let page = pagination.page;
    let total_pages = pagination.total_pages;
    let shown_page = if total_pages == 0 { 0 } else { page };
    let can_go_previous = pagination.can_go_previous();
    let can_go_next = pagination.can_go_next();

    let go = move |target: u64| {
        tracing::debug!(from = page, to = target, "page change requested");
        if let Some(handler) = &on_page_change {
            handler.call(target);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            span { class: "pagination-info", "{range}" }
            div { class: "pagination-size",
                FormSelect {
                    value: "{pagination.page_size}",
                    options: size_choices,
                    aria_label: "Rows per page",
                    on_select: move |value: String| match value.parse::<u64>() {
                        Ok(size) => {
                            tracing::debug!(size, "page size change requested");
                            if let Some(handler) = &on_page_size_change {
                                handler.call(size);
                            }
                        }
                        Err(_) => tracing::warn!(%value, "ignoring invalid page size"),
                    },
                }
            }
            div { class: "pagination-controls",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_go_previous,
                    title: "First page",
                    onclick: move |_| go(1),
                    Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_go_previous,
                    title: "Previous page",
                    onclick: move |_| go(page.saturating_sub(1)),
                    Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                }
                span { class: "pagination-page", "Page {shown_page} of {total_pages}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_go_next,
                    title: "Next page",
                    onclick: move |_| go(page + 1),
                    Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_go_next,
                    title: "Last page",
                    onclick: move |_| go(total_pages),
                    Icon::<LdChevronsRight> { icon: LdChevronsRight, width: 16, height: 16 }
                }
            }
        }
    }
}
