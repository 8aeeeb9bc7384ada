use dioxus::prelude::*;
use shared_types::{
    AccountStatus, FilterDescriptor, FilterKind, FilterOption, FilterValues, SortDescriptor,
    TableConfig, UserRecord, UserRole,
};
use shared_ui::table::client::{self, ClientQuery};
use shared_ui::{
    Align, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Column, DataGrid, RowFn,
    ACTIONS_COLUMN,
};

use crate::data::seed_users;

pub fn role_badge_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::Editor => BadgeVariant::Primary,
        UserRole::Viewer => BadgeVariant::Outline,
    }
}

pub fn status_badge_variant(status: AccountStatus) -> BadgeVariant {
    match status {
        AccountStatus::Active => BadgeVariant::Success,
        AccountStatus::Invited => BadgeVariant::Warning,
        AccountStatus::Suspended => BadgeVariant::Secondary,
    }
}

fn user_columns() -> Vec<Column<UserRecord>> {
    vec![
        Column::field("name", "Name").sortable().filterable(),
        Column::field("email", "Email").sortable(),
        Column::field("role", "Role")
            .sortable()
            .render_with(|user: &UserRecord| {
                let label = user.role.display_name();
                rsx! {
                    Badge { variant: role_badge_variant(user.role), "{label}" }
                }
            }),
        Column::field("status", "Status").render_with(|user: &UserRecord| {
            let label = user.status.display_name();
            rsx! {
                Badge { variant: status_badge_variant(user.status), "{label}" }
            }
        }),
        Column::field("created_at", "Joined")
            .sortable()
            .align(Align::Right)
            .width("8rem"),
        Column::rendered(ACTIONS_COLUMN, "", |user: &UserRecord| {
            let id = user.id;
            rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| tracing::info!(user = id, "edit requested"),
                    "Edit"
                }
            }
        })
        .align(Align::Right),
    ]
}

fn user_filters() -> Vec<FilterDescriptor> {
    vec![
        FilterDescriptor::new("name", "Name", FilterKind::Text),
        FilterDescriptor::new("role", "Role", FilterKind::Select).with_options(vec![
            FilterOption::new("admin", "Admin"),
            FilterOption::new("editor", "Editor"),
            FilterOption::new("viewer", "Viewer"),
        ]),
        FilterDescriptor::new("status", "Status", FilterKind::MultiSelect).with_options(vec![
            FilterOption::new("active", "Active"),
            FilterOption::new("invited", "Invited"),
            FilterOption::new("suspended", "Suspended"),
        ]),
        FilterDescriptor::new("created_at", "Joined", FilterKind::DateRange),
    ]
}

/// Users page. The whole roster is in memory, so filtering, sorting and
/// paging run locally.
#[component]
pub fn Users() -> Element {
    let config: TableConfig = use_context();
    let users = use_hook(seed_users);
    let columns = use_hook(user_columns);
    let filters = use_hook(user_filters);
    let row_class = use_hook(|| {
        RowFn::new(|user: &UserRecord| {
            if user.status == AccountStatus::Suspended {
                "cell-muted".to_string()
            } else {
                String::new()
            }
        })
    });

    let mut query = use_signal(|| ClientQuery {
        sort: Some(SortDescriptor::asc("name")),
        ..ClientQuery::new(config.default_page_size)
    });
    let mut selected = use_signal(Vec::<String>::new);
    let mut opened = use_signal(|| None::<String>);

    let page = client::apply(&users, &columns, &filters, &query.read());
    let selected_count = selected.read().len();
    let opened_label = opened
        .read()
        .as_ref()
        .map(|name| format!("Last opened: {name}"))
        .unwrap_or_default();

    rsx! {
        div { class: "page-toolbar",
            Badge { variant: BadgeVariant::Secondary, "{selected_count} selected" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: selected_count == 0,
                onclick: move |_| selected.set(Vec::new()),
                "Clear selection"
            }
            span { class: "cell-muted", "{opened_label}" }
        }
        DataGrid::<UserRecord> {
            data: page.rows,
            columns: columns.clone(),
            pagination: page.pagination,
            filters: filters.clone(),
            initial_sort: SortDescriptor::asc("name"),
            selectable: true,
            selected: selected(),
            row_clickable: true,
            row_class_name: row_class.clone(),
            on_sort_change: move |sort: Option<SortDescriptor>| {
                let mut q = query.write();
                q.sort = sort;
                q.page = 1;
            },
            on_filter_change: move |values: FilterValues| {
                let mut q = query.write();
                q.filters = values;
                q.page = 1;
            },
            on_page_change: move |next: u64| query.write().page = next,
            on_page_size_change: move |size: u64| {
                let mut q = query.write();
                q.page_size = size;
                q.page = 1;
            },
            on_selection_change: move |ids: Vec<String>| selected.set(ids),
            on_row_click: move |user: UserRecord| {
                tracing::info!(user = user.id, "user opened");
                opened.set(Some(user.name));
            },
        }
    }
}
