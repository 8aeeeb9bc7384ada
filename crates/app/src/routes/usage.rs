use dioxus::prelude::*;
use shared_types::{
    AppError, DashboardStats, FilterDescriptor, FilterKind, FilterOption, FilterValues,
    SortDescriptor, UsagePeriod, UsagePoint,
};
use shared_ui::table::client::{self, ClientQuery};
use shared_ui::{Align, Column, DataGrid, FormSelect, RowKey};

use crate::data::usage_stats;

fn usage_columns(period: UsagePeriod) -> Vec<Column<UsagePoint>> {
    vec![
        Column::computed("period", "Period", move |point: &UsagePoint| {
            point.label(period).into()
        }),
        Column::field("date", "Starting").sortable(),
        Column::field("requests", "Requests")
            .sortable()
            .align(Align::Right),
        Column::field("active_users", "Active users")
            .sortable()
            .align(Align::Right),
    ]
}

/// Usage analytics page built from the analytics payload.
#[component]
pub fn Usage() -> Element {
    let stats = use_hook(|| usage_stats().map_err(AppError::from));
    let mut period = use_signal(UsagePeriod::default);
    let columns = use_memo(move || usage_columns(period()));
    let filters = use_hook(|| {
        vec![FilterDescriptor::new("date", "Date", FilterKind::DateRange)]
    });
    let periods = use_hook(|| {
        vec![
            FilterOption::new("day", "Day"),
            FilterOption::new("month", "Month"),
            FilterOption::new("year", "Year"),
        ]
    });
    let row_key = use_hook(|| RowKey::compute(|point: &UsagePoint| point.date.to_string()));
    let mut query = use_signal(|| ClientQuery::new(u64::MAX));

    let stats = match stats {
        Ok(stats) => stats,
        Err(err) => {
            return rsx! {
                p { class: "page-error", "{err.message}" }
            };
        }
    };
    let DashboardStats {
        total_users,
        total_customers,
        active_sessions,
        usage,
    } = stats;

    let columns = columns();
    let page = client::apply(&usage, &columns, &filters, &query.read());

    rsx! {
        div { class: "page-toolbar",
            span { class: "cell-muted", "{total_users} users" }
            span { class: "cell-muted", "{total_customers} customers" }
            span { class: "cell-muted", "{active_sessions} active sessions" }
            FormSelect {
                label: "Group by",
                value: period().as_key().to_string(),
                options: periods.clone(),
                on_select: move |key: String| period.set(UsagePeriod::from_key(&key)),
            }
        }
        DataGrid::<UsagePoint> {
            data: page.rows,
            columns: columns,
            filters: filters.clone(),
            row_key: row_key.clone(),
            show_pagination: false,
            on_sort_change: move |sort: Option<SortDescriptor>| query.write().sort = sort,
            on_filter_change: move |values: FilterValues| query.write().filters = values,
        }
    }
}
