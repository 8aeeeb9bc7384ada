use dioxus::prelude::*;
use shared_types::{CustomerRecord, FilterValues, PaginationInfo, SortDescriptor, TableConfig};
use shared_ui::{Align, Badge, BadgeVariant, Column, DataGrid, RowKey};

use crate::routes::users::status_badge_variant;
use crate::services::{customer_filters, fetch_customers, CustomerQuery};

fn plan_badge_variant(plan: &str) -> BadgeVariant {
    match plan {
        "enterprise" => BadgeVariant::Primary,
        "pro" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

fn customer_columns() -> Vec<Column<CustomerRecord>> {
    vec![
        Column::field("company", "Company").sortable(),
        Column::property("contact", "Contact", "contact_email"),
        Column::field("plan", "Plan")
            .sortable()
            .render_with(|customer: &CustomerRecord| {
                let plan = customer.plan.clone();
                rsx! {
                    Badge { variant: plan_badge_variant(&plan), "{plan}" }
                }
            }),
        Column::field("seats", "Seats").sortable().align(Align::Right),
        Column::field("renewal_date", "Renewal").sortable(),
        Column::field("status", "Status").render_with(|customer: &CustomerRecord| {
            let label = customer.status.display_name();
            rsx! {
                Badge { variant: status_badge_variant(customer.status), "{label}" }
            }
        }),
    ]
}

/// Customers page. Every sort, filter or page change goes back to the
/// customer service for a fresh page.
#[component]
pub fn Customers() -> Element {
    let config: TableConfig = use_context();
    let columns = use_hook(customer_columns);
    let filters = use_hook(customer_filters);
    let page_size = config.default_page_size;

    let mut query = use_signal(|| CustomerQuery {
        page: Some(1),
        limit: Some(page_size as i64),
        ..Default::default()
    });

    let response = use_resource(move || {
        let q = query.read().clone();
        async move {
            let result = fetch_customers(q).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "customer page failed to load");
            }
            result
        }
    });

    let loading = !response.finished();
    let (rows, pagination, error) = match response.read().as_ref() {
        Some(Ok(page)) => (page.data.clone(), page.pagination(), None),
        Some(Err(err)) => (
            Vec::new(),
            PaginationInfo::new(1, page_size, 0),
            Some(err.message.clone()),
        ),
        None => (Vec::new(), PaginationInfo::new(1, page_size, 0), None),
    };

    let error_banner = error.map(|message| {
        rsx! {
            p { class: "page-error", "{message}" }
        }
    });

    rsx! {
        {error_banner}
        DataGrid::<CustomerRecord> {
            data: rows,
            columns: columns.clone(),
            loading: loading,
            pagination: pagination,
            filters: filters.clone(),
            row_key: RowKey::field("id"),
            empty_message: "No customers match these filters".to_string(),
            on_sort_change: move |sort: Option<SortDescriptor>| {
                let mut q = query.write();
                q.sort = sort;
                q.page = Some(1);
            },
            on_filter_change: move |values: FilterValues| {
                let mut q = query.write();
                q.filters = values;
                q.page = Some(1);
            },
            on_page_change: move |next: u64| query.write().page = Some(next as i64),
            on_page_size_change: move |size: u64| {
                let mut q = query.write();
                q.limit = Some(size as i64);
                q.page = Some(1);
            },
        }
    }
}
