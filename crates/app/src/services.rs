//! Mock customer service speaking the dashboard's response envelope.

use serde::{Deserialize, Serialize};
use shared_types::{
    normalize_pagination, ApiResponse, AppError, CustomerRecord, FilterDescriptor, FilterKind,
    FilterOption, FilterValues, PaginatedResponse, SortDescriptor,
};
use shared_ui::table::client::{self, ClientQuery};
use std::time::Duration;

use crate::data::seed_customers;

const LATENCY: Duration = Duration::from_millis(250);
const SORTABLE: &[&str] = &["company", "plan", "seats", "renewal_date"];

/// Query parameters accepted by the customer list endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<SortDescriptor>,
    #[serde(default)]
    pub filters: FilterValues,
}

/// Filters the customer endpoint understands.
pub fn customer_filters() -> Vec<FilterDescriptor> {
    vec![
        FilterDescriptor::new("company", "Company", FilterKind::Text)
            .with_placeholder("Search companies"),
        FilterDescriptor::new("plan", "Plan", FilterKind::Select).with_options(vec![
            FilterOption::new("starter", "Starter"),
            FilterOption::new("pro", "Pro"),
            FilterOption::new("enterprise", "Enterprise"),
        ]),
        FilterDescriptor::new("seats", "Seats", FilterKind::Number),
        FilterDescriptor::new("renewal_date", "Renewal", FilterKind::DateRange),
    ]
}

/// Serve one page of customers as a JSON envelope.
pub async fn list_customers(query: CustomerQuery) -> String {
    shared_ui::table::debounce::sleep(LATENCY).await;

    if let Some(sort) = query.sort.as_ref().filter(|s| !SORTABLE.contains(&s.field.as_str())) {
        tracing::warn!(field = %sort.field, "rejected customer sort");
        let failure = ApiResponse::<PaginatedResponse<CustomerRecord>>::failure(format!(
            "Cannot sort customers by {}",
            sort.field
        ));
        return encode(&failure);
    }

    let (page, limit) = normalize_pagination(query.page, query.limit);
    let customers = seed_customers();
    let client_query = ClientQuery {
        sort: query.sort.clone(),
        filters: query.filters.clone(),
        page: page as u64,
        page_size: limit as u64,
    };
    let result = client::apply(&customers, &[], &customer_filters(), &client_query);
    tracing::debug!(
        page,
        limit,
        total = result.pagination.total,
        "customers listed"
    );

    let body = PaginatedResponse::new(result.rows, page, limit, result.pagination.total as i64);
    encode(&ApiResponse::ok(body))
}

fn encode<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to encode customer page");
        serde_json::json!({ "message": err.to_string(), "success": false }).to_string()
    })
}

/// Fetch and unwrap a customer page.
pub async fn fetch_customers(
    query: CustomerQuery,
) -> Result<PaginatedResponse<CustomerRecord>, AppError> {
    let json = list_customers(query).await;
    serde_json::from_str::<ApiResponse<PaginatedResponse<CustomerRecord>>>(&json)?.into_result()
}
