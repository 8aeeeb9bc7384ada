use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{FilterValue, SortDescriptor};
use shared_ui::table::client::{self, ClientQuery};
use shared_ui::DataGrid;

use crate::common::{columns, count, people, render};

fn admin_page() -> client::ClientPage<Value> {
    let mut query = ClientQuery::new(2);
    query.sort = Some(SortDescriptor::desc("name"));
    query.filters.set("email", Some(FilterValue::text("EXAMPLE.COM")));
    client::apply(&people(), &columns(), &[], &query)
}

#[test]
fn client_query_feeds_the_grid() {
    let page = admin_page();
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 2);

    fn app() -> Element {
        let page = admin_page();
        rsx! {
            DataGrid::<Value> {
                data: page.rows,
                columns: columns(),
                pagination: page.pagination,
                initial_sort: SortDescriptor::desc("name"),
            }
        }
    }
    let html = render(app);

    assert_eq!(count(&html, "<tr"), 3);
    assert!(html.find("Carol").unwrap() < html.find("Bob").unwrap());
    assert!(!html.contains("Alice"));
    assert!(html.contains("1 to 2 of 3"));
}
