use dioxus::prelude::*;
use shared_types::{DashboardConfig, TableConfig};

mod data;
mod routes;
mod services;
use routes::Route;

const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults when it is invalid.
fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml_str(DASHBOARD_TOML) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid dashboard.toml, using defaults");
            DashboardConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    // Every DataGrid below reads its defaults from this context.
    use_context_provider(|| config.table.clone());

    let table: TableConfig = use_context();
    use_hook(|| {
        tracing::info!(
            page_size = table.default_page_size,
            debounce_ms = table.debounce_ms,
            "dashboard config loaded"
        );
    });

    rsx! {
        Router::<Route> {}
    }
}
