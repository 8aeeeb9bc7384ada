pub mod customers;
pub mod not_found;
pub mod usage;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;

use customers::Customers;
use not_found::NotFound;
use usage::Usage;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Users {},
    #[route("/customers")]
    Customers {},
    #[route("/usage")]
    Usage {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with the top navigation bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::Users {} => "Users",
        Route::Customers {} => "Customers",
        Route::Usage {} => "Usage",
        Route::NotFound { .. } => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell",
            header { class: "app-navbar",
                span { class: "app-brand", "Admin" }
                nav { class: "app-nav",
                    Link {
                        to: Route::Users {},
                        class: "app-nav-link",
                        active_class: "active",
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "Users"
                    }
                    Link {
                        to: Route::Customers {},
                        class: "app-nav-link",
                        active_class: "active",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        "Customers"
                    }
                    Link {
                        to: Route::Usage {},
                        class: "app-nav-link",
                        active_class: "active",
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Usage"
                    }
                }
            }
            main { class: "app-main",
                h1 { class: "app-page-title", "{page_title}" }
                Outlet::<Route> {}
            }
        }
    }
}
