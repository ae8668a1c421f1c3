use dioxus::document;
use dioxus::prelude::*;

use crate::app::pages::{CercChecker, DelhiMonitor, Home, Results, SupremeMonitor};

// Query parameter names on /results keep the wire names of the previous
// client (partyName, startDate, ...) so existing deep links keep working.
#[allow(non_snake_case)]
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Range/single-date search form
    #[route("/")]
    Home {},

    // Search results, parameterized through the query string
    #[route("/results?:partyName&:date&:startDate&:endDate&:court")]
    Results {
        partyName: Option<String>,
        date: Option<String>,
        startDate: Option<String>,
        endDate: Option<String>,
        court: Option<String>,
    },

    // Supreme Court judgment monitor
    #[route("/supreme-monitor")]
    SupremeMonitor {},

    // Delhi High Court case status
    #[route("/delhi-monitor")]
    DelhiMonitor {},

    // CERC cause list checker
    #[route("/cerc-checker")]
    CercChecker {},

    // Fallback
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            AppNavbar {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Global navbar with brand and quick court navigation
#[component]
fn AppNavbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            // Left: Brand
            Link {
                to: Route::Home {},
                class: "c-navbar__brand",
                span { class: "c-navbar__brand-icon", "⚖️" }
                div { class: "c-navbar__brand-text",
                    h1 { class: "c-navbar__title", "Case" span { class: "c-navbar__title-accent", "Pulse" } }
                    p { class: "c-navbar__subtitle", "Litigation Intelligence Platform" }
                }
            }

            // Center: Quick courts
            div { class: "c-navbar__links",
                Link {
                    to: Route::SupremeMonitor {},
                    class: "c-navbar__link",
                    "⚖️ Supreme Court Monitor"
                }
                Link {
                    to: Route::DelhiMonitor {},
                    class: "c-navbar__link",
                    "🏛️ Delhi HC Monitor"
                }
                Link {
                    to: Route::CercChecker {},
                    class: "c-navbar__link",
                    "🔨 CERC Cause List Checker"
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "p-not-found",
            h1 { "404 — Page Not Found" }
            p { class: "p-not-found__path", "/{path}" }
            Link { to: Route::Home {}, class: "c-breadcrumb-link", "← Back to search" }
        }
    }
}
