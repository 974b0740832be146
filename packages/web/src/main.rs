use dioxus::prelude::*;

use forms::config::{ANON_KEY_VAR, URL_VAR};
use forms::{CatalogClient, CatalogConfig};
use views::{AppLayout, Books, Registration};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Registration {},
        #[route("/books")]
        Books {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Build-time configuration: the browser has no process environment.
    use_context_provider(|| {
        let config = CatalogConfig::from_build_env();
        if config.is_none() {
            tracing::debug!("{} and {} were not set at build time", URL_VAR, ANON_KEY_VAR);
        }
        CatalogClient::from_config(config)
    });

    rsx! {
        document::Stylesheet { href: ui::FORMS_CSS }
        Router::<Route> {}
    }
}
