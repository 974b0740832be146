use dioxus::prelude::*;

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
    use_context_provider(|| CatalogClient::from_config(load_config()));

    rsx! {
        document::Stylesheet { href: ui::FORMS_CSS }
        Router::<Route> {}
    }
}

/// `.env`/environment first, then `<config_dir>/libya-forms/catalog.toml`.
fn load_config() -> Option<CatalogConfig> {
    match CatalogConfig::from_env() {
        Ok(config) => return Some(config),
        Err(e) => tracing::debug!("{}; looking for {}", e, CatalogConfig::filename()),
    }

    let path = dirs::config_dir()?
        .join("libya-forms")
        .join(CatalogConfig::filename());
    if !path.exists() {
        return None;
    }
    match CatalogConfig::from_file(&path) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("Failed to load catalog config: {}", e);
            None
        }
    }
}
