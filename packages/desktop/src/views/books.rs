use dioxus::prelude::*;

use forms::CatalogClient;

#[component]
pub fn Books() -> Element {
    let client = use_context::<CatalogClient>();
    rsx! {
        ui::CatalogView { client }
    }
}
