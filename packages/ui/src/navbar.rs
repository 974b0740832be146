use dioxus::prelude::*;

use crate::FORMS_CSS;

/// Top bar holding the app's navigation links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: FORMS_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}
