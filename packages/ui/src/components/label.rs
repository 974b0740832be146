use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(into)] html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: html_for,
            ..attributes,
            {children}
        }
    }
}
