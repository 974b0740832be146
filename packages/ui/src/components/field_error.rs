use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

/// Error line under an input. Renders nothing when there is no message.
#[component]
pub fn FieldError(#[props(!optional)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p {
            class: "field-error",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}
