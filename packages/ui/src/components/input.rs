use dioxus::prelude::*;

/// Text-like input. `invalid` switches to the error outline.
#[component]
pub fn Input(
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let class = if invalid {
        "field-input field-input--error"
    } else {
        "field-input"
    };

    rsx! {
        input {
            class,
            oninput: move |event| {
                if let Some(f) = &oninput {
                    f.call(event);
                }
            },
            ..attributes,
        }
    }
}
