use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Full-width primary button at the bottom of a form.
    Block,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Block => "primary submit-button",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}
