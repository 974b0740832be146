//! Libyan citizen registration card.
//!
//! All state lives in a [`forms::RegistrationForm`]; this component only wires
//! inputs to it and renders it. The simulated submission runs as a task owned
//! by this component, so it stops when the card is unmounted, and a new
//! submission cancels any timer left over from the previous one.

use dioxus::core::Task;
use dioxus::prelude::*;
use forms::registration::{
    run_submission, sorted_cities, sorted_municipalities, Field, PHONE_PREFIX,
};
use forms::RegistrationForm;

use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::icons::{FaBuilding, FaCircleCheck, FaLocationDot, FaPaperPlane, FaPhone, FaUser};
use crate::{Icon, FORMS_CSS};

fn select_class(has_error: bool) -> &'static str {
    if has_error {
        "field-input field-input--error"
    } else {
        "field-input"
    }
}

/// Registration form view with client-side validation and a simulated submit.
#[component]
pub fn RegistrationView() -> Element {
    let mut registration = use_signal(RegistrationForm::new);
    let mut pending = use_signal(|| Option::<Task>::None);
    let cities = use_hook(sorted_cities);
    let municipalities = use_hook(sorted_municipalities);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(record) = registration.write().submit() else {
            return;
        };
        tracing::info!(
            state = %record.state,
            municipality = %record.municipality,
            "registration submitted"
        );

        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }
        let task = spawn(run_submission(
            move |step| registration.write().apply(step),
            crate::sleep,
        ));
        pending.set(Some(task));
    };

    let state = registration();
    let error = |field: Field| state.error(field).map(|e| e.to_string());

    rsx! {
        document::Stylesheet { href: FORMS_CSS }

        div {
            class: "registration-page",
            dir: "rtl",

            div {
                class: "registration-card",

                div {
                    class: "registration-header",
                    h1 { "نموذج التسجيل - ليبيا" }
                    p { "يرجى ملء النموذج أدناه للتواصل معنا" }
                }

                if state.submitted {
                    div {
                        class: "registration-success",
                        div {
                            class: "registration-success-icon",
                            Icon { icon: FaCircleCheck, width: 32, height: 32 }
                        }
                        div {
                            class: "registration-success-message",
                            p { class: "registration-success-title", "تم إرسال النموذج بنجاح!" }
                            p { "سنتواصل معك قريباً على الرقم المسجل" }
                        }
                        Button {
                            r#type: "button",
                            onclick: move |_| registration.write().dismiss(),
                            "عودة للنموذج"
                        }
                    }
                } else {
                    form {
                        class: "registration-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            Label {
                                html_for: Field::FullName.name(),
                                Icon { icon: FaUser, width: 16, height: 16 }
                                "الاسم الكامل "
                                span { class: "required-mark", "*" }
                            }
                            Input {
                                r#type: "text",
                                id: Field::FullName.name(),
                                name: Field::FullName.name(),
                                invalid: error(Field::FullName).is_some(),
                                placeholder: "أدخل الاسم الكامل",
                                value: "{state.record.full_name}",
                                oninput: move |evt: FormEvent| registration.write().set_field(Field::FullName, evt.value()),
                            }
                            FieldError { message: error(Field::FullName) }
                        }

                        div {
                            class: "form-field",
                            Label {
                                html_for: Field::PhoneNumber.name(),
                                Icon { icon: FaPhone, width: 16, height: 16 }
                                "رقم الهاتف "
                                span { class: "required-mark", "*" }
                            }
                            div {
                                class: "phone-group",
                                span { class: "phone-prefix", dir: "ltr", "{PHONE_PREFIX}" }
                                Input {
                                    r#type: "tel",
                                    id: Field::PhoneNumber.name(),
                                    name: Field::PhoneNumber.name(),
                                    invalid: error(Field::PhoneNumber).is_some(),
                                    placeholder: "أدخل رقم الهاتف",
                                    value: "{state.record.phone_number}",
                                    oninput: move |evt: FormEvent| registration.write().set_field(Field::PhoneNumber, evt.value()),
                                }
                            }
                            FieldError { message: error(Field::PhoneNumber) }
                        }

                        div {
                            class: "form-field",
                            Label {
                                html_for: Field::State.name(),
                                Icon { icon: FaLocationDot, width: 16, height: 16 }
                                "المدينة "
                                span { class: "required-mark", "*" }
                            }
                            select {
                                id: Field::State.name(),
                                name: Field::State.name(),
                                class: select_class(error(Field::State).is_some()),
                                value: "{state.record.state}",
                                onchange: move |evt: FormEvent| registration.write().set_field(Field::State, evt.value()),
                                option { value: "", disabled: true, "اختر المدينة" }
                                for city in cities.iter() {
                                    option { key: "{city}", value: "{city}", "{city}" }
                                }
                            }
                            FieldError { message: error(Field::State) }
                        }

                        div {
                            class: "form-field",
                            Label {
                                html_for: Field::Municipality.name(),
                                Icon { icon: FaBuilding, width: 16, height: 16 }
                                "البلدية "
                                span { class: "required-mark", "*" }
                            }
                            select {
                                id: Field::Municipality.name(),
                                name: Field::Municipality.name(),
                                class: select_class(error(Field::Municipality).is_some()),
                                value: "{state.record.municipality}",
                                onchange: move |evt: FormEvent| registration.write().set_field(Field::Municipality, evt.value()),
                                option { value: "", disabled: true, "اختر البلدية" }
                                for municipality in municipalities.iter() {
                                    option { key: "{municipality}", value: "{municipality}", "{municipality}" }
                                }
                            }
                            FieldError { message: error(Field::Municipality) }
                        }

                        Button {
                            variant: ButtonVariant::Block,
                            r#type: "submit",
                            disabled: state.loading,
                            if state.loading {
                                span { class: "spinner" }
                                span { "جاري الإرسال..." }
                            } else {
                                Icon { icon: FaPaperPlane, width: 18, height: 18 }
                                span { "إرسال النموذج" }
                            }
                        }

                        div {
                            class: "privacy-note",
                            p {
                                "بالضغط على زر الإرسال، أنت توافق على "
                                a { href: "#", "سياسة الخصوصية" }
                                " الخاصة بنا"
                            }
                        }
                    }
                }
            }
        }
    }
}
