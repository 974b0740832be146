//! Add-book form.

use dioxus::prelude::*;
use forms::books::{current_year, CATEGORIES, ISBN_DIGITS, MIN_PUBLICATION_YEAR};
use forms::{BookField, BookFormState, BookTable, CatalogClient};

use crate::components::{Button, Input, Label};

/// Form that inserts one row into the `books` table.
///
/// On success the fields reset and `on_success` fires; refreshing the list is
/// up to the parent. On failure the entered values stay and the error is shown.
#[component]
pub fn BookForm(client: CatalogClient, on_success: EventHandler<()>) -> Element {
    let mut form = use_signal(BookFormState::default);
    let max_year = use_hook(current_year);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(book) = form.write().begin_submit(max_year) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let title = book.title.clone();
            let result = client.insert(book).await;
            match &result {
                Ok(()) => tracing::info!("Added book {}", title),
                Err(e) => tracing::error!("Failed to add book {}: {}", title, e),
            }
            if form.write().finish_submit(result) {
                on_success.call(());
            }
        });
    };

    let mut set = move |field: BookField, value: String| form.write().set(field, value);
    let state = form();
    let draft = &state.draft;
    let isbn_pattern = format!("[0-9]{{{ISBN_DIGITS}}}");

    rsx! {
        form {
            class: "book-form",
            onsubmit: handle_submit,

            h2 { "Add New Book" }

            if let Some(err) = state.error.as_ref() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "book-form-grid",

                div {
                    class: "form-field",
                    Label { html_for: BookField::Title.name(), "Title" }
                    Input {
                        r#type: "text",
                        id: BookField::Title.name(),
                        name: BookField::Title.name(),
                        value: "{draft.title}",
                        required: true,
                        oninput: move |evt: FormEvent| set(BookField::Title, evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: BookField::Author.name(), "Author" }
                    Input {
                        r#type: "text",
                        id: BookField::Author.name(),
                        name: BookField::Author.name(),
                        value: "{draft.author}",
                        required: true,
                        oninput: move |evt: FormEvent| set(BookField::Author, evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: BookField::Isbn.name(), "ISBN" }
                    Input {
                        r#type: "text",
                        id: BookField::Isbn.name(),
                        name: BookField::Isbn.name(),
                        value: "{draft.isbn}",
                        pattern: "{isbn_pattern}",
                        title: "Please enter a valid 13-digit ISBN",
                        oninput: move |evt: FormEvent| set(BookField::Isbn, evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: BookField::PublicationYear.name(), "Publication Year" }
                    Input {
                        r#type: "number",
                        id: BookField::PublicationYear.name(),
                        name: BookField::PublicationYear.name(),
                        value: "{draft.publication_year}",
                        min: "{MIN_PUBLICATION_YEAR}",
                        max: "{max_year}",
                        required: true,
                        oninput: move |evt: FormEvent| set(BookField::PublicationYear, evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: BookField::Category.name(), "Category" }
                    select {
                        id: BookField::Category.name(),
                        name: BookField::Category.name(),
                        value: "{draft.category}",
                        required: true,
                        onchange: move |evt: FormEvent| set(BookField::Category, evt.value()),
                        option { value: "", "Select a category" }
                        for category in CATEGORIES.iter() {
                            option { key: "{category}", value: "{category}", "{category}" }
                        }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: BookField::AvailableCopies.name(), "Available Copies" }
                    Input {
                        r#type: "number",
                        id: BookField::AvailableCopies.name(),
                        name: BookField::AvailableCopies.name(),
                        value: "{draft.available_copies}",
                        min: "0",
                        required: true,
                        oninput: move |evt: FormEvent| set(BookField::AvailableCopies, evt.value()),
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: BookField::Description.name(), "Description" }
                textarea {
                    id: BookField::Description.name(),
                    name: BookField::Description.name(),
                    value: "{draft.description}",
                    rows: "3",
                    oninput: move |evt: FormEvent| set(BookField::Description, evt.value()),
                }
            }

            div {
                class: "form-actions",
                Button {
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Adding..." } else { "Add Book" }
                }
            }
        }
    }
}
