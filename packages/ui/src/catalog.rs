//! Library catalog list view.

use dioxus::prelude::*;
use forms::{Book, BookTable, CatalogClient, CatalogPhase, CatalogState};

use crate::components::Button;
use crate::{BookForm, FORMS_CSS};

/// Grid of every book in the table, with a toggle for the add-book form.
///
/// Rows are fetched once on mount and again after each successful insert.
/// Every fetch replaces the whole list. After a failed fetch the view shows
/// the error and stops fetching.
#[component]
pub fn CatalogView(client: CatalogClient) -> Element {
    let mut catalog = use_signal(CatalogState::default);
    let mut generation = use_signal(|| 0u32);

    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        let _ = generation();
        async move {
            if !catalog.write().begin_fetch() {
                return;
            }
            let result = client.select_all_by_title().await;
            match &result {
                Ok(books) => tracing::debug!("loaded {} books", books.len()),
                Err(e) => tracing::error!("Failed to load books: {}", e),
            }
            catalog.write().finish_fetch(result);
        }
    });

    let handle_added = move |_: ()| {
        catalog.write().form_succeeded();
        *generation.write() += 1;
    };

    let state = catalog();

    match state.phase() {
        CatalogPhase::Loading => {
            return rsx! {
                document::Stylesheet { href: FORMS_CSS }
                div { class: "catalog-status", "Loading..." }
            };
        }
        CatalogPhase::Failed(_) => {
            let text = state.error_text().unwrap_or_default();
            return rsx! {
                document::Stylesheet { href: FORMS_CSS }
                div { class: "catalog-status catalog-status--error", "{text}" }
            };
        }
        CatalogPhase::Empty | CatalogPhase::Ready => {}
    }

    let toggle_label = state.toggle_label();

    rsx! {
        document::Stylesheet { href: FORMS_CSS }

        div {
            class: "catalog",

            div {
                class: "catalog-header",
                h2 { "Library Books" }
                Button {
                    onclick: move |_| catalog.write().toggle_form(),
                    "{toggle_label}"
                }
            }

            if state.show_form {
                div {
                    class: "catalog-form",
                    BookForm { client: client.clone(), on_success: handle_added }
                }
            }

            div {
                class: "catalog-grid",
                for book in state.books.iter() {
                    BookCard { key: "{book.id}", book: book.clone() }
                }
            }

            if state.phase() == CatalogPhase::Empty {
                p { class: "catalog-empty", "No books found. Add some books to get started!" }
            }
        }
    }
}

/// One book in the catalog grid.
#[component]
pub fn BookCard(book: Book) -> Element {
    let copies_class = if book.in_stock() {
        "copies copies--available"
    } else {
        "copies copies--none"
    };

    rsx! {
        div {
            class: "book-card",
            h3 { "{book.title}" }
            p { class: "book-author", "by {book.author}" }
            p { class: "book-meta", "Published: {book.publication_year}" }
            p { class: "book-meta", "Category: {book.category}" }
            if let Some(blurb) = book.blurb() {
                p { class: "book-description", "{blurb}" }
            }
            p {
                class: "book-copies",
                "Available Copies: "
                span { class: copies_class, "{book.available_copies}" }
            }
        }
    }
}
