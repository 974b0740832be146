//! # The remote `books` table
//!
//! [`BookTable`] is the only way the catalog views reach the hosted service.
//! Two operations are exposed because the views use exactly two: select every
//! row ordered by title, and insert one row.
//!
//! | Implementation | Backing |
//! |----------------|---------|
//! | [`RestTable`] | PostgREST endpoint of a hosted Supabase project, over `reqwest` |
//! | [`MemoryTable`] | In-process rows, for tests and for running without a configured project |
//!
//! [`CatalogClient`] wraps whichever one was chosen at startup. It is created
//! once by the platform entry point and handed to each view as a prop.

use std::future::Future;

use crate::books::{Book, NewBook};
use crate::config::CatalogConfig;
use crate::error::RemoteError;
use crate::{MemoryTable, RestTable};

/// Async access to the `books` table.
pub trait BookTable {
    /// Every row, ordered by title ascending.
    fn select_all_by_title(&self) -> impl Future<Output = Result<Vec<Book>, RemoteError>>;

    /// Insert a single row.
    fn insert(&self, book: NewBook) -> impl Future<Output = Result<(), RemoteError>>;
}

/// Handle to the table, passed explicitly to the views that need it.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogClient {
    Rest(RestTable),
    Memory(MemoryTable),
}

impl CatalogClient {
    /// Talk to the configured project, or keep rows in memory when there is none.
    pub fn from_config(config: Option<CatalogConfig>) -> Self {
        match config {
            Some(config) => {
                tracing::info!(url = %config.url, table = %config.table, "using hosted catalog table");
                CatalogClient::Rest(RestTable::new(config))
            }
            None => {
                tracing::warn!("no catalog configured; books are kept in memory only");
                CatalogClient::Memory(MemoryTable::new())
            }
        }
    }
}

impl From<MemoryTable> for CatalogClient {
    fn from(table: MemoryTable) -> Self {
        CatalogClient::Memory(table)
    }
}

impl From<RestTable> for CatalogClient {
    fn from(table: RestTable) -> Self {
        CatalogClient::Rest(table)
    }
}

impl BookTable for CatalogClient {
    async fn select_all_by_title(&self) -> Result<Vec<Book>, RemoteError> {
        match self {
            CatalogClient::Rest(t) => t.select_all_by_title().await,
            CatalogClient::Memory(t) => t.select_all_by_title().await,
        }
    }

    async fn insert(&self, book: NewBook) -> Result<(), RemoteError> {
        match self {
            CatalogClient::Rest(t) => t.insert(book).await,
            CatalogClient::Memory(t) => t.insert(book).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::{BookDraft, BookFormState, CatalogState};

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Anon".to_string(),
            isbn: None,
            publication_year: 1990,
            description: None,
            category: "History".to_string(),
            available_copies: 1,
        }
    }

    async fn refresh(client: &CatalogClient, state: &mut CatalogState) {
        if state.begin_fetch() {
            let result = client.select_all_by_title().await;
            state.finish_fetch(result);
        }
    }

    #[test]
    fn test_unconfigured_client_is_memory() {
        assert!(matches!(CatalogClient::from_config(None), CatalogClient::Memory(_)));

        let config = CatalogConfig::new("https://demo.supabase.co", "anon");
        assert!(matches!(CatalogClient::from_config(Some(config)), CatalogClient::Rest(_)));
    }

    #[tokio::test]
    async fn test_fetch_replaces_list() {
        let table = MemoryTable::with_rows(vec![new_book("B"), new_book("A"), new_book("C")]);
        let client = CatalogClient::from(table.clone());
        let mut state = CatalogState::default();

        refresh(&client, &mut state).await;
        assert_eq!(state.books.len(), 3);
        let titles: Vec<_> = state.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);

        table.clear();
        table.insert(new_book("Z")).await.unwrap();
        refresh(&client, &mut state).await;
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.books[0].title, "Z");
    }

    #[tokio::test]
    async fn test_fetch_failure_stops_fetching() {
        let table = MemoryTable::failing("network down");
        let client = CatalogClient::from(table.clone());
        let mut state = CatalogState::default();

        refresh(&client, &mut state).await;
        assert_eq!(state.error_text().as_deref(), Some("Error: network down"));
        assert!(!state.loading);

        refresh(&client, &mut state).await;
        assert_eq!(table.select_calls(), 1);
    }

    #[tokio::test]
    async fn test_add_book_then_refresh() {
        let table = MemoryTable::new();
        let client = CatalogClient::from(table.clone());
        let mut catalog = CatalogState::default();
        refresh(&client, &mut catalog).await;
        catalog.toggle_form();

        let mut form = BookFormState::default();
        form.set(crate::BookField::Title, "Dune".to_string());
        form.set(crate::BookField::Author, "Frank Herbert".to_string());
        form.set(crate::BookField::PublicationYear, "2001".to_string());
        form.set(crate::BookField::Category, "Science Fiction".to_string());
        form.set(crate::BookField::AvailableCopies, "3".to_string());

        let payload = form.begin_submit(2026).unwrap();
        let result = client.insert(payload).await;
        assert!(form.finish_submit(result));
        assert_eq!(form.draft, BookDraft::default());

        let sent = table.inserted();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].publication_year, 2001);
        assert_eq!(sent[0].available_copies, 3);

        catalog.form_succeeded();
        refresh(&client, &mut catalog).await;
        assert!(!catalog.show_form);
        assert_eq!(catalog.books.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_values() {
        let client = CatalogClient::from(MemoryTable::failing("permission denied"));
        let mut form = BookFormState::default();
        form.set(crate::BookField::Title, "Dune".to_string());
        form.set(crate::BookField::Author, "Frank Herbert".to_string());
        form.set(crate::BookField::PublicationYear, "1965".to_string());
        form.set(crate::BookField::Category, "Fiction".to_string());
        let before = form.draft.clone();

        let payload = form.begin_submit(2026).unwrap();
        let result = client.insert(payload).await;
        assert!(!form.finish_submit(result));
        assert_eq!(form.error.as_deref(), Some("permission denied"));
        assert_eq!(form.draft, before);
    }
}
