use std::sync::{Arc, Mutex};

use crate::books::{Book, NewBook};
use crate::error::RemoteError;
use crate::table::BookTable;

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Book>,
    inserted: Vec<NewBook>,
    next_id: u64,
    select_calls: usize,
}

/// In-memory `books` table for tests and unconfigured builds.
///
/// Clones share the same rows.
#[derive(Clone, Debug, Default)]
pub struct MemoryTable {
    inner: Arc<Mutex<Inner>>,
    failure: Option<String>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table pre-filled with `rows`, ids assigned in order.
    pub fn with_rows(rows: Vec<NewBook>) -> Self {
        let table = Self::new();
        {
            let mut inner = table.inner.lock().unwrap();
            for row in rows {
                inner.push(row);
            }
        }
        table
    }

    /// A table whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Payloads received by `insert`, in order.
    pub fn inserted(&self) -> Vec<NewBook> {
        self.inner.lock().unwrap().inserted.clone()
    }

    pub fn select_calls(&self) -> usize {
        self.inner.lock().unwrap().select_calls
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap().rows.clear();
    }

    fn check(&self) -> Result<(), RemoteError> {
        match &self.failure {
            Some(message) => Err(RemoteError::message(message.clone())),
            None => Ok(()),
        }
    }
}

impl Inner {
    fn push(&mut self, row: NewBook) {
        self.next_id += 1;
        let id = self.next_id.to_string();
        self.rows.push(row.into_book(id));
    }
}

impl PartialEq for MemoryTable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) && self.failure == other.failure
    }
}

impl BookTable for MemoryTable {
    async fn select_all_by_title(&self) -> Result<Vec<Book>, RemoteError> {
        let mut inner = self.inner.lock().unwrap();
        inner.select_calls += 1;
        self.check()?;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(rows)
    }

    async fn insert(&self, book: NewBook) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock().unwrap();
        inner.inserted.push(book.clone());
        self.check()?;
        inner.push(book);
        Ok(())
    }
}
