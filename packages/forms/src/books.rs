//! # Library catalog: rows, the add-book draft, and view state
//!
//! The `books` table is owned by the hosted service. The catalog view keeps a
//! read-only copy of it that is **replaced wholesale** on every fetch; nothing
//! here merges or patches rows.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Book`] | One row as returned by the table, including the server-assigned `id`. |
//! | [`NewBook`] | The insert payload. Year and copies are integers on the wire. |
//! | [`BookDraft`] | The seven text inputs of the add-book form, before conversion. |
//! | [`BookFormState`] | Draft plus the form's loading flag and error banner. |
//! | [`CatalogState`] | Loading flag, error, cached rows and form visibility of the list view. |

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RemoteError;

/// Categories offered by the add-book form.
pub const CATEGORIES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Mystery",
    "Romance",
    "Biography",
    "History",
    "Science",
    "Technology",
];

/// Earliest accepted publication year.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// Length of an ISBN-13.
pub const ISBN_DIGITS: usize = 13;

/// Latest accepted publication year, from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A row of the `books` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub publication_year: i32,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub available_copies: u32,
}

impl Book {
    pub fn in_stock(&self) -> bool {
        self.available_copies > 0
    }

    /// Description to show on the card, if there is any text.
    pub fn blurb(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Tables keyed by `uuid` send strings, `bigserial` tables send numbers.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Payload for inserting one row. `id` is assigned by the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub publication_year: i32,
    pub description: Option<String>,
    pub category: String,
    pub available_copies: u32,
}

impl NewBook {
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publication_year: self.publication_year,
            description: self.description,
            category: self.category,
            available_copies: self.available_copies,
        }
    }
}

/// Inputs of the add-book form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Isbn,
    PublicationYear,
    Description,
    Category,
    AvailableCopies,
}

impl BookField {
    /// HTML `name` of the input; matches the table column.
    pub fn name(self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Isbn => "isbn",
            BookField::PublicationYear => "publication_year",
            BookField::Description => "description",
            BookField::Category => "category",
            BookField::AvailableCopies => "available_copies",
        }
    }
}

/// Why a draft cannot be sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Author is required")]
    MissingAuthor,
    #[error("Please enter a valid 13-digit ISBN")]
    InvalidIsbn,
    #[error("Publication year is required")]
    MissingYear,
    #[error("Publication year must be a whole number between 1000 and {max}")]
    InvalidYear { max: i32 },
    #[error("Please select a category")]
    MissingCategory,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Available copies must be a whole number of 0 or more")]
    InvalidCopies,
}

/// Text as typed into the add-book form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub description: String,
    pub category: String,
    pub available_copies: String,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            publication_year: String::new(),
            description: String::new(),
            category: String::new(),
            available_copies: "1".to_string(),
        }
    }
}

impl BookDraft {
    pub fn set(&mut self, field: BookField, value: String) {
        let slot = match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Isbn => &mut self.isbn,
            BookField::PublicationYear => &mut self.publication_year,
            BookField::Description => &mut self.description,
            BookField::Category => &mut self.category,
            BookField::AvailableCopies => &mut self.available_copies,
        };
        *slot = value;
    }

    /// Convert to an insert payload, checking fields in form order.
    pub fn to_new_book(&self, current_year: i32) -> Result<NewBook, DraftError> {
        let title = non_blank(&self.title).ok_or(DraftError::MissingTitle)?;
        let author = non_blank(&self.author).ok_or(DraftError::MissingAuthor)?;

        let isbn = non_blank(&self.isbn);
        if let Some(isbn) = isbn.as_deref() {
            if isbn.len() != ISBN_DIGITS || !isbn.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DraftError::InvalidIsbn);
            }
        }

        let year = non_blank(&self.publication_year).ok_or(DraftError::MissingYear)?;
        let publication_year = year
            .parse::<i32>()
            .ok()
            .filter(|y| (MIN_PUBLICATION_YEAR..=current_year).contains(y))
            .ok_or(DraftError::InvalidYear { max: current_year })?;

        let category = non_blank(&self.category).ok_or(DraftError::MissingCategory)?;
        if !CATEGORIES.contains(&category.as_str()) {
            return Err(DraftError::UnknownCategory(category));
        }

        let available_copies = self
            .available_copies
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidCopies)?;

        Ok(NewBook {
            title,
            author,
            isbn,
            publication_year,
            description: non_blank(&self.description),
            category,
            available_copies,
        })
    }
}

/// Trimmed text, or `None` when blank.
fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// State behind the add-book form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookFormState {
    pub draft: BookDraft,
    pub loading: bool,
    pub error: Option<String>,
}

impl BookFormState {
    pub fn set(&mut self, field: BookField, value: String) {
        self.draft.set(field, value);
    }

    /// Start an insert. Returns the payload to send, or `None` if an insert is
    /// already running or the draft was rejected (the reason is in `error`).
    pub fn begin_submit(&mut self, current_year: i32) -> Option<NewBook> {
        if self.loading {
            return None;
        }
        match self.draft.to_new_book(current_year) {
            Ok(book) => {
                self.error = None;
                self.loading = true;
                Some(book)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Record the outcome of the insert. Returns `true` when the parent should
    /// be told about the new row.
    pub fn finish_submit(&mut self, result: Result<(), RemoteError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                self.draft = BookDraft::default();
                true
            }
            Err(e) => {
                self.error = Some(e.display_message());
                false
            }
        }
    }
}

/// What the catalog view should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogPhase {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

/// State behind the catalog list view.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub loading: bool,
    pub error: Option<String>,
    pub books: Vec<Book>,
    pub show_form: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            books: Vec::new(),
            show_form: false,
        }
    }
}

impl CatalogState {
    /// Once a fetch has failed the view stays on the error.
    pub fn should_fetch(&self) -> bool {
        self.error.is_none()
    }

    pub fn begin_fetch(&mut self) -> bool {
        if !self.should_fetch() {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Book>, RemoteError>) {
        self.loading = false;
        match result {
            Ok(books) => self.books = books,
            Err(e) => self.error = Some(e.display_message()),
        }
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// The add-book form inserted a row. The caller refetches.
    pub fn form_succeeded(&mut self) {
        self.show_form = false;
    }

    pub fn phase(&self) -> CatalogPhase {
        if self.loading {
            CatalogPhase::Loading
        } else if let Some(e) = &self.error {
            CatalogPhase::Failed(e.clone())
        } else if self.books.is_empty() {
            CatalogPhase::Empty
        } else {
            CatalogPhase::Ready
        }
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|e| format!("Error: {e}"))
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_form {
            "Hide Form"
        } else {
            "Add New Book"
        }
    }
}
