//! # Forms: platform-free state, validation and storage for the form views
//!
//! Everything the `ui` components render is decided here, so it can be tested
//! without a renderer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`registration`] | Libyan citizen registration form: fields, validation, the simulated submission timeline |
//! | [`books`] | Library catalog: `Book` rows, the add-book draft, catalog view state |
//! | [`table`] | The [`BookTable`] seam plus the [`CatalogClient`] handle passed to components |
//! | [`config`] | Where the hosted table lives (`catalog.toml`, environment) |
//! | [`error`] | Errors surfaced by the remote table |

pub mod books;
pub mod config;
pub mod error;
pub mod registration;
pub mod table;

mod memory;
pub use memory::MemoryTable;

mod rest;
pub use rest::RestTable;

pub use books::{Book, BookDraft, BookField, BookFormState, CatalogPhase, CatalogState, DraftError, NewBook};
pub use config::{CatalogConfig, ConfigError};
pub use error::RemoteError;
pub use registration::{Field, FieldErrors, RegistrationForm, RegistrationRecord, SubmitStep, ValidationError};
pub use table::{BookTable, CatalogClient};
