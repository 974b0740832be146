//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const FORMS_CSS: Asset = asset!("/assets/forms.css");

mod platform;
pub use platform::sleep;

mod navbar;
pub use navbar::Navbar;

mod registration;
pub use registration::RegistrationView;

mod catalog;
pub use catalog::{BookCard, CatalogView};

mod book_form;
pub use book_form::BookForm;
