//! Form primitives shared by the registration card and the add-book form.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod field_error;
pub use field_error::FieldError;
