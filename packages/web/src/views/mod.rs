mod layout;
pub use layout::AppLayout;

mod books;
pub use books::Books;

pub use ui::RegistrationView as Registration;
