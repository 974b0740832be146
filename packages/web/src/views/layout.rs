use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        ui::Navbar {
            Link { to: Route::Registration {}, "التسجيل" }
            Link { to: Route::Books {}, "Library" }
        }
        Outlet::<Route> {}
    }
}
