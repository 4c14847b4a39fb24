use dioxus::prelude::*;

use crate::ui::Route;

/// Shared navbar layout.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "navbar",
            class: "bg-gray-900 text-white p-4 flex space-x-6",
            Link {
                to: Route::Home {},
                class: "hover:text-indigo-300 transition-colors",
                "Home"
            }
            Link {
                to: Route::Settings {},
                class: "hover:text-indigo-300 transition-colors",
                "Settings"
            }
        }

        Outlet::<Route> {}
    }
}
