use crate::Route;
use dioxus::prelude::*;
use pathlink_ui::TrackedLink;

#[component]
pub fn NavLayout() -> Element {
    rsx! {
        nav { class: "nav-bar",
            TrackedLink { to: "/", "Home" }
            TrackedLink { to: "/about", "About" }
        }
        main { class: "page", Outlet::<Route> {} }
    }
}
