use dioxus::prelude::*;
use pathlink_ui::TrackedLink;

#[component]
pub fn About() -> Element {
    rsx! {
        h1 { "About" }
        p {
            "Links pointing at the current page render like any other. "
            TrackedLink { to: "/about", "This page" }
        }
    }
}
