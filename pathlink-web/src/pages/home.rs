use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        h1 { "Home" }
        p { "Every link in the bar above logs the path it was rendered under." }
    }
}
