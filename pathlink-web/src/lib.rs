pub mod pages;

use dioxus::prelude::*;
use pages::{About, Home, NavLayout};
use pathlink_ui::RouteLogConfig;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(RouteLogConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
