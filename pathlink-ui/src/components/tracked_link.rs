//! Router link that records the current path on each render

use crate::route_log::{log_current_path, RouteLogConfig};
use crate::route_path::current_path;
use dioxus::prelude::*;

/// Router `Link` to `to`, wrapping `children` unchanged.
///
/// Each render reads the current route path and logs it together with the
/// destination, subject to [`RouteLogConfig`]. Must be rendered under a
/// `Router`.
#[component]
pub fn TrackedLink(
    /// Destination, forwarded to the router as-is
    #[props(into)]
    to: String,
    children: Element,
) -> Element {
    let config = try_consume_context::<RouteLogConfig>().unwrap_or_default();
    log_current_path(config, &current_path(), &to);

    rsx! {
        Link { to, {children} }
    }
}
