//! pathlink-ui - Route-aware link component
//!
//! Contains the `TrackedLink` component and the helpers it uses to read the
//! current route path and record it as a diagnostic event.

pub mod components;
pub mod route_log;
pub mod route_path;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use components::*;
pub use route_log::{log_current_path, RouteLogConfig, ROUTE_LOG_TARGET};
pub use route_path::{current_path, path_of};
