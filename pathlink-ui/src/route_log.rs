//! Diagnostic logging of the route a link was rendered under

/// `tracing` target for link render events
pub const ROUTE_LOG_TARGET: &str = "pathlink::route";

/// Runtime switch for link render events.
///
/// Provide it as context above any `TrackedLink`. Without a provider the
/// default applies: on in debug builds, off in release builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteLogConfig {
    pub enabled: bool,
}

impl RouteLogConfig {
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for RouteLogConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
        }
    }
}

/// Emit one debug event with the current path and the link destination.
///
/// Returns whether an event was emitted. Always false when the `route-log`
/// feature is off.
pub fn log_current_path(config: RouteLogConfig, path: &str, to: &str) -> bool {
    config.enabled && emit(path, to)
}

#[cfg(feature = "route-log")]
fn emit(path: &str, to: &str) -> bool {
    tracing::debug!(target: ROUTE_LOG_TARGET, path = %path, to = %to, "link rendered");
    true
}

#[cfg(not(feature = "route-log"))]
fn emit(_path: &str, _to: &str) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::capture_route_events;

    #[test]
    fn default_follows_debug_assertions() {
        assert_eq!(RouteLogConfig::default().enabled, cfg!(debug_assertions));
    }

    #[cfg(feature = "route-log")]
    #[test]
    fn enabled_emits_one_event() {
        let (emitted, events) =
            capture_route_events(|| log_current_path(RouteLogConfig::enabled(), "/a", "/b"));

        assert!(emitted);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].path, "/a");
        assert_eq!(events[0].to, "/b");
    }

    #[test]
    fn disabled_emits_nothing() {
        let (emitted, events) =
            capture_route_events(|| log_current_path(RouteLogConfig::disabled(), "/a", "/b"));

        assert!(!emitted);
        assert!(events.is_empty());
    }
}
