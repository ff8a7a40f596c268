//! Helpers for rendering routed components and capturing link events in tests

use crate::route_log::ROUTE_LOG_TARGET;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use std::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// One link render event, as recorded under `ROUTE_LOG_TARGET`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteEvent {
    /// Route path the link was rendered under
    pub path: String,
    /// Destination the link points to
    pub to: String,
}

#[derive(Clone, Default)]
struct RouteEventLayer {
    events: Arc<Mutex<Vec<RouteEvent>>>,
}

impl<S: Subscriber> Layer<S> for RouteEventLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != ROUTE_LOG_TARGET {
            return;
        }
        let mut recorded = RouteEvent::default();
        event.record(&mut recorded);
        if let Ok(mut events) = self.events.lock() {
            events.push(recorded);
        }
    }
}

impl Visit for RouteEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "path" => self.path = value.to_string(),
            "to" => self.to = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_str(field, &format!("{value:?}"));
    }
}

/// Run `f` with a subscriber that records every link render event.
pub fn capture_route_events<T>(f: impl FnOnce() -> T) -> (T, Vec<RouteEvent>) {
    let layer = RouteEventLayer::default();
    let events = layer.events.clone();
    let subscriber = Registry::default().with(layer);

    let out = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().map(|e| e.clone()).unwrap_or_default();
    (out, events)
}

/// Server-side renders a component tree with an in-memory history.
pub struct RouteHarness {
    dom: VirtualDom,
}

impl RouteHarness {
    /// `root` must mount a `Router`; `path` is the initial location.
    pub fn new(root: fn() -> Element, path: &str) -> Self {
        let dom = VirtualDom::new(root);
        dom.provide_root_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>);
        Self { dom }
    }

    pub fn with_context<T: Clone + 'static>(self, value: T) -> Self {
        self.dom.provide_root_context(value);
        self
    }

    /// Initial build of the tree.
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    /// Run `f` inside the runtime (e.g. to write a signal), then re-render
    /// whatever it dirtied.
    pub fn update(&mut self, f: impl FnOnce()) {
        self.dom.in_runtime(f);
        self.dom.render_immediate_to_vec();
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn render(mut self) -> String {
        self.rebuild();
        self.html()
    }
}
