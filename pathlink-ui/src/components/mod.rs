//! Shared UI components

pub mod tracked_link;

pub use tracked_link::TrackedLink;
