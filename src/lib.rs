//! Core state machines for a widget-driven UI.
//!
//! Two independent components, wired to a host that owns rendering:
//!
//! - [`counter::BoundedCounter`] — a synchronous integer counter clamped
//!   to optional bounds, with derived enabled/disabled control flags.
//! - [`loader::ListLoader`] — an asynchronous fetch lifecycle
//!   (`Idle → Loading → Success | Error`) with generation tokens that keep
//!   stale in-flight responses from overwriting newer state.
//!
//! The data source is abstracted behind [`loader::ItemFetcher`];
//! [`api::HttpItemFetcher`] is the shipped HTTP implementation.

pub mod api;
pub mod config;
pub mod counter;
pub mod loader;
