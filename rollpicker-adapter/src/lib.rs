//! Host adapter utilities for the `rollpicker` crate.
//!
//! The `rollpicker` crate is UI-agnostic and focuses on selection state and scroll sync. This
//! crate provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A clock abstraction (`SystemClock` for real hosts, `ManualClock` for simulations)
//! - A `Controller` that timestamps host events and polls the settle timer
//! - A `RecordingSurface` for headless hosts and scripted scroll simulations
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

mod clock;
mod controller;
mod event;
mod surface;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::Controller;
pub use event::HostEvent;
pub use surface::{RecordingSurface, ScrollCommand};
