//! A headless roll/wheel picker engine.
//!
//! A roll picker is a vertical list the user flicks until one row rests in the middle of the
//! container, plus a narrow highlight strip that mirrors the list so the centered row appears
//! selected. This crate contains the logic behind it, with no rendering:
//! - offset ↔ index conversion with nearest-row snapping
//! - one-way synchronization of the highlight strip to the interactive list
//! - settle debouncing, so a fling produces exactly one "index changed" notification
//! - programmatic re-centering when the selection, items or dimensions change
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - two scroll views, exposed through [`ScrollSurface`]
//! - scroll offset events from the interactive view
//! - a monotonic clock (milliseconds) and a wake-up at [`Picker::next_deadline_ms`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod codec;
mod debouncer;
mod error;
mod geometry;
mod options;
mod picker;
mod state;
mod surface;
mod sync;
mod types;


pub use debouncer::{DebounceState, Debouncer};
pub use error::ConfigError;
pub use geometry::Geometry;
pub use options::{
    DEFAULT_CONTAINER_HEIGHT, DEFAULT_ITEM_HEIGHT, DEFAULT_LINE_COLOR, DEFAULT_SETTLE_DELAY_MS,
    GeometryConfig, OnIndexChange, PickerOptions,
};
pub use picker::Picker;
pub use state::PickerSnapshot;
pub use surface::{NullSurface, ScrollSurface, SurfaceConfig};
pub use sync::Synchronizer;
pub use types::{Motion, ScrollOffsetPair, SelectionState};
