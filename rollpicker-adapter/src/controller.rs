use rollpicker::{ConfigError, GeometryConfig, Picker, PickerOptions, ScrollSurface};

use crate::{Clock, HostEvent};

/// A framework-neutral controller that wraps a `rollpicker::Picker` and timestamps host events
/// with a [`Clock`].
///
/// This type does not hold any UI objects beyond the two surfaces. Adapters drive it by calling:
/// - `on_scroll` / `on_scroll_end` (or `dispatch`) when the primary view reports an offset
/// - `tick()` from a frame loop or a timer scheduled `time_until_settle_ms()` from now
#[derive(Debug)]
pub struct Controller<P, S, C> {
    picker: Picker<P, S>,
    clock: C,
}

impl<P: ScrollSurface, S: ScrollSurface, C: Clock> Controller<P, S, C> {
    pub fn new(
        options: PickerOptions,
        primary: P,
        secondary: S,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            picker: Picker::new(options, primary, secondary)?,
            clock,
        })
    }

    pub fn from_picker(picker: Picker<P, S>, clock: C) -> Self {
        Self { picker, clock }
    }

    pub fn picker(&self) -> &Picker<P, S> {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut Picker<P, S> {
        &mut self.picker
    }

    pub fn into_picker(self) -> Picker<P, S> {
        self.picker
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Feeds a primary scroll event stamped with the clock's current time.
    ///
    /// A settle that came due since the last `tick` commits here, before the event re-arms.
    pub fn on_scroll(&mut self, offset: f64) {
        let now_ms = self.clock.now_ms();
        self.picker.on_primary_scroll(offset, now_ms);
    }

    pub fn on_scroll_end(&mut self, offset: f64) {
        let now_ms = self.clock.now_ms();
        self.picker.on_primary_scroll_end(offset, now_ms);
    }

    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Scroll { offset } => self.on_scroll(offset),
            HostEvent::ScrollEnd { offset } => self.on_scroll_end(offset),
        }
    }

    /// Commits a settled scroll if the settle timer is due.
    ///
    /// Returns the newly committed index when the selection changed.
    pub fn tick(&mut self) -> Option<usize> {
        let now_ms = self.clock.now_ms();
        let committed = self.picker.poll(now_ms);
        #[cfg(feature = "tracing")]
        if let Some(index) = committed {
            tracing::debug!(
                target: "rollpicker_adapter",
                index,
                now_ms,
                "Controller::tick: committed"
            );
        }
        committed
    }

    /// Milliseconds until the armed settle timer is due (`Some(0)` if overdue), or `None` when
    /// nothing is pending.
    pub fn time_until_settle_ms(&self) -> Option<u64> {
        let deadline = self.picker.next_deadline_ms()?;
        Some(deadline.saturating_sub(self.clock.now_ms()))
    }

    pub fn set_index(&mut self, index: usize) {
        self.picker.set_index(index);
    }

    pub fn jump_to(&mut self, index: usize) -> Option<f64> {
        self.picker.jump_to(index)
    }

    pub fn reconfigure_geometry(&mut self, config: GeometryConfig) -> Result<(), ConfigError> {
        self.picker.reconfigure_geometry(config)
    }
}
