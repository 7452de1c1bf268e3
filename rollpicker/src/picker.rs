use std::sync::Arc;

use crate::codec::{clamp_index, index_to_offset, snap_offsets};
use crate::{
    ConfigError, Debouncer, Geometry, GeometryConfig, Motion, NullSurface, OnIndexChange,
    PickerOptions, PickerSnapshot, ScrollOffsetPair, ScrollSurface, SelectionState,
    SurfaceConfig, Synchronizer,
};

/// Offsets further than this from a row's resting offset get snapped back after settling.
const SNAP_TOLERANCE: f64 = 0.5;

/// A headless roll picker.
///
/// The picker owns the selection state and drives two host scroll surfaces:
/// - the *primary* surface is the full, interactive list the user flicks;
/// - the *secondary* surface is the read-only highlight strip that mirrors the primary.
///
/// Hosts feed it events and time:
/// - `on_primary_scroll` / `on_primary_scroll_end` when the primary view reports an offset;
/// - `poll(now_ms)` when the settle deadline (see `next_deadline_ms`) has passed.
///
/// `on_index_change` fires only when a user-driven scroll settles on a different row.
/// Programmatic changes (`set_index`, `jump_to`, geometry or item updates) re-center silently.
pub struct Picker<P = NullSurface, S = NullSurface> {
    items: Vec<String>,
    geometry: Geometry,
    committed_index: usize,
    debouncer: Debouncer,
    sync: Synchronizer<P, S>,

    line_color: String,
    remove_line: bool,
    label: Option<String>,
    on_index_change: Option<OnIndexChange>,
}

impl Picker {
    /// Creates a picker with no attached surfaces.
    pub fn headless(options: PickerOptions) -> Result<Self, ConfigError> {
        Self::new(options, NullSurface, NullSurface)
    }
}

impl<P: ScrollSurface, S: ScrollSurface> Picker<P, S> {
    /// Validates `options`, configures both surfaces, and positions them on the initial index.
    ///
    /// The initial positioning is not a selection change: `on_index_change` is not called.
    pub fn new(options: PickerOptions, primary: P, secondary: S) -> Result<Self, ConfigError> {
        let geometry = Geometry::from_config(options.geometry)?;
        let PickerOptions {
            items,
            index,
            settle_delay_ms,
            line_color,
            remove_line,
            label,
            on_index_change,
            ..
        } = options;
        let committed_index = clamp_to(index, items.len());
        pdebug!(
            count = items.len(),
            index = committed_index,
            item_height = geometry.item_height(),
            container_height = geometry.container_height(),
            settle_delay_ms,
            "Picker::new"
        );

        let mut picker = Self {
            items,
            geometry,
            committed_index,
            debouncer: Debouncer::new(settle_delay_ms),
            sync: Synchronizer::new(primary, secondary),
            line_color,
            remove_line,
            label,
            on_index_change,
        };
        picker.configure_surfaces();
        picker.recenter();
        Ok(picker)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The debounced, externally visible selection. `0` for an empty list.
    pub fn committed_index(&self) -> usize {
        self.committed_index
    }

    /// The unclamped row a scroll in progress will commit to, if a settle timer is armed.
    pub fn pending_index(&self) -> Option<i64> {
        self.debouncer.pending_index()
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState {
            committed_index: self.committed_index,
            pending_index: self.pending_index(),
        }
    }

    /// Text of the committed row, or `None` for an empty list.
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.committed_index).map(String::as_str)
    }

    pub fn offsets(&self) -> ScrollOffsetPair {
        self.sync.offsets()
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.debouncer.delay_ms()
    }

    /// Changes the settle delay. Takes effect the next time the settle timer is armed.
    pub fn set_settle_delay_ms(&mut self, delay_ms: u64) {
        self.debouncer.set_delay_ms(delay_ms);
    }

    /// When the armed settle timer is due, if any. Hosts schedule a `poll` at this time.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.debouncer.deadline_ms()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    /// Color of the divider around the highlight strip, or `None` when the line is removed.
    pub fn divider_color(&self) -> Option<&str> {
        (!self.remove_line).then_some(self.line_color.as_str())
    }

    pub fn set_on_index_change(
        &mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
    }

    pub fn primary(&self) -> &P {
        self.sync.primary()
    }

    pub fn primary_mut(&mut self) -> &mut P {
        self.sync.primary_mut()
    }

    pub fn secondary(&self) -> &S {
        self.sync.secondary()
    }

    pub fn secondary_mut(&mut self) -> &mut S {
        self.sync.secondary_mut()
    }

    pub fn into_surfaces(self) -> (P, S) {
        self.sync.into_surfaces()
    }

    /// Snap points and padding for the interactive list.
    pub fn primary_surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            snap_offsets: snap_offsets(self.items.len(), &self.geometry).collect(),
            content_padding: self.geometry.padding_height(),
            scroll_enabled: true,
        }
    }

    /// The highlight strip: one row tall, unpadded, never scrolled by the user.
    pub fn secondary_surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            snap_offsets: Vec::new(),
            content_padding: 0.0,
            scroll_enabled: false,
        }
    }

    /// Handles a scroll-position event from the primary surface.
    ///
    /// The secondary surface is updated before this returns. User motion (re)arms the settle
    /// timer; the echo of a programmatic jump does not. Nothing is armed for an empty list.
    ///
    /// A settle timer that expired before `now_ms` commits first, exactly as if `poll` had run
    /// on time, so a late `poll` never loses the previous gesture.
    pub fn on_primary_scroll(&mut self, offset: f64, now_ms: u64) {
        ptrace!(offset, now_ms, "Picker::on_primary_scroll");
        self.handle_primary_offset(offset, now_ms);
    }

    /// Handles the end of a scroll gesture on the primary surface.
    ///
    /// Behaves like [`Picker::on_primary_scroll`]: the resting offset is mirrored and re-arms
    /// the settle timer, so hosts that only report motion end still commit.
    pub fn on_primary_scroll_end(&mut self, offset: f64, now_ms: u64) {
        ptrace!(offset, now_ms, "Picker::on_primary_scroll_end");
        self.handle_primary_offset(offset, now_ms);
    }

    /// Commits the settled row if the settle timer is due.
    ///
    /// Returns the new index when the selection changed (after `on_index_change` was called).
    /// Settling on the already committed row returns `None` and notifies nobody.
    pub fn poll(&mut self, now_ms: u64) -> Option<usize> {
        self.settle(now_ms, true)
    }

    /// Controlled update of the selection (e.g. from a parent component's state).
    ///
    /// Clamps `index`, cancels any in-flight settle, and re-centers when the selection changes
    /// or a pending scroll was discarded. Never calls `on_index_change`.
    pub fn set_index(&mut self, index: usize) {
        let Some(index) = clamp_index_usize(index, self.items.len()) else {
            self.debouncer.cancel();
            return;
        };
        let discarded = self.debouncer.cancel();
        if index == self.committed_index && discarded.is_none() {
            return;
        }
        pdebug!(index, prev = self.committed_index, "Picker::set_index");
        self.committed_index = index;
        self.sync.jump_to(index, &self.geometry);
    }

    /// Imperatively re-centers on `index` (clamped), even if it is already committed.
    ///
    /// Cancels any in-flight settle. Never calls `on_index_change`. Returns the applied offset,
    /// or `None` for an empty list.
    pub fn jump_to(&mut self, index: usize) -> Option<f64> {
        self.debouncer.cancel();
        let index = clamp_index_usize(index, self.items.len())?;
        self.committed_index = index;
        Some(self.sync.jump_to(index, &self.geometry))
    }

    /// Replaces the row and container heights, keeping the committed row centered.
    ///
    /// Invalid dimensions are rejected before anything changes.
    pub fn reconfigure_geometry(&mut self, config: GeometryConfig) -> Result<(), ConfigError> {
        let geometry = Geometry::from_config(config)?;
        pdebug!(
            item_height = geometry.item_height(),
            container_height = geometry.container_height(),
            index = self.committed_index,
            "Picker::reconfigure_geometry"
        );
        self.geometry = geometry;
        self.debouncer.cancel();
        self.configure_surfaces();
        self.recenter();
        Ok(())
    }

    /// Replaces the item list wholesale.
    ///
    /// The committed index is clamped to the new list and re-centered without notification.
    pub fn set_items<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.committed_index = clamp_to(self.committed_index, self.items.len());
        pdebug!(
            count = self.items.len(),
            index = self.committed_index,
            "Picker::set_items"
        );
        self.debouncer.cancel();
        self.configure_surfaces();
        self.recenter();
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            geometry: self.geometry.config(),
            selection: self.selection(),
            offsets: self.offsets(),
        }
    }

    /// Restores geometry and the committed index from a snapshot, then re-centers.
    ///
    /// The pending index and the stored offsets are not restored; the surfaces are positioned
    /// from the committed index. Never calls `on_index_change`.
    pub fn restore(&mut self, snapshot: PickerSnapshot) -> Result<(), ConfigError> {
        let geometry = Geometry::from_config(snapshot.geometry)?;
        self.geometry = geometry;
        self.committed_index = clamp_to(snapshot.selection.committed_index, self.items.len());
        self.debouncer.cancel();
        self.configure_surfaces();
        self.recenter();
        Ok(())
    }

    fn handle_primary_offset(&mut self, offset: f64, now_ms: u64) {
        // The new event supersedes the resting offset, so no snap correction here.
        self.settle(now_ms, false);
        if self.sync.on_primary_offset_changed(offset) == Motion::Programmatic {
            return;
        }
        self.arm(offset, now_ms);
    }

    fn settle(&mut self, now_ms: u64, snap: bool) -> Option<usize> {
        let candidate = self.debouncer.poll(now_ms)?;
        let index = clamp_index(candidate, self.items.len())?;
        if candidate != index as i64 {
            pdebug!(candidate, index, "Picker::poll: clamped settled index");
        }

        let resting = index_to_offset(index, &self.geometry);
        if snap && (self.sync.offsets().primary - resting).abs() >= SNAP_TOLERANCE {
            self.sync.jump_to(index, &self.geometry);
        }

        if index == self.committed_index {
            ptrace!(index, "Picker::poll: settled on committed index");
            return None;
        }
        self.committed_index = index;
        pdebug!(index, now_ms, snap, "Picker::poll: committed");
        if let Some(cb) = &self.on_index_change {
            cb(index);
        }
        Some(index)
    }

    fn arm(&mut self, offset: f64, now_ms: u64) {
        if self.items.is_empty() {
            return;
        }
        self.debouncer.on_offset(offset, &self.geometry, now_ms);
    }

    fn configure_surfaces(&mut self) {
        let primary = self.primary_surface_config();
        let secondary = self.secondary_surface_config();
        self.sync.configure(&primary, &secondary);
    }

    fn recenter(&mut self) {
        self.sync.jump_to(self.committed_index, &self.geometry);
    }
}

impl<P: core::fmt::Debug, S: core::fmt::Debug> core::fmt::Debug for Picker<P, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("items", &self.items)
            .field("geometry", &self.geometry)
            .field("committed_index", &self.committed_index)
            .field("debouncer", &self.debouncer)
            .field("sync", &self.sync)
            .field("line_color", &self.line_color)
            .field("remove_line", &self.remove_line)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

fn clamp_index_usize(index: usize, count: usize) -> Option<usize> {
    (count > 0).then(|| index.min(count - 1))
}

// Empty lists keep index 0.
fn clamp_to(index: usize, count: usize) -> usize {
    clamp_index_usize(index, count).unwrap_or(0)
}
