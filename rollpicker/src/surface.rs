/// A host scroll view, as seen by the picker.
///
/// The picker never holds UI objects; the host implements this trait on whatever handle lets it
/// move its native scroll view (a widget ref, a channel to the UI thread, a test recorder).
pub trait ScrollSurface {
    /// Moves the view so that `offset` is its vertical content offset.
    fn scroll_to(&mut self, offset: f64, animated: bool);

    /// Applies snap points, padding and interactivity. Called on initialization and whenever
    /// geometry or the item list changes.
    fn configure(&mut self, config: &SurfaceConfig) {
        let _ = config;
    }

    /// Whether a `scroll_to` that moves the view is reported back as a scroll event.
    ///
    /// Only echoing surfaces get their programmatic jumps filtered out of user motion. A surface
    /// that never reports its own jumps must keep the default, or the next user event resting on
    /// a jump target would be ignored.
    fn echoes_scroll_to(&self) -> bool {
        false
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &mut T {
    fn scroll_to(&mut self, offset: f64, animated: bool) {
        (**self).scroll_to(offset, animated);
    }

    fn configure(&mut self, config: &SurfaceConfig) {
        (**self).configure(config);
    }

    fn echoes_scroll_to(&self) -> bool {
        (**self).echoes_scroll_to()
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for Box<T> {
    fn scroll_to(&mut self, offset: f64, animated: bool) {
        (**self).scroll_to(offset, animated);
    }

    fn configure(&mut self, config: &SurfaceConfig) {
        (**self).configure(config);
    }

    fn echoes_scroll_to(&self) -> bool {
        (**self).echoes_scroll_to()
    }
}

/// A surface that ignores every command.
///
/// Useful when a host only needs the selection logic (e.g. a terminal UI that reads
/// [`crate::Picker::offsets`] each frame instead of driving native views).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSurface;

impl ScrollSurface for NullSurface {
    fn scroll_to(&mut self, _offset: f64, _animated: bool) {}
}

/// Host-side configuration for one scroll surface.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig {
    /// Offsets the view should come to rest on. Empty for surfaces that never snap.
    pub snap_offsets: Vec<f64>,
    /// Blank space before the first row and after the last row.
    pub content_padding: f64,
    /// Whether the surface accepts user scroll input.
    pub scroll_enabled: bool,
}
