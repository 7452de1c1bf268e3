use rollpicker::{ScrollSurface, SurfaceConfig};

/// One `scroll_to` call issued by the picker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub offset: f64,
    pub animated: bool,
}

/// A [`ScrollSurface`] that applies commands to an in-memory offset and records them.
///
/// Headless hosts can render straight from [`RecordingSurface::offset`]; simulations can feed
/// [`RecordingSurface::take_echoes`] back to the picker the way a native scroll view reports its
/// own position after a programmatic scroll.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    offset: f64,
    commands: Vec<ScrollCommand>,
    echoes: Vec<f64>,
    config: Option<SurfaceConfig>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }

    pub fn config(&self) -> Option<&SurfaceConfig> {
        self.config.as_ref()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.echoes.clear();
    }

    /// Drains the offsets of programmatic scrolls not yet reported back to the picker.
    ///
    /// Scrolls that left the view where it was produce no echo.
    pub fn take_echoes(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.echoes)
    }

    /// Moves the surface as if the user dragged it. Does not record a command.
    pub fn drag_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Where a native view configured with the current snap points would come to rest.
    ///
    /// Without snap points the offset is returned unchanged.
    pub fn rest_offset(&self, offset: f64) -> f64 {
        let Some(config) = &self.config else {
            return offset;
        };
        config
            .snap_offsets
            .iter()
            .copied()
            .min_by(|a, b| (a - offset).abs().total_cmp(&(b - offset).abs()))
            .unwrap_or(offset)
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to(&mut self, offset: f64, animated: bool) {
        // A view that does not move reports nothing.
        if offset != self.offset {
            self.echoes.push(offset);
        }
        self.offset = offset;
        self.commands.push(ScrollCommand { offset, animated });
    }

    fn configure(&mut self, config: &SurfaceConfig) {
        self.config = Some(config.clone());
    }

    fn echoes_scroll_to(&self) -> bool {
        true
    }
}
