use std::sync::Arc;

/// Callback fired when a user-driven scroll settles on a different row.
///
/// The argument is the newly committed index.
pub type OnIndexChange = Arc<dyn Fn(usize) + Send + Sync>;

pub const DEFAULT_ITEM_HEIGHT: f64 = 20.0;
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 200.0;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 380;
pub const DEFAULT_LINE_COLOR: &str = "white";

/// Unvalidated row/container dimensions, as supplied by the UI layer.
///
/// Turn this into a [`crate::Geometry`] with [`crate::Geometry::from_config`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryConfig {
    pub item_height: f64,
    pub container_height: f64,
}

impl GeometryConfig {
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            item_height,
            container_height,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            container_height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}

/// Configuration for [`crate::Picker`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct PickerOptions {
    pub items: Vec<String>,
    /// Initial selection. Clamped into range on construction.
    pub index: usize,
    pub geometry: GeometryConfig,
    /// How long the primary surface must stay quiet before a scroll position is committed.
    pub settle_delay_ms: u64,

    /// Divider color around the highlight strip. Cosmetic only.
    pub line_color: String,
    /// Suppresses the divider. Cosmetic only.
    pub remove_line: bool,
    pub label: Option<String>,

    pub on_index_change: Option<OnIndexChange>,
}

impl PickerOptions {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            index: 0,
            geometry: GeometryConfig::default(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            line_color: DEFAULT_LINE_COLOR.to_owned(),
            remove_line: false,
            label: None,
            on_index_change: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_geometry(mut self, item_height: f64, container_height: f64) -> Self {
        self.geometry = GeometryConfig::new(item_height, container_height);
        self
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    pub fn with_line_color(mut self, line_color: impl Into<String>) -> Self {
        self.line_color = line_color.into();
        self
    }

    pub fn with_remove_line(mut self, remove_line: bool) -> Self {
        self.remove_line = remove_line;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_on_index_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_index_change = Some(Arc::new(f));
        self
    }
}

impl core::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerOptions")
            .field("items", &self.items)
            .field("index", &self.index)
            .field("geometry", &self.geometry)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("line_color", &self.line_color)
            .field("remove_line", &self.remove_line)
            .field("label", &self.label)
            .field("on_index_change", &self.on_index_change.as_ref().map(|_| ".."))
            .finish()
    }
}
