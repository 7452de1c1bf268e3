use crate::{ConfigError, GeometryConfig};

/// Validated row/container dimensions plus the derived spacer height.
///
/// `padding_height` is the blank space rendered above the first row and below the last row so
/// that either end of the list can sit in the middle of the container. The three values are
/// always computed together; there are no field setters, a new `Geometry` replaces the old one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    item_height: f64,
    container_height: f64,
    padding_height: f64,
}

impl Geometry {
    /// Validates both heights and derives the padding.
    ///
    /// If `item_height > container_height` the padding is clamped to zero: at most one row is
    /// visible, which is degenerate but allowed.
    pub fn new(item_height: f64, container_height: f64) -> Result<Self, ConfigError> {
        if !(item_height.is_finite() && item_height > 0.0) {
            return Err(ConfigError::InvalidItemHeight(item_height));
        }
        if !(container_height.is_finite() && container_height > 0.0) {
            return Err(ConfigError::InvalidContainerHeight(container_height));
        }
        if item_height > container_height {
            pwarn!(
                item_height,
                container_height,
                "Geometry: item taller than container, padding clamped to 0"
            );
        }
        let padding_height = ((container_height - item_height) / 2.0).max(0.0);
        Ok(Self {
            item_height,
            container_height,
            padding_height,
        })
    }

    pub fn from_config(config: GeometryConfig) -> Result<Self, ConfigError> {
        Self::new(config.item_height, config.container_height)
    }

    pub fn config(&self) -> GeometryConfig {
        GeometryConfig {
            item_height: self.item_height,
            container_height: self.container_height,
        }
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn padding_height(&self) -> f64 {
        self.padding_height
    }

    /// Total scrollable content height of the primary surface for `count` rows, spacers included.
    pub fn content_height(&self, count: usize) -> f64 {
        self.padding_height * 2.0 + count as f64 * self.item_height
    }

    /// The largest resting offset for `count` rows (the offset of the last row).
    pub fn max_offset(&self, count: usize) -> f64 {
        count.saturating_sub(1) as f64 * self.item_height
    }
}

impl Default for Geometry {
    fn default() -> Self {
        let config = GeometryConfig::default();
        Self {
            item_height: config.item_height,
            container_height: config.container_height,
            padding_height: (config.container_height - config.item_height) / 2.0,
        }
    }
}
