/// Current vertical offsets of the two surfaces.
///
/// `secondary` tracks `primary` after every processed event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffsetPair {
    pub primary: f64,
    pub secondary: f64,
}

impl ScrollOffsetPair {
    pub fn is_synced(&self) -> bool {
        self.primary == self.secondary
    }
}

/// The externally visible selection plus the in-flight index while a scroll settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    pub committed_index: usize,
    /// Unclamped candidate recorded by the settle timer, if one is armed.
    pub pending_index: Option<i64>,
}

/// Whether a primary offset event came from the user or echoed a programmatic jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    User,
    Programmatic,
}
