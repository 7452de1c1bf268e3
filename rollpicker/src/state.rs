use crate::{GeometryConfig, ScrollOffsetPair, SelectionState};

/// A serializable snapshot of a picker's geometry, selection and surface offsets.
///
/// Useful for restoring a picker across remounts or sessions without coupling the picker to a
/// UI framework. Restoring re-centers on the committed index; a pending (unsettled) index is
/// not carried over.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerSnapshot {
    pub geometry: GeometryConfig,
    pub selection: SelectionState,
    pub offsets: ScrollOffsetPair,
}
