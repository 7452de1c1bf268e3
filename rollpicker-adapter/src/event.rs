/// A scroll notification from the host's primary scroll view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// The content offset changed (drag, fling, or the echo of a programmatic scroll).
    Scroll { offset: f64 },
    /// Scroll motion stopped at `offset`.
    ScrollEnd { offset: f64 },
}
