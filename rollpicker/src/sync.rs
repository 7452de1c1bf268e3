use std::collections::VecDeque;

use crate::codec::index_to_offset;
use crate::{Geometry, Motion, ScrollOffsetPair, ScrollSurface, SurfaceConfig};

/// Offsets closer than this are treated as the same scroll position when matching echoes.
const ECHO_TOLERANCE: f64 = 0.5;
const MAX_PENDING_ECHOES: usize = 8;

/// Keeps the display-only secondary surface in lockstep with the interactive primary surface.
///
/// Data only flows one way: primary offset events are forwarded to the secondary surface, and
/// nothing the secondary does is ever read back. Programmatic jumps move both surfaces at once;
/// the host's later echo of a jump is recognized and not forwarded a second time.
///
/// The synchronizer is the only writer of the [`ScrollOffsetPair`].
#[derive(Clone, Debug)]
pub struct Synchronizer<P, S> {
    primary: P,
    secondary: S,
    offsets: ScrollOffsetPair,
    // Targets of programmatic jumps the host has not reported back yet, oldest first.
    pending_echoes: VecDeque<f64>,
}

impl<P: ScrollSurface, S: ScrollSurface> Synchronizer<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary,
            offsets: ScrollOffsetPair::default(),
            pending_echoes: VecDeque::new(),
        }
    }

    pub fn offsets(&self) -> ScrollOffsetPair {
        self.offsets
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    pub fn secondary_mut(&mut self) -> &mut S {
        &mut self.secondary
    }

    pub fn into_surfaces(self) -> (P, S) {
        (self.primary, self.secondary)
    }

    /// Returns `true` while a programmatic jump is waiting for the host to echo it.
    pub fn awaiting_echo(&self) -> bool {
        !self.pending_echoes.is_empty()
    }

    /// Handles a scroll-position event reported by the primary surface.
    ///
    /// The secondary surface is at `offset` before this returns. The result says whether the
    /// event echoes a programmatic jump (and must not be treated as user motion). Echoes arrive
    /// in order, so matching one also retires every older jump; any other offset is user motion
    /// and retires them all. An echo is not forwarded again when the jump already placed the
    /// secondary surface there.
    pub fn on_primary_offset_changed(&mut self, offset: f64) -> Motion {
        let motion = self.retire_echoes(offset);
        self.offsets.primary = offset;
        if motion == Motion::User || self.offsets.secondary != offset {
            self.forward(offset);
        }
        motion
    }

    /// Moves the primary surface to rest on `index` (no animation) and the secondary surface
    /// to the same offset, so the pair agrees before the host reports anything.
    ///
    /// The jump is queued as an expected echo only when the primary surface echoes and the
    /// offset actually changes; hosts do not report a scroll to where the view already is.
    /// `index` must already be clamped by the caller. Returns the applied offset.
    pub fn jump_to(&mut self, index: usize, geometry: &Geometry) -> f64 {
        let offset = index_to_offset(index, geometry);
        ptrace!(index, offset, "Synchronizer::jump_to");
        self.primary.scroll_to(offset, false);
        if self.primary.echoes_scroll_to()
            && (self.offsets.primary - offset).abs() >= ECHO_TOLERANCE
        {
            if self.pending_echoes.len() == MAX_PENDING_ECHOES {
                self.pending_echoes.pop_front();
            }
            self.pending_echoes.push_back(offset);
        }
        self.offsets.primary = offset;
        self.forward(offset);
        offset
    }

    pub fn configure(&mut self, primary: &SurfaceConfig, secondary: &SurfaceConfig) {
        self.primary.configure(primary);
        self.secondary.configure(secondary);
    }

    fn retire_echoes(&mut self, offset: f64) -> Motion {
        let echoed = self
            .pending_echoes
            .iter()
            .position(|target| (target - offset).abs() < ECHO_TOLERANCE);
        match echoed {
            Some(pos) => {
                self.pending_echoes.drain(..=pos);
                Motion::Programmatic
            }
            None => {
                self.pending_echoes.clear();
                Motion::User
            }
        }
    }

    fn forward(&mut self, offset: f64) {
        self.secondary.scroll_to(offset, false);
        self.offsets.secondary = offset;
    }
}
