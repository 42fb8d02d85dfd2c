//! The shared trail slot.

use ap_core::HomingVector;

/// Holds at most one published trail.
///
/// Owned by [`Sim`][crate::Sim] and handed to acting agents by shared
/// reference.  A read is a snapshot: an agent that sees an empty slot cannot
/// observe a later publish within the same decision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedMemory {
    slot:      Option<HomingVector>,
    publishes: usize,
}

impl SharedMemory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store `trail`, replacing any previous one.
    pub fn publish(&mut self, trail: HomingVector) {
        self.slot = Some(trail);
        self.publishes += 1;
    }

    /// The current trail, if any.  Never mutates the slot.
    #[inline]
    pub fn read(&self) -> Option<&HomingVector> {
        self.slot.as_ref()
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.slot.is_some()
    }

    /// Number of publishes since the slot was created.
    #[inline]
    pub fn publish_count(&self) -> usize {
        self.publishes
    }
}
