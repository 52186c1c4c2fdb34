//! Pointer slots - the two-role touch tracking state machine.
//!
//! The platform gives no stable pointer index, so roles are assigned here:
//! the first touch down becomes *primary*, the next one *secondary*, and any
//! further touch is ignored while both are taken.
//!
//! ## State Transitions
//!
//! ```text
//! Empty   -> Primary   (begin)
//! Primary -> Both      (begin)
//! Both    -> Primary   (end of secondary, or end of primary + promotion)
//! Primary -> Empty     (end of primary)
//! ```
//!
//! Only `Both -> Primary` through the primary's release promotes: the former
//! secondary becomes primary, so primary is always the longest-continuously
//! active pointer of the two.

use crate::input::coords::TouchId;

/// Occupancy pattern of the two slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOccupancy {
    Empty,
    Primary,
    Both,
}

/// Which slot a new touch was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Primary,
    Secondary,
}

/// Outcome of releasing a tracked touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The secondary pointer left; primary is untouched
    Secondary,
    /// The primary pointer left. `promoted` holds the former secondary's
    /// identity when it took over the primary role.
    Primary { promoted: Option<TouchId> },
}

/// Two fixed pointer slots.
///
/// Invariant: `secondary.is_some()` implies `primary.is_some()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerSlots {
    primary: Option<TouchId>,
    secondary: Option<TouchId>,
}

impl PointerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn primary(&self) -> Option<TouchId> {
        self.primary
    }

    #[inline]
    pub fn secondary(&self) -> Option<TouchId> {
        self.secondary
    }

    pub fn occupancy(&self) -> SlotOccupancy {
        match (self.primary, self.secondary) {
            (None, _) => SlotOccupancy::Empty,
            (Some(_), None) => SlotOccupancy::Primary,
            (Some(_), Some(_)) => SlotOccupancy::Both,
        }
    }

    /// Returns true if no pointer is tracked
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    /// Returns true if both slots are taken
    pub fn is_full(&self) -> bool {
        self.secondary.is_some()
    }

    /// Returns true if `id` occupies either slot
    pub fn contains(&self, id: TouchId) -> bool {
        self.primary == Some(id) || self.secondary == Some(id)
    }

    /// Assign a new touch to the first free slot.
    ///
    /// Returns None when both slots are taken or the touch is already
    /// tracked; the slots are left unchanged in that case.
    pub fn begin(&mut self, id: TouchId) -> Option<Assignment> {
        if self.contains(id) {
            return None;
        }
        if self.primary.is_none() {
            self.primary = Some(id);
            return Some(Assignment::Primary);
        }
        if self.secondary.is_none() {
            self.secondary = Some(id);
            return Some(Assignment::Secondary);
        }
        None
    }

    /// Release a touch (end or cancel).
    ///
    /// Returns None for an identity matching neither slot.
    pub fn end(&mut self, id: TouchId) -> Option<Release> {
        if self.secondary == Some(id) {
            self.secondary = None;
            return Some(Release::Secondary);
        }
        if self.primary == Some(id) {
            let promoted = self.secondary.take();
            self.primary = promoted;
            return Some(Release::Primary { promoted });
        }
        None
    }

    /// Forget both pointers
    pub fn clear(&mut self) {
        self.primary = None;
        self.secondary = None;
    }
}
