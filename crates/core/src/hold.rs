//! Hold module - the fixed 4-slot staging area
//!
//! Selected tiles leave the board as bare kind tokens and queue here.
//! An insert that completes a pair clears both copies immediately; an insert
//! that fills the last slot without completing one ends the game. Occupied
//! slots are always packed to the left with their relative order intact.

use arrayvec::ArrayVec;

use tile_pairs_types::{TileKind, HOLD_CAPACITY};

/// Result of inserting one kind token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// No empty slot; nothing changed
    Rejected,
    /// Placed in the first empty slot, no pair formed
    Placed,
    /// Placed and an equal pair cleared
    Matched(TileKind),
    /// Placed, every slot is occupied and no two kinds are equal
    FullNoMatch,
}

/// The hold area. Backed by a fixed-capacity vector, so "first empty slot"
/// is a push and compaction is the shift performed by `remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldArea {
    slots: ArrayVec<TileKind, HOLD_CAPACITY>,
}

impl HoldArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one slot is empty
    pub fn can_accept(&self) -> bool {
        !self.slots.is_full()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Kinds currently held, earliest-filled first
    pub fn held(&self) -> &[TileKind] {
        &self.slots
    }

    /// Slot-by-slot view padded to the fixed capacity, for presentation
    pub fn slots(&self) -> [Option<TileKind>; HOLD_CAPACITY] {
        let mut view = [None; HOLD_CAPACITY];
        for (slot, kind) in view.iter_mut().zip(self.slots.iter()) {
            *slot = Some(*kind);
        }
        view
    }

    /// Occupied slots holding `kind`
    pub fn count_of(&self, kind: TileKind) -> usize {
        self.slots.iter().filter(|&&k| k == kind).count()
    }

    /// Place `kind` in the first empty slot and resolve the result.
    ///
    /// A formed pair is removed from the two earliest-filled slots holding
    /// that kind and the remainder is compacted toward slot 0. Inserting
    /// into a full hold changes nothing and reports `Rejected`.
    pub fn insert(&mut self, kind: TileKind) -> HoldOutcome {
        if self.slots.is_full() {
            return HoldOutcome::Rejected;
        }
        self.slots.push(kind);

        if let Some((first, second)) = self.earliest_pair() {
            let matched = self.slots[first];
            // Remove the later slot first so the earlier index stays valid;
            // ArrayVec::remove shifts the tail left, which is the compaction.
            self.slots.remove(second);
            self.slots.remove(first);
            return HoldOutcome::Matched(matched);
        }

        if self.slots.is_full() {
            return HoldOutcome::FullNoMatch;
        }
        HoldOutcome::Placed
    }

    /// First two slots (in fill order) holding the same kind
    fn earliest_pair(&self) -> Option<(usize, usize)> {
        for first in 0..self.slots.len() {
            for second in first + 1..self.slots.len() {
                if self.slots[first] == self.slots[second] {
                    return Some((first, second));
                }
            }
        }
        None
    }

    /// Empty every slot (session reset)
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
