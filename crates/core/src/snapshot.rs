//! Snapshot module - flat serializable view of a session
//!
//! Presentation layers query geometry and state through this instead of
//! walking the live structures. Fields are primitive-encoded so the snapshot
//! serializes without dragging core types into a wire format.

use serde::{Deserialize, Serialize};

use tile_pairs_types::HOLD_CAPACITY;

/// One tile as presentation sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: u16,
    pub column: i8,
    pub row: i8,
    pub layer: i8,
    pub kind: u8,
    pub removed: bool,
    pub free: bool,
}

/// Complete session view at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tiles: Vec<TileSnapshot>,
    /// Hold slots left to right; `None` slots trail the occupied ones
    pub hold: [Option<u8>; HOLD_CAPACITY],
    pub remaining: u16,
    pub status: String,
    pub score: u32,
    pub high_score: u32,
    pub combo: u32,
    pub seed: u32,
}

impl SessionSnapshot {
    /// Ids of tiles currently selectable, in board order
    pub fn free_tiles(&self) -> Vec<u16> {
        self.tiles
            .iter()
            .filter(|t| !t.removed && t.free)
            .map(|t| t.id)
            .collect()
    }
}
