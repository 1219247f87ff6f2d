//! Events module - the notification surface toward presentation
//!
//! The session records everything a presentation layer would animate as a
//! plain value in an ordered queue; callers drain the queue after each
//! operation. Nothing here is a callback, so "who is listening" is always
//! explicit at the call site.

use tile_pairs_types::{TileId, TileKind, HOLD_CAPACITY};

/// One observable state change, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A tile became selectable after a recompute
    TileFreed { tile: TileId },
    /// A tile stopped being selectable after a recompute
    TileBlocked { tile: TileId },
    /// A tile left the board for the hold area
    TileRemoved {
        tile: TileId,
        kind: TileKind,
        remaining: u16,
    },
    /// Hold contents after an insert, match or compaction
    HoldChanged {
        slots: [Option<TileKind>; HOLD_CAPACITY],
    },
    /// Two equal kinds cleared from the hold area
    HoldMatched { kind: TileKind, count: u8 },
    /// Every hold slot is occupied and no pair exists (loss)
    HoldFullNoMatch,
    /// The last tile left the board
    BoardCleared,
    /// Score changed; `high_score` is already updated when surpassed
    ScoreChanged { score: u32, high_score: u32 },
    /// Terminal transitions
    GameWon,
    GameLost,
}
