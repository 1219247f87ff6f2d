//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the matching rules, state management, and turn
//! logic for the layered tile-matching game. It has **zero dependencies** on
//! UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical board and shuffles
//! - **Testable**: Every rule is reachable without a presentation layer
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`layout`]: immutable board shapes (the built-in 44-cell pyramid plus
//!   arbitrary tables for tests)
//! - [`board`]: tile set with pair-wise kind assignment, free-tile
//!   reachability, shuffle and hint search
//! - [`hold`]: the fixed 4-slot staging area with pair matching and
//!   left-packed compaction
//! - [`scoring`]: match points and the 3000ms combo window, as pure
//!   functions of caller-supplied timestamps
//! - [`session`]: the turn state machine tying board and hold together,
//!   with the in-flight turn guard and the event queue
//! - [`events`]: the typed notification surface presentation layers drain
//! - [`snapshot`]: flat serializable session views for geometry queries
//! - [`rng`]: seedable LCG used for kind assignment and shuffles
//!
//! # Game Rules
//!
//! - Tiles sit in layered cells; a tile is **free** when no tile occupies
//!   the same cell in a higher layer and its left or right neighbor cell is
//!   open
//! - Selecting a free tile moves its kind into the first empty hold slot;
//!   two equal kinds in the hold clear immediately and score
//!   `100 x combo`
//! - The combo grows while matches land within 3000ms of each other
//! - Filling all 4 slots with distinct kinds loses; clearing the board
//!   with an empty hold wins
//!
//! # Example
//!
//! ```
//! use tile_pairs_core::{Layout, Session};
//!
//! let mut session = Session::new(Layout::pyramid(), 12345, 0);
//!
//! // A fresh board always has a playable hint.
//! let tile = session.hint().unwrap();
//! let report = session.select_tile(tile, 0).unwrap();
//! session.complete_turn();
//!
//! assert!(session.board().tile(report.tile).unwrap().removed);
//! assert_eq!(session.hold().len(), 1);
//! ```

pub mod board;
pub mod events;
pub mod hold;
pub mod layout;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tile_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FreeDelta, Tile};
pub use events::GameEvent;
pub use hold::{HoldArea, HoldOutcome};
pub use layout::{Layout, LayoutError};
pub use rng::SimpleRng;
pub use scoring::{match_points, score_match, ScoreResult};
pub use session::{SelectError, Session, TurnReport};
pub use snapshot::{SessionSnapshot, TileSnapshot};
