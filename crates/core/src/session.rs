//! Session module - turns, scoring and the game lifecycle
//!
//! A session glues one board and one hold area into a scored game. A turn is
//! a single atomic step: validate the selection, remove the tile from the
//! board, insert its kind into the hold, resolve any match, then evaluate
//! win/loss. Every observable change lands in the event queue in the order
//! it happened; presentation drains the queue and animates at its own pace.
//!
//! Animation is why the turn guard exists: a successful `select_tile`
//! latches the session until `complete_turn` is called, and selections (or
//! shuffles) arriving in between are rejected with a typed error. The core
//! itself resolves everything synchronously and holds no timers - the only
//! wall-clock input is the `now_ms` timestamp passed into each turn, used
//! for the combo window.

use tile_pairs_types::{GameStatus, TileId, TileKind, HOLD_CAPACITY, MATCH_SIZE};

use crate::board::{Board, FreeDelta};
use crate::events::GameEvent;
use crate::hold::{HoldArea, HoldOutcome};
use crate::layout::Layout;
use crate::rng::SimpleRng;
use crate::scoring::score_match;
use crate::snapshot::{SessionSnapshot, TileSnapshot};

/// Typed rejection of a mutating session call. Rejected calls apply no
/// state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// No tile with that id on this board
    UnknownTile,
    /// Tile already moved to the hold area
    AlreadyRemoved,
    /// Tile is covered or flanked and cannot be picked up
    Blocked,
    /// No empty hold slot
    HoldFull,
    /// Previous turn has not been completed by the caller
    TurnInFlight,
    /// Session is `Won` or `Lost`; only `reset` is accepted
    GameOver,
}

impl SelectError {
    pub fn code(self) -> &'static str {
        match self {
            SelectError::UnknownTile | SelectError::AlreadyRemoved | SelectError::Blocked => {
                "invalid_selection"
            }
            SelectError::HoldFull => "hold_full",
            SelectError::TurnInFlight => "turn_in_flight",
            SelectError::GameOver => "terminal_state",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SelectError::UnknownTile => "no tile with that id",
            SelectError::AlreadyRemoved => "tile was already moved to the hold area",
            SelectError::Blocked => "tile is covered or flanked",
            SelectError::HoldFull => "no empty hold slot",
            SelectError::TurnInFlight => "previous turn has not been completed",
            SelectError::GameOver => "session is in a terminal state",
        }
    }
}

/// Summary of one accepted turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub tile: TileId,
    pub kind: TileKind,
    /// Kind cleared by this turn, when the insert completed a pair
    pub matched: Option<TileKind>,
    /// Session status after the turn resolved
    pub status: GameStatus,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session {
    layout: Layout,
    board: Board,
    hold: HoldArea,
    rng: SimpleRng,
    status: GameStatus,
    score: u32,
    combo: u32,
    last_match_ms: Option<u64>,
    high_score: u32,
    seed: u32,
    turn_in_flight: bool,
    events: Vec<GameEvent>,
}

impl Session {
    /// Start a session over `layout`. `high_score` is the previously
    /// persisted value; the session only ever raises it.
    pub fn new(layout: Layout, seed: u32, high_score: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(&layout, &mut rng);
        Self {
            layout,
            board,
            hold: HoldArea::new(),
            rng,
            status: GameStatus::InProgress,
            score: 0,
            combo: 1,
            last_match_ms: None,
            high_score,
            seed,
            turn_in_flight: false,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn turn_in_flight(&self) -> bool {
        self.turn_in_flight
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hold(&self) -> &HoldArea {
        &self.hold
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Process one tile-selection turn.
    ///
    /// On success the tile has left the board, the hold has resolved, the
    /// session status reflects any win or loss, and the turn guard is
    /// latched until [`Session::complete_turn`]. All validation happens
    /// before the first mutation, so a rejected turn changes nothing.
    pub fn select_tile(&mut self, id: TileId, now_ms: u64) -> Result<TurnReport, SelectError> {
        if self.status.is_terminal() {
            return Err(SelectError::GameOver);
        }
        if self.turn_in_flight {
            return Err(SelectError::TurnInFlight);
        }
        let tile = self.board.tile(id).ok_or(SelectError::UnknownTile)?;
        if tile.removed {
            return Err(SelectError::AlreadyRemoved);
        }
        if !self.board.is_free(id) {
            return Err(SelectError::Blocked);
        }
        if !self.hold.can_accept() {
            return Err(SelectError::HoldFull);
        }
        let kind = tile.kind;

        // (a) remove from the board
        let deltas = self.board.remove(id).unwrap_or_default();
        let remaining = self.board.remaining();
        self.events.push(GameEvent::TileRemoved {
            tile: id,
            kind,
            remaining: remaining as u16,
        });
        self.push_free_deltas(deltas);
        if remaining == 0 {
            self.events.push(GameEvent::BoardCleared);
        }

        // (b) insert into the hold and resolve
        let mut matched = None;
        match self.hold.insert(kind) {
            HoldOutcome::Placed => {
                self.events.push(GameEvent::HoldChanged {
                    slots: self.hold.slots(),
                });
            }
            HoldOutcome::Matched(matched_kind) => {
                matched = Some(matched_kind);
                self.apply_match(matched_kind, now_ms);
            }
            HoldOutcome::FullNoMatch => {
                self.events.push(GameEvent::HoldChanged {
                    slots: self.hold.slots(),
                });
                self.events.push(GameEvent::HoldFullNoMatch);
                self.status = GameStatus::Lost;
                self.events.push(GameEvent::GameLost);
            }
            // can_accept() was checked before the board mutation, so a full
            // hold cannot be observed here.
            HoldOutcome::Rejected => {}
        }

        // (c) evaluate the combined win condition
        if self.status == GameStatus::InProgress && remaining == 0 && self.hold.is_empty() {
            self.status = GameStatus::Won;
            self.events.push(GameEvent::GameWon);
        }

        self.turn_in_flight = true;
        Ok(TurnReport {
            tile: id,
            kind,
            matched,
            status: self.status,
        })
    }

    /// Release the turn guard. Presentation calls this once its visual steps
    /// for the previous turn have finished; headless callers call it right
    /// after `select_tile`.
    pub fn complete_turn(&mut self) {
        self.turn_in_flight = false;
    }

    /// Re-deal the kinds of the remaining tiles
    pub fn shuffle(&mut self) -> Result<(), SelectError> {
        if self.status.is_terminal() {
            return Err(SelectError::GameOver);
        }
        if self.turn_in_flight {
            return Err(SelectError::TurnInFlight);
        }
        let deltas = self.board.shuffle(&mut self.rng);
        self.push_free_deltas(deltas);
        Ok(())
    }

    /// Suggest a selectable tile, or `None` when the session is over or no
    /// free tile can ever pair up
    pub fn hint(&self) -> Option<TileId> {
        if self.status.is_terminal() {
            return None;
        }
        self.board.find_hint(self.hold.held())
    }

    /// Abandon the current game and deal a fresh board with `seed`.
    /// The high score carries over; score, combo and the hold reset.
    pub fn reset(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
        self.board = Board::new(&self.layout, &mut self.rng);
        self.hold.clear();
        self.status = GameStatus::InProgress;
        self.score = 0;
        self.combo = 1;
        self.last_match_ms = None;
        self.seed = seed;
        self.turn_in_flight = false;
        self.events.clear();
    }

    /// Take every event recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flat serializable view of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        let tiles = self
            .board
            .tiles()
            .iter()
            .map(|t| TileSnapshot {
                id: t.id.0,
                column: t.position.column,
                row: t.position.row,
                layer: t.position.layer,
                kind: t.kind.0,
                removed: t.removed,
                free: self.board.is_free(t.id),
            })
            .collect();

        let mut hold = [None; HOLD_CAPACITY];
        for (slot, kind) in hold.iter_mut().zip(self.hold.held()) {
            *slot = Some(kind.0);
        }

        SessionSnapshot {
            tiles,
            hold,
            remaining: self.board.remaining() as u16,
            status: self.status.as_str().to_string(),
            score: self.score,
            high_score: self.high_score,
            combo: self.combo,
            seed: self.seed,
        }
    }

    fn apply_match(&mut self, kind: TileKind, now_ms: u64) {
        let result = score_match(self.combo, self.last_match_ms, now_ms);
        self.combo = result.combo;
        self.last_match_ms = Some(now_ms);
        self.score = self.score.saturating_add(result.points);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.events.push(GameEvent::HoldMatched {
            kind,
            count: MATCH_SIZE,
        });
        self.events.push(GameEvent::HoldChanged {
            slots: self.hold.slots(),
        });
        self.events.push(GameEvent::ScoreChanged {
            score: self.score,
            high_score: self.high_score,
        });
    }

    fn push_free_deltas(&mut self, deltas: Vec<FreeDelta>) {
        for delta in deltas {
            self.events.push(match delta {
                FreeDelta::Freed(tile) => GameEvent::TileFreed { tile },
                FreeDelta::Blocked(tile) => GameEvent::TileBlocked { tile },
            });
        }
    }
}
