//! Scoring module - match points and the combo window
//!
//! A cleared pair is worth `MATCH_BASE_SCORE` times the combo multiplier.
//! The combo grows while matches land within `COMBO_WINDOW_MS` of each other
//! and resets to 1 after a gap. Both timestamps come from the caller, so the
//! whole module is pure and clock-free.

use tile_pairs_types::{COMBO_WINDOW_MS, MATCH_BASE_SCORE};

/// Score outcome for one cleared pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this pair (base x combo)
    pub points: u32,
    /// Combo counter after this match
    pub combo: u32,
}

/// Points for a pair cleared at the given combo multiplier
pub fn match_points(combo: u32) -> u32 {
    MATCH_BASE_SCORE.saturating_mul(combo.max(1))
}

/// Whether a match at `now_ms` continues the chain started at `last_match_ms`
pub fn within_combo_window(last_match_ms: Option<u64>, now_ms: u64) -> bool {
    match last_match_ms {
        Some(last) => now_ms.saturating_sub(last) <= COMBO_WINDOW_MS,
        None => false,
    }
}

/// Combo counter after a match at `now_ms`
pub fn next_combo(previous: u32, last_match_ms: Option<u64>, now_ms: u64) -> u32 {
    if within_combo_window(last_match_ms, now_ms) {
        previous.saturating_add(1)
    } else {
        1
    }
}

/// Score one cleared pair: advance the combo and price the pair at the new
/// multiplier
pub fn score_match(previous_combo: u32, last_match_ms: Option<u64>, now_ms: u64) -> ScoreResult {
    let combo = next_combo(previous_combo, last_match_ms, now_ms);
    ScoreResult {
        points: match_points(combo),
        combo,
    }
}
