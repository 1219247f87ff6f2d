//! Board module - tile set, pairing, reachability, shuffle and hints
//!
//! The board owns one tile per layout position. Kinds are assigned at
//! construction so that every kind appears in complete pairs, then permuted
//! uniformly. A tile is selectable ("free") when nothing rests on top of it
//! and at least one horizontal side is open; free states are recomputed
//! eagerly after every removal or shuffle. Board sizes stay below ~100
//! tiles, so the O(n^2) recompute is not worth caching around.

use tile_pairs_types::{TileId, TileKind, TilePosition};

use crate::layout::Layout;
use crate::rng::SimpleRng;

/// A single tile. Identity and position never change; `kind` is only
/// reassigned wholesale by a shuffle, and `removed` flips true exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub position: TilePosition,
    pub kind: TileKind,
    pub removed: bool,
}

/// Free-state transition observed during a recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeDelta {
    Freed(TileId),
    Blocked(TileId),
}

/// The tile board for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    free: Vec<bool>,
}

impl Board {
    /// Build a board over `layout`, assigning kinds in shuffled pairs.
    /// `Layout` construction already rejects empty shapes, so this cannot
    /// produce a tile-less board.
    pub fn new(layout: &Layout, rng: &mut SimpleRng) -> Self {
        let kinds = paired_kinds(layout.len(), layout.palette_size(), rng);
        let tiles = layout
            .positions()
            .iter()
            .zip(kinds)
            .enumerate()
            .map(|(index, (&position, kind))| Tile {
                id: TileId(index as u16),
                position,
                kind,
                removed: false,
            })
            .collect::<Vec<_>>();

        let free = vec![false; tiles.len()];
        let mut board = Self { tiles, free };
        board.recompute_free();
        board
    }

    /// Look up a tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// All tiles in board order (including removed ones)
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles still on the board
    pub fn remaining(&self) -> usize {
        self.tiles.iter().filter(|t| !t.removed).count()
    }

    /// Number of non-removed tiles of `kind`
    pub fn kind_count(&self, kind: TileKind) -> usize {
        self.tiles
            .iter()
            .filter(|t| !t.removed && t.kind == kind)
            .count()
    }

    /// Current free state of a tile (eagerly maintained view)
    pub fn is_free(&self, id: TileId) -> bool {
        self.free.get(id.index()).copied().unwrap_or(false)
    }

    /// Compute a tile's free state fresh from current positions.
    ///
    /// A tile is free when no non-removed tile sits at the same cell in a
    /// strictly higher layer, and its left or right neighbor cell (same row
    /// and layer) is open. Removed and unknown tiles are never free.
    pub fn compute_free(&self, id: TileId) -> bool {
        let Some(tile) = self.tile(id) else {
            return false;
        };
        if tile.removed {
            return false;
        }
        !self.covered(tile) && !self.flanked(tile)
    }

    fn covered(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|other| {
            !other.removed
                && other.position.layer > tile.position.layer
                && other.position.same_cell(&tile.position)
        })
    }

    fn flanked(&self, tile: &Tile) -> bool {
        let p = tile.position;
        self.occupied(p.column - 1, p.row, p.layer) && self.occupied(p.column + 1, p.row, p.layer)
    }

    fn occupied(&self, column: i8, row: i8, layer: i8) -> bool {
        self.tiles.iter().any(|t| {
            !t.removed
                && t.position.column == column
                && t.position.row == row
                && t.position.layer == layer
        })
    }

    /// Refresh every tile's free state and report the transitions.
    /// A tile that left the board is reported by the caller as a removal,
    /// not as a block, so it produces no delta here.
    pub fn recompute_free(&mut self) -> Vec<FreeDelta> {
        let mut deltas = Vec::new();
        for index in 0..self.tiles.len() {
            let id = TileId(index as u16);
            let now = self.compute_free(id);
            if now == self.free[index] {
                continue;
            }
            self.free[index] = now;
            if self.tiles[index].removed {
                continue;
            }
            deltas.push(if now {
                FreeDelta::Freed(id)
            } else {
                FreeDelta::Blocked(id)
            });
        }
        deltas
    }

    /// Mark a tile removed and recompute free states.
    /// Returns `None` (and changes nothing) for unknown or already-removed
    /// tiles; the caller is expected to have checked `is_free` first.
    pub fn remove(&mut self, id: TileId) -> Option<Vec<FreeDelta>> {
        let tile = self.tiles.get_mut(id.index())?;
        if tile.removed {
            return None;
        }
        tile.removed = true;
        Some(self.recompute_free())
    }

    /// Re-deal the kinds of all remaining tiles with a fresh uniform
    /// permutation. Positions, identities and removed tiles are untouched,
    /// so the kind multiset is preserved.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) -> Vec<FreeDelta> {
        let mut kinds: Vec<TileKind> = self
            .tiles
            .iter()
            .filter(|t| !t.removed)
            .map(|t| t.kind)
            .collect();
        rng.shuffle(&mut kinds);

        let mut next = kinds.into_iter();
        for tile in self.tiles.iter_mut().filter(|t| !t.removed) {
            if let Some(kind) = next.next() {
                tile.kind = kind;
            }
        }
        self.recompute_free()
    }

    /// Suggest a tile worth selecting, favoring moves that finish a pair
    /// soonest:
    ///
    /// 1. a free tile whose kind is already waiting in the hold area,
    /// 2. a free tile with a free partner of the same kind,
    /// 3. a free tile whose kind can still pair up somewhere on the board.
    ///
    /// Within each priority the first hit in board order wins, so hints are
    /// stable for a given state.
    pub fn find_hint(&self, held: &[TileKind]) -> Option<TileId> {
        for tile in self.free_tiles() {
            if held.contains(&tile.kind) {
                return Some(tile.id);
            }
        }
        for tile in self.free_tiles() {
            let has_free_partner = self
                .free_tiles()
                .any(|other| other.id != tile.id && other.kind == tile.kind);
            if has_free_partner {
                return Some(tile.id);
            }
        }
        for tile in self.free_tiles() {
            if self.kind_count(tile.kind) >= 2 {
                return Some(tile.id);
            }
        }
        None
    }

    fn free_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles
            .iter()
            .filter(|t| !t.removed && self.free[t.id.index()])
    }

    /// Overwrite a tile's kind (fixture setup only)
    #[cfg(test)]
    pub(crate) fn set_kind(&mut self, id: TileId, kind: TileKind) {
        self.tiles[id.index()].kind = kind;
    }
}

/// Emit `count` kinds as pairs cycling through the palette, pad an odd count
/// with one extra kind-0 tile, then apply a uniform permutation.
fn paired_kinds(count: usize, palette_size: u8, rng: &mut SimpleRng) -> Vec<TileKind> {
    let mut kinds = Vec::with_capacity(count);
    for pair in 0..count / 2 {
        let kind = TileKind((pair % palette_size as usize) as u8);
        kinds.push(kind);
        kinds.push(kind);
    }
    if count % 2 == 1 {
        // An odd shape leaves one tile without a partner; it always gets
        // kind 0 and stays on the board to the end.
        kinds.push(TileKind(0));
    }
    rng.shuffle(&mut kinds);
    kinds
}
