//! Layout module - immutable board shapes
//!
//! A layout is the static table of occupied `(column, row, layer)` cells for
//! one board shape, plus the palette size used when assigning kinds. It is a
//! plain value handed to board construction, so tests can supply arbitrary
//! shapes without touching the built-in one.

use tile_pairs_types::{TilePosition, DEFAULT_PALETTE_SIZE};

/// Rejection when a layout cannot produce a playable board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// No positions - there would be nothing to select
    Empty,
    /// A zero-kind palette cannot assign any kind
    ZeroPalette,
}

impl LayoutError {
    pub fn message(self) -> &'static str {
        match self {
            LayoutError::Empty => "layout has no positions",
            LayoutError::ZeroPalette => "layout palette is empty",
        }
    }
}

/// Immutable board shape: occupied cells plus palette size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    positions: Vec<TilePosition>,
    palette_size: u8,
}

impl Layout {
    /// Build a layout from an explicit position table
    pub fn new(positions: Vec<TilePosition>, palette_size: u8) -> Result<Self, LayoutError> {
        if positions.is_empty() {
            return Err(LayoutError::Empty);
        }
        if palette_size == 0 {
            return Err(LayoutError::ZeroPalette);
        }
        Ok(Self {
            positions,
            palette_size,
        })
    }

    /// The built-in three-layer pyramid: a 7x4 base, a 5x2 middle layer and
    /// a 3x2 top layer stacked over the center. 44 cells, so every kind can
    /// be assigned in complete pairs.
    pub fn pyramid() -> Self {
        let mut positions = Vec::with_capacity(44);

        // Layer 0: full 7x4 base
        for row in 0..4 {
            for column in 0..7 {
                positions.push(TilePosition::new(column, row, 0));
            }
        }

        // Layer 1: 5x2 over the middle rows
        for row in 1..3 {
            for column in 1..6 {
                positions.push(TilePosition::new(column, row, 1));
            }
        }

        // Layer 2: 3x2 cap
        for row in 1..3 {
            for column in 2..5 {
                positions.push(TilePosition::new(column, row, 2));
            }
        }

        Self {
            positions,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }

    pub fn positions(&self) -> &[TilePosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::pyramid()
    }
}
