//! Board tests - generation, reachability and shuffle properties

use tile_pairs::core::{Board, Layout, SimpleRng};
use tile_pairs::types::{TileId, TileKind, TilePosition, DEFAULT_PALETTE_SIZE};

fn spaced_row(count: usize, palette_size: u8) -> Layout {
    let positions = (0..count)
        .map(|i| TilePosition::new((i as i8) * 2, 0, 0))
        .collect();
    Layout::new(positions, palette_size).unwrap()
}

#[test]
fn test_generation_every_kind_appears_an_even_number_of_times() {
    for seed in [1, 42, 12345, 987_654] {
        let layout = Layout::pyramid();
        let board = Board::new(&layout, &mut SimpleRng::new(seed));

        let mut total = 0;
        for kind in 0..DEFAULT_PALETTE_SIZE {
            let count = board.kind_count(TileKind(kind));
            assert_eq!(count % 2, 0, "seed {} kind {}", seed, kind);
            total += count;
        }
        assert_eq!(total, layout.len());
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let layout = Layout::pyramid();
    let a = Board::new(&layout, &mut SimpleRng::new(77));
    let b = Board::new(&layout, &mut SimpleRng::new(77));
    let c = Board::new(&layout, &mut SimpleRng::new(78));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_pyramid_reachability() {
    let board = Board::new(&Layout::pyramid(), &mut SimpleRng::new(1));
    let at = |column: i8, row: i8, layer: i8| {
        board
            .tiles()
            .iter()
            .find(|t| {
                t.position.column == column && t.position.row == row && t.position.layer == layer
            })
            .expect("cell exists")
            .id
    };

    // Cap corners have an open side and nothing above.
    assert!(board.is_free(at(2, 1, 2)));
    assert!(board.is_free(at(4, 2, 2)));
    // The cap center is flanked on both sides.
    assert!(!board.is_free(at(3, 1, 2)));
    // Everything under the cap is covered.
    assert!(!board.is_free(at(3, 1, 1)));
    assert!(!board.is_free(at(3, 1, 0)));
    // Base corners are open.
    assert!(board.is_free(at(0, 0, 0)));
    assert!(board.is_free(at(6, 3, 0)));
}

#[test]
fn test_is_free_is_stable_without_mutation() {
    let board = Board::new(&Layout::pyramid(), &mut SimpleRng::new(5));

    let first: Vec<bool> = board
        .tiles()
        .iter()
        .map(|t| board.compute_free(t.id))
        .collect();
    let second: Vec<bool> = board
        .tiles()
        .iter()
        .map(|t| board.compute_free(t.id))
        .collect();

    assert_eq!(first, second);
    for tile in board.tiles() {
        assert_eq!(board.is_free(tile.id), board.compute_free(tile.id));
    }
}

#[test]
fn test_removals_only_ever_free_more_of_a_flat_row() {
    // A flat row with no layering: removing an end tile frees its neighbor.
    let mut board = Board::new(
        &Layout::new(
            (0..5).map(|i| TilePosition::new(i, 0, 0)).collect(),
            2,
        )
        .unwrap(),
        &mut SimpleRng::new(3),
    );

    assert!(board.is_free(TileId(0)));
    assert!(!board.is_free(TileId(2)));

    board.remove(TileId(0)).unwrap();
    assert!(board.is_free(TileId(1)));

    board.remove(TileId(1)).unwrap();
    assert!(board.is_free(TileId(2)));
}

#[test]
fn test_shuffle_only_permutes_kinds() {
    let mut board = Board::new(&Layout::pyramid(), &mut SimpleRng::new(9));
    let mut rng = SimpleRng::new(1000);

    let ids_before: Vec<_> = board.tiles().iter().map(|t| t.id).collect();
    let positions_before: Vec<_> = board.tiles().iter().map(|t| t.position).collect();
    let counts_before: Vec<_> = (0..DEFAULT_PALETTE_SIZE)
        .map(|k| board.kind_count(TileKind(k)))
        .collect();

    board.shuffle(&mut rng);

    let ids_after: Vec<_> = board.tiles().iter().map(|t| t.id).collect();
    let positions_after: Vec<_> = board.tiles().iter().map(|t| t.position).collect();
    let counts_after: Vec<_> = (0..DEFAULT_PALETTE_SIZE)
        .map(|k| board.kind_count(TileKind(k)))
        .collect();

    assert_eq!(ids_before, ids_after);
    assert_eq!(positions_before, positions_after);
    assert_eq!(counts_before, counts_after);
}

#[test]
fn test_hint_on_a_fresh_board_is_always_selectable() {
    for seed in 1..20 {
        let board = Board::new(&Layout::pyramid(), &mut SimpleRng::new(seed));
        let hint = board.find_hint(&[]).expect("fresh board has a hint");
        assert!(board.is_free(hint));
        // The suggested kind can actually pair up.
        let kind = board.tile(hint).unwrap().kind;
        assert!(board.kind_count(kind) >= 2);
    }
}

#[test]
fn test_flat_open_board_is_entirely_free() {
    let board = Board::new(&spaced_row(6, 3), &mut SimpleRng::new(2));
    assert!(board.tiles().iter().all(|t| board.is_free(t.id)));
}
