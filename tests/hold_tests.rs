//! Hold tests - slot discipline over longer scripted sequences

use tile_pairs::core::{HoldArea, HoldOutcome};
use tile_pairs::types::{TileKind, HOLD_CAPACITY};

fn assert_compacted(hold: &HoldArea) {
    let slots = hold.slots();
    let occupied = slots.iter().take_while(|s| s.is_some()).count();
    assert!(
        slots[occupied..].iter().all(|s| s.is_none()),
        "gap in hold slots: {:?}",
        slots
    );
    assert_eq!(occupied, hold.len());
}

#[test]
fn test_compaction_holds_across_a_long_sequence() {
    let mut hold = HoldArea::new();
    let script: [u8; 12] = [0, 1, 0, 2, 3, 2, 3, 1, 4, 5, 4, 5];

    for kind in script {
        let outcome = hold.insert(TileKind(kind));
        assert_ne!(outcome, HoldOutcome::Rejected);
        assert_ne!(outcome, HoldOutcome::FullNoMatch);
        assert_compacted(&hold);
    }
    assert!(hold.is_empty());
}

#[test]
fn test_no_kind_ever_appears_twice_between_inserts() {
    let mut hold = HoldArea::new();

    // Pairs resolve immediately, so between inserts every held kind is unique.
    for kind in [7, 3, 7, 9, 3, 9, 1, 2, 1] {
        hold.insert(TileKind(kind));
        for &held in hold.held() {
            assert_eq!(hold.count_of(held), 1);
        }
    }
}

#[test]
fn test_survivors_keep_their_relative_order() {
    let mut hold = HoldArea::new();
    hold.insert(TileKind(4));
    hold.insert(TileKind(8));
    hold.insert(TileKind(6));
    hold.insert(TileKind(8));

    assert_eq!(hold.held(), &[TileKind(4), TileKind(6)]);
}

#[test]
fn test_loss_requires_four_distinct_kinds() {
    let mut hold = HoldArea::new();
    hold.insert(TileKind(0));
    hold.insert(TileKind(1));
    hold.insert(TileKind(2));

    assert_eq!(hold.insert(TileKind(3)), HoldOutcome::FullNoMatch);
    assert_eq!(hold.len(), HOLD_CAPACITY);
    assert_compacted(&hold);
}

#[test]
fn test_full_hold_rejects_without_mutation() {
    let mut hold = HoldArea::new();
    for kind in [0, 1, 2, 3] {
        hold.insert(TileKind(kind));
    }

    let before = hold.slots();
    assert_eq!(hold.insert(TileKind(1)), HoldOutcome::Rejected);
    assert_eq!(hold.slots(), before);
}
