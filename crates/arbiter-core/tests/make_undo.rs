//! Property-based tests using proptest.

use arbiter_core::{Geometry, Move, Position, PromotionPiece};
use proptest::prelude::*;
use proptest::sample::Index;

const START_FENS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Strategy for a random walk: which start position, then one index per ply
/// used to pick a legal move and a promotion piece.
fn walk_strategy() -> impl Strategy<Value = (usize, Vec<(Index, Index)>)> {
    (
        0..START_FENS.len(),
        prop::collection::vec((any::<Index>(), any::<Index>()), 1..=16),
    )
}

fn pick_move(position: &mut Position, geo: &Geometry, choice: &Index) -> Option<Move> {
    let us = position.side_to_move();
    let moves = position.generate_all_moves(geo, us);
    (!moves.is_empty()).then(|| moves[choice.index(moves.len())])
}

proptest! {
    /// Property: every apply is exactly reversed by undo.
    #[test]
    fn prop_undo_restores_each_step((start, walk) in walk_strategy()) {
        let geo = Geometry::build();
        let mut position: Position = START_FENS[start].parse().unwrap();

        for (choice, promo) in &walk {
            let Some(mv) = pick_move(&mut position, &geo, choice) else {
                break;
            };
            let before = position.clone();
            position.apply(mv, |_| PromotionPiece::ALL[promo.index(4)]);
            let after = position.clone();

            let undone = position.undo();
            prop_assert_eq!(&position, &before);
            prop_assert_eq!(undone.source(), mv.source());
            prop_assert_eq!(undone.dest(), mv.dest());

            position.apply(mv, |_| PromotionPiece::ALL[promo.index(4)]);
            prop_assert_eq!(&position, &after);
        }
    }

    /// Property: unwinding a whole game returns to the start position.
    #[test]
    fn prop_unwind_to_start((start, walk) in walk_strategy()) {
        let geo = Geometry::build();
        let initial: Position = START_FENS[start].parse().unwrap();
        let mut position = initial.clone();

        let mut played = 0;
        for (choice, promo) in &walk {
            let Some(mv) = pick_move(&mut position, &geo, choice) else {
                break;
            };
            position.apply(mv, |_| PromotionPiece::ALL[promo.index(4)]);
            played += 1;

            // The mover's king is never left attacked.
            prop_assert!(!position.in_check(&geo, !position.side_to_move()));
        }

        prop_assert_eq!(position.ply(), played);
        for _ in 0..played {
            position.undo();
        }
        prop_assert_eq!(&position, &initial);
        prop_assert_eq!(position.to_string(), initial.to_string());
    }

    /// Property: move generation never changes the position.
    #[test]
    fn prop_generation_is_pure((start, walk) in walk_strategy()) {
        let geo = Geometry::build();
        let mut position: Position = START_FENS[start].parse().unwrap();

        for (choice, _) in &walk {
            let snapshot = position.clone();
            let Some(mv) = pick_move(&mut position, &geo, choice) else {
                break;
            };
            prop_assert_eq!(&position, &snapshot);
            let _ = position.status(&geo);
            prop_assert_eq!(&position, &snapshot);
            position.apply(mv, |_| PromotionPiece::Queen);
        }
    }
}
