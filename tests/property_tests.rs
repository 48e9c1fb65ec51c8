//! Property tests over random board sizes, seeds and move sequences.

use memory_match::{
    Board, BoardSize, GameEngine, GameRng, PairOutcome, PlayerId, Position,
};
use proptest::prelude::*;

/// Even-sized boards from 2x2 up to 8x8.
fn board_size() -> impl Strategy<Value = BoardSize> {
    (1usize..=8, 1usize..=8)
        .prop_filter("even card count of at least 4", |(r, c)| r * c % 2 == 0 && r * c >= 4)
        .prop_map(|(rows, cols)| BoardSize { rows, cols })
}

fn total_score(game: &GameEngine) -> u32 {
    game.scores().iter().map(|(_, s)| *s).sum()
}

proptest! {
    #[test]
    fn prop_board_pairs_every_symbol(size in board_size(), seed in any::<u64>()) {
        let board = Board::generate(size, &mut GameRng::new(seed)).unwrap();
        let symbols = board.sorted_symbols();

        prop_assert_eq!(symbols.len(), size.card_count());
        for (i, chunk) in symbols.chunks(2).enumerate() {
            prop_assert_eq!(chunk[0].index() as usize, i);
            prop_assert_eq!(chunk[0], chunk[1]);
        }
    }

    #[test]
    fn prop_symbol_multiset_independent_of_seed(
        size in board_size(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let a = Board::generate(size, &mut GameRng::new(seed_a)).unwrap();
        let b = Board::generate(size, &mut GameRng::new(seed_b)).unwrap();
        prop_assert_eq!(a.sorted_symbols(), b.sorted_symbols());
    }

    #[test]
    fn prop_evaluate_pair_is_symmetric(
        size in board_size(),
        seed in any::<u64>(),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let base = GameEngine::with_seed("Alice", "Bob", false, size.rows, size.cols, seed).unwrap();
        let positions: Vec<Position> = base.board().positions().collect();
        let a = positions[i.index(positions.len())];
        let b = positions[j.index(positions.len())];
        prop_assume!(a != b);

        let mut forward = base.clone();
        let mut backward = base;
        let out_ab = forward.evaluate_pair(a, b).unwrap();
        let out_ba = backward.evaluate_pair(b, a).unwrap();

        prop_assert_eq!(out_ab, out_ba);
        prop_assert_eq!(forward.scores(), backward.scores());
        prop_assert_eq!(forward.unmatched_positions(), backward.unmatched_positions());
        prop_assert_eq!(forward.memory().len(), backward.memory().len());
        prop_assert_eq!(forward.memory().contains(a), backward.memory().contains(a));
        prop_assert_eq!(forward.memory().contains(b), backward.memory().contains(b));
    }

    #[test]
    fn prop_random_play_keeps_invariants(
        size in board_size(),
        seed in any::<u64>(),
        picks in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..200),
    ) {
        let mut game = GameEngine::with_seed("Alice", "Bob", false, size.rows, size.cols, seed).unwrap();
        let cards = size.card_count();

        for (i, j) in picks {
            if game.is_finished() {
                break;
            }
            let open = game.unmatched_positions();
            let a = open[i.index(open.len())];
            let b = open[j.index(open.len())];
            if a == b {
                continue;
            }

            let player = game.current_player();
            let before = game.scores().clone();
            let outcome = game.evaluate_pair(a, b).unwrap();

            match outcome {
                PairOutcome::Match => {
                    prop_assert!(game.is_matched(a) && game.is_matched(b));
                    prop_assert!(!game.memory().contains(a) && !game.memory().contains(b));
                    prop_assert_eq!(game.score(player), before[player] + 1);
                    prop_assert_eq!(game.score(player.other()), before[player.other()]);
                    prop_assert_eq!(game.current_player(), player);
                }
                PairOutcome::NoMatch => {
                    prop_assert_eq!(game.scores(), &before);
                    prop_assert!(game.memory().contains(a) && game.memory().contains(b));
                    prop_assert_eq!(game.switch_turn().unwrap(), player.other());
                }
            }

            // Memory never holds a matched card nor more than two per symbol.
            for (_, seen) in game.memory().iter() {
                prop_assert!(!seen.is_empty() && seen.len() <= 2);
                prop_assert!(seen.iter().all(|p| !game.is_matched(*p)));
            }

            let total = total_score(&game) as usize;
            prop_assert!(total * 2 <= cards);
            prop_assert_eq!(total * 2, game.matched_count());
            prop_assert_eq!(game.is_finished(), total * 2 == cards);
            prop_assert_eq!(game.check_winner().is_some(), game.is_finished());
        }
    }

    #[test]
    fn prop_computer_move_is_two_distinct_hidden_cards(
        size in board_size(),
        seed in any::<u64>(),
        keep in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut game = GameEngine::with_seed("Alice", "Computer", true, size.rows, size.cols, seed).unwrap();
        let hidden: Vec<Position> = game
            .board()
            .positions()
            .zip(keep.iter().cycle())
            .filter(|(_, k)| **k)
            .map(|(p, _)| p)
            .collect();
        prop_assume!(hidden.len() >= 2);

        let (a, b) = game.computer_choose_move(&hidden).unwrap();
        prop_assert_ne!(a, b);
        prop_assert!(hidden.contains(&a));
        prop_assert!(hidden.contains(&b));
    }

    #[test]
    fn prop_computer_game_finishes_with_stable_result(size in board_size(), seed in any::<u64>()) {
        let mut game = GameEngine::with_seed("Alice", "Computer", true, size.rows, size.cols, seed).unwrap();
        let limit = size.card_count() * size.card_count();

        let mut turns = 0;
        while !game.is_finished() && turns < limit {
            let hidden = game.unmatched_positions();
            let (a, b) = game.computer_choose_move(&hidden).unwrap();
            if game.evaluate_pair(a, b).unwrap() == PairOutcome::NoMatch {
                game.switch_turn().unwrap();
            }
            turns += 1;
        }

        prop_assert!(game.is_finished());
        let result = game.check_winner().unwrap();
        prop_assert_eq!(game.check_winner(), Some(result.clone()));
        prop_assert_eq!(
            (game.score(PlayerId::FIRST) + game.score(PlayerId::SECOND)) as usize,
            size.pair_count()
        );
    }
}
