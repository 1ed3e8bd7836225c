//! Property-based tests for the move history.
//!
//! Random sequences of plays and jumps must always leave a history that
//! could have come from legal play.

use proptest::prelude::*;
use tictactoe_history::tictactoe::{
    Board, GameEngine, GameStatus, PlayOutcome, SortOrder, move_list, validate_history,
};

#[derive(Debug, Clone, Copy)]
enum Action {
    Play(usize),
    /// Jump to `n % history.len()`
    Jump(usize),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Play),
        1 => (0usize..16).prop_map(Action::Jump),
    ]
}

fn run(actions: &[Action]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &action in actions {
        match action {
            Action::Play(cell) => {
                engine.apply_move(cell).unwrap();
            }
            Action::Jump(n) => {
                let len = engine.history().len();
                engine.jump_to(n % len).unwrap();
            }
        }
    }
    engine
}

proptest! {
    #[test]
    fn history_stays_valid(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let engine = run(&actions);
        prop_assert!(validate_history(engine.history()).is_ok());
        prop_assert!(engine.current_move() < engine.history().len());
        prop_assert_eq!(engine.history()[0].board, Board::new());
    }

    #[test]
    fn ignored_play_changes_nothing(
        actions in proptest::collection::vec(arb_action(), 0..30),
        cell in 0usize..9,
    ) {
        let mut engine = run(&actions);
        let before = engine.clone();
        let outcome = engine.apply_move(cell).unwrap();
        if outcome.is_played() {
            prop_assert_eq!(engine.current_move(), before.current_move() + 1);
            prop_assert_eq!(engine.history().len(), before.current_move() + 2);
        } else {
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn won_boards_are_frozen(
        actions in proptest::collection::vec(arb_action(), 0..40),
        cell in 0usize..9,
    ) {
        let mut engine = run(&actions);
        if let GameStatus::Winner(_) = engine.status() {
            let before = engine.clone();
            let outcome = engine.apply_move(cell).unwrap();
            prop_assert!(matches!(outcome, PlayOutcome::Occupied | PlayOutcome::GameOver));
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn move_list_orders_are_mirrors(actions in proptest::collection::vec(arb_action(), 0..30)) {
        let engine = run(&actions);
        let mut asc = move_list(&engine, SortOrder::Ascending);
        let desc = move_list(&engine, SortOrder::Descending);
        prop_assert_eq!(asc.len(), engine.history().len());
        asc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn turn_follows_move_parity(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let engine = run(&actions);
        if let GameStatus::InProgress(next) = engine.status() {
            prop_assert_eq!(next, engine.current_player());
            prop_assert_eq!(next, engine.current_board().next_player());
        }
    }
}
