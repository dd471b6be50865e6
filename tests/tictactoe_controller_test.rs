//! Scenario tests for the round controller.

use strictly_tictactoe::{
    GameController, LINES, Mark, MoveOutcome, MoveRejection, PlayerSlot, PresentationEvent,
    RecordingPresenter, RoundPhase, Square,
};

fn new_game() -> GameController<RecordingPresenter> {
    let mut game = GameController::new(RecordingPresenter::new());
    game.start_game();
    game
}

/// Starts rounds until `slot` is the one to open.
fn opened_by(slot: PlayerSlot) -> GameController<RecordingPresenter> {
    let mut game = new_game();
    if game.round_starter() != Some(slot) {
        game.start_game();
    }
    assert_eq!(game.round_starter(), Some(slot));
    game
}

/// Two squares off `line` for the opponent; two marks can never win.
fn filler_for(line: [usize; 3]) -> Vec<usize> {
    (0..9).filter(|i| !line.contains(i)).take(2).collect()
}

#[test]
fn test_x_top_row_wins() {
    let mut game = opened_by(PlayerSlot::One);
    for index in [0, 3, 1, 4] {
        assert!(matches!(game.make_move(index), MoveOutcome::Continue { .. }));
    }
    let MoveOutcome::Won(line) = game.make_move(2) else {
        panic!("X should have won");
    };
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(line.mark(), Mark::X);
    assert_eq!(*game.player(PlayerSlot::One).score(), 1);
    assert_eq!(game.phase(), RoundPhase::RoundOver);
}

#[test]
fn test_every_line_wins_through_alternating_moves() {
    for line in LINES {
        let mut game = opened_by(PlayerSlot::One);
        let filler = filler_for(line);

        assert!(game.make_move(line[0]).is_accepted());
        assert!(matches!(game.make_move(filler[0]), MoveOutcome::Continue { .. }));
        assert!(matches!(game.make_move(line[1]), MoveOutcome::Continue { .. }));
        assert!(matches!(game.make_move(filler[1]), MoveOutcome::Continue { .. }));

        let outcome = game.make_move(line[2]);
        let MoveOutcome::Won(won) = outcome else {
            panic!("line {line:?} not detected: {outcome:?}");
        };
        assert_eq!(won.indices(), line);
        assert_eq!(won.mark(), Mark::X);
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut game = opened_by(PlayerSlot::One);
    // X O X / O X X / O X O
    let order = [0, 1, 2, 3, 4, 6, 5, 8, 7];
    for index in &order[..8] {
        assert!(matches!(game.make_move(*index), MoveOutcome::Continue { .. }));
    }
    assert_eq!(game.make_move(order[8]), MoveOutcome::Tie);
    assert_eq!(game.presenter().last_message(), Some("It's a tie!"));
    assert_eq!(*game.player(PlayerSlot::One).score(), 0);
    assert_eq!(*game.player(PlayerSlot::Two).score(), 0);
    assert!(
        !game
            .presenter()
            .events()
            .iter()
            .any(|e| matches!(e, PresentationEvent::WinningLine(_)))
    );
}

#[test]
fn test_anti_diagonal_sequence_ends_on_eighth_move() {
    // 0,4,1,3,5,2,7,6,8 gives the second mover 4,3,2,6: the 2-4-6 diagonal.
    let mut game = opened_by(PlayerSlot::One);
    for index in [0, 4, 1, 3, 5, 2, 7] {
        assert!(matches!(game.make_move(index), MoveOutcome::Continue { .. }));
    }
    let MoveOutcome::Won(line) = game.make_move(6) else {
        panic!("O should complete the anti-diagonal");
    };
    assert_eq!(line.indices(), [2, 4, 6]);
    assert_eq!(
        game.make_move(8),
        MoveOutcome::Rejected(MoveRejection::RoundOver)
    );
}

#[test]
fn test_second_move_on_same_square_is_no_op() {
    let mut game = new_game();
    game.make_move(4);
    let board = game.board().clone();
    let slot = game.current_slot();
    let events = game.presenter().events().len();

    assert_eq!(
        game.make_move(4),
        MoveOutcome::Rejected(MoveRejection::Occupied(4))
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_slot(), slot);
    assert_eq!(game.presenter().events().len(), events);
}

#[test]
fn test_starter_alternates_across_finished_rounds() {
    let mut game = new_game();
    let mut starters = vec![game.round_starter()];
    for _ in 0..4 {
        // Opener takes the top row while the other fills the middle.
        for index in [0, 3, 1, 4, 2] {
            game.make_move(index);
        }
        assert_eq!(game.phase(), RoundPhase::RoundOver);
        game.start_game();
        starters.push(game.round_starter());
    }
    assert_eq!(starters[0], Some(PlayerSlot::Two));
    for pair in starters.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    // Each opener won their own round.
    assert_eq!(*game.player(PlayerSlot::One).score(), 2);
    assert_eq!(*game.player(PlayerSlot::Two).score(), 2);
}

#[test]
fn test_new_round_clears_board() {
    let mut game = new_game();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index);
    }
    game.start_game();
    assert!(game.board().cells().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.phase(), RoundPhase::AwaitingMove);
    assert!(game.pending_restart().is_none());
}

#[test]
fn test_names_appear_in_messages() {
    let mut game = new_game();
    game.update_player_names("Ada", "Grace");
    game.start_game();
    // Player 1 opens the second round.
    assert_eq!(game.presenter().last_message(), Some("Ada's turn"));
    game.make_move(0);
    assert_eq!(game.presenter().last_message(), Some("Grace's turn"));
    assert!(
        game.presenter()
            .events()
            .contains(&PresentationEvent::PlayerNames("Ada".into(), "Grace".into()))
    );
}
