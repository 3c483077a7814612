//! Tests for the move history engine through the public API.

use timeline_core::{
    Board, IgnoredMove, LINES, MoveHistory, MoveOutcome, Outcome, Player, Position, Square,
    Status, evaluate,
};

fn play(moves: &[usize]) -> MoveHistory {
    let mut history = MoveHistory::new();
    for &index in moves {
        assert!(history.apply_move(index).is_applied(), "move {index} rejected");
    }
    history
}

#[test]
fn test_completed_lines_win_and_empty_board_does_not() {
    assert_eq!(evaluate(&Board::new()), Outcome::NoWinner);
    for line in LINES {
        let board = line
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, Player::O));
        assert_eq!(evaluate(&board), Outcome::Winner(Player::O));
    }
}

#[test]
fn test_occupied_square_is_never_overwritten() {
    let mut history = play(&[4, 0]);
    for index in [4, 0] {
        let before = history.clone();
        assert!(!history.apply_move(index).is_applied());
        assert_eq!(history, before);
    }
    assert_eq!(history.current().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(history.current().get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_no_moves_after_a_win() {
    let mut history = play(&[0, 1, 3, 4, 6]);
    let before = history.clone();
    for index in 0..9 {
        assert_eq!(
            history.apply_move(index),
            MoveOutcome::Ignored(IgnoredMove::GameWon(Player::X))
        );
        assert_eq!(history, before);
    }
}

#[test]
fn test_jump_parity_decides_turn() {
    let mut history = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
    for step in 0..history.len() {
        assert!(history.jump_to(step));
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(history.to_move(), expected, "step {step}");
        assert_eq!(history.len(), 9);
    }
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut history = play(&[0, 1, 2, 4, 3]);
    let old = history.snapshots().to_vec();

    history.jump_to(2);
    assert!(history.apply_move(8).is_applied());

    assert_eq!(history.len(), 4);
    assert_eq!(history.cursor(), 3);
    assert_eq!(&history.snapshots()[..3], &old[..3]);
    for stale in &old[3..] {
        assert!(!history.snapshots().contains(stale));
    }
    assert_eq!(history.current().get(Position::BottomRight), Square::Occupied(Player::X));
}

#[test]
fn test_move_after_every_jump_truncates_to_step() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6];
    let full = play(&moves);
    let old = full.snapshots().to_vec();

    for step in 0..old.len() - 1 {
        let mut history = full.clone();
        assert!(history.jump_to(step));
        assert!(history.apply_move(8).is_applied(), "step {step}");

        assert_eq!(history.len(), step + 2, "step {step}");
        assert_eq!(history.cursor(), step + 1);
        assert_eq!(&history.snapshots()[..=step], &old[..=step]);
        for stale in &old[step + 1..] {
            assert!(!history.snapshots().contains(stale), "step {step}");
        }
    }
}

#[test]
fn test_out_of_range_jump_is_noop() {
    let mut history = play(&[0, 1]);
    history.jump_to(1);
    let before = history.clone();
    assert!(!history.jump_to(3));
    assert!(!history.jump_to(usize::MAX));
    assert_eq!(history, before);
}

#[test]
fn test_scenario_first_move() {
    let mut history = MoveHistory::new();
    history.apply_move(0);

    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 1);
    let mut expected = [Square::Empty; 9];
    expected[0] = Square::Occupied(Player::X);
    assert_eq!(history.current().squares(), &expected);
    assert_eq!(history.status().to_string(), "Next player: O");
}

#[test]
fn test_scenario_column_win() {
    let mut history = play(&[0, 1, 3, 4, 6]);
    assert_eq!(evaluate(history.current()), Outcome::Winner(Player::X));
    assert_eq!(history.status(), Status::Winner(Player::X));
    assert_eq!(history.status().to_string(), "Winner: X");

    let len = history.len();
    history.apply_move(8);
    assert_eq!(history.len(), len);
}

#[test]
fn test_scenario_rewind_and_branch() {
    let mut history = play(&[0]);
    history.jump_to(0);

    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current(), &Board::new());
    assert_eq!(history.status().to_string(), "Next player: X");

    history.apply_move(5);
    assert_eq!(history.len(), 2);
    let board = history.current();
    assert_eq!(board.get(Position::MiddleRight), Square::Occupied(Player::X));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_rewinding_past_a_win_allows_play() {
    let mut history = play(&[0, 1, 3, 4, 6]);
    history.jump_to(4);
    assert_eq!(history.status(), Status::InProgress { next: Player::X });
    assert!(history.apply_move(8).is_applied());
    assert_eq!(history.len(), 6);
}

#[test]
fn test_full_board_reads_as_in_progress() {
    // X O X / X O O / O X X
    let history = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(history.current().occupied_count(), 9);
    assert_eq!(history.status(), Status::InProgress { next: Player::O });
}

#[test]
fn test_place_by_position() {
    let mut history = MoveHistory::new();
    assert_eq!(
        history.place(Position::BottomLeft),
        MoveOutcome::Applied {
            position: Position::BottomLeft,
            player: Player::X,
            step: 1,
        }
    );
    assert_eq!(Position::valid_moves(history.current()).len(), 8);
}
