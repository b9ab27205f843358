//! Tests for the two-stone turn engine.

use connect6::{
    BoardError, Cell, Game, GameConfig, GameStatus, PlaceError, Player, Topology, TurnOutcome,
};

fn game(size: usize, topology: Topology, win_length: usize) -> Game {
    Game::new(GameConfig::new(size, topology, win_length).expect("valid config"))
}

#[test]
fn test_completing_row_wins_on_standard() {
    let mut game = game(5, Topology::Standard, 5);

    assert_eq!(game.place(0, 0, 0, 1), Ok(TurnOutcome::Continue));
    assert_eq!(game.place(4, 0, 4, 1), Ok(TurnOutcome::Continue));
    assert_eq!(game.place(0, 2, 0, 3), Ok(TurnOutcome::Continue));
    assert_eq!(game.place(3, 0, 4, 4), Ok(TurnOutcome::Continue));
    assert_eq!(game.place(0, 4, 2, 2), Ok(TurnOutcome::Win(Player::First)));
    assert_eq!(game.status(), GameStatus::Won(Player::First));
}

#[test]
fn test_column_wrapping_wins_only_on_torus() {
    let mut torus = game(5, Topology::Torus, 4);
    let mut standard = game(5, Topology::Standard, 4);
    for (r1, c1, r2, c2) in [(3, 2, 4, 2), (0, 0, 1, 0)] {
        assert_eq!(torus.place(r1, c1, r2, c2), Ok(TurnOutcome::Continue));
        assert_eq!(standard.place(r1, c1, r2, c2), Ok(TurnOutcome::Continue));
    }

    // Rows 3, 4, 0, 1 of column 2: one run on a torus, two pairs otherwise.
    assert_eq!(torus.place(0, 2, 1, 2), Ok(TurnOutcome::Win(Player::First)));
    assert_eq!(standard.place(0, 2, 1, 2), Ok(TurnOutcome::Continue));
}

#[test]
fn test_run_one_short_continues_then_wins() {
    let mut game = game(8, Topology::Standard, 6);

    game.place(0, 0, 0, 1).unwrap();
    game.place(7, 0, 7, 1).unwrap();
    game.place(0, 2, 0, 3).unwrap();
    game.place(7, 3, 5, 5).unwrap();
    assert_eq!(game.place(0, 4, 2, 2), Ok(TurnOutcome::Continue));
    game.place(7, 5, 4, 6).unwrap();
    assert_eq!(game.place(0, 5, 3, 3), Ok(TurnOutcome::Win(Player::First)));
}

#[test]
fn test_occupied_cell_leaves_everything_unchanged() {
    let mut game = game(6, Topology::Standard, 6);
    game.place(2, 2, 2, 3).unwrap();
    let board = game.board().clone();
    let to_move = game.to_move();

    let result = game.place(2, 3, 4, 4);

    assert!(matches!(
        result,
        Err(PlaceError::Board(BoardError::OccupiedCell(_)))
    ));
    assert_eq!(game.board(), &board);
    assert_eq!(game.to_move(), to_move);
}

#[test]
fn test_failed_second_stone_is_rolled_back() {
    let mut game = game(6, Topology::Torus, 6);
    game.place(1, 1, 1, 2).unwrap();
    let board = game.board().clone();

    // (7, 8) wraps onto the stone at (1, 2).
    assert!(game.place(4, 4, 7, 8).is_err());
    assert_eq!(game.board(), &board);
    assert_eq!(game.board().get(4, 4), Ok(Cell::Empty));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_duplicate_target_after_wrap() {
    let mut game = game(6, Topology::Torus, 6);
    assert!(matches!(
        game.place(0, 0, 6, 12),
        Err(PlaceError::DuplicateTarget(_))
    ));
    assert_eq!(game.board().empty_count(), 36);
}

#[test]
fn test_out_of_range_only_on_standard() {
    let mut standard = game(6, Topology::Standard, 6);
    let mut torus = game(6, Topology::Torus, 6);

    assert!(matches!(
        standard.place(6, 0, 0, 0),
        Err(PlaceError::Board(BoardError::OutOfRange { .. }))
    ));
    assert_eq!(torus.place(6, 0, 0, 1), Ok(TurnOutcome::Continue));
    assert_eq!(torus.board().get(0, 0), Ok(Cell::Occupied(Player::First)));
}

#[test]
fn test_full_board_without_run_is_draw() {
    let mut game = game(4, Topology::Standard, 4);
    let turns = [
        (0, 0, 0, 1),
        (0, 2, 0, 3),
        (1, 2, 1, 3),
        (1, 0, 1, 1),
        (2, 0, 2, 1),
        (2, 2, 2, 3),
        (3, 2, 3, 3),
    ];
    for (r1, c1, r2, c2) in turns {
        assert_eq!(game.place(r1, c1, r2, c2), Ok(TurnOutcome::Continue));
    }

    assert_eq!(game.place(3, 0, 3, 1), Ok(TurnOutcome::Draw));
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.place(0, 0, 1, 1), Err(PlaceError::GameAlreadyOver));
}

#[test]
fn test_is_full_agrees_with_get() {
    let mut game = game(4, Topology::Torus, 4);
    let all_set = |g: &Game| {
        (0..4).all(|r| (0..4).all(|c| g.board().get(r, c) != Ok(Cell::Empty)))
    };

    for (r1, c1, r2, c2) in [(0, 0, 0, 1), (0, 2, 0, 3), (1, 2, 1, 3)] {
        game.place(r1, c1, r2, c2).unwrap();
        assert_eq!(game.board().is_full(), all_set(&game));
    }
    assert!(!game.board().is_full());
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = game(6, Topology::Standard, 6);
    let turn = connect6::Turn::from_indices(Player::Second, 0, 0, 0, 1);
    assert_eq!(game.play_turn(turn), Err(PlaceError::NotYourTurn(Player::Second)));
    assert!(game.history().is_empty());
}

#[test]
fn test_horizontal_run_across_edge() {
    let mut torus = game(6, Topology::Torus, 4);
    let mut standard = game(6, Topology::Standard, 4);
    for g in [&mut torus, &mut standard] {
        g.place(0, 4, 0, 5).unwrap();
        g.place(3, 0, 3, 1).unwrap();
    }

    assert_eq!(torus.place(0, 0, 0, 1), Ok(TurnOutcome::Win(Player::First)));
    assert_eq!(standard.place(0, 0, 0, 1), Ok(TurnOutcome::Continue));
}
