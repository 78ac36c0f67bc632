use tictactoe::{
    evaluate, Board, Cell, CellDelta, GameOutcome, GameState, LineKind, MoveError, Player,
};

fn play(game: &mut GameState, moves: &[(usize, usize)]) {
    for &(r, c) in moves {
        let res = game.apply_move(r, c, game.current_turn());
        assert!(res.accepted, "move ({}, {}) rejected: {:?}", r, c, res.rejection);
    }
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.current_turn(), Player::X);
    assert_eq!(Cell::from(game.current_turn()), Cell::X);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.evaluate(), GameOutcome::InProgress);
    assert_eq!(game.score(), (0, 0));
    assert_eq!(game.board().filled(), 0);
}

#[test]
fn test_top_row_win_scores_x() {
    let mut game = GameState::new();
    let moves = [
        (0, 0, Player::X),
        (1, 1, Player::O),
        (0, 1, Player::X),
        (2, 2, Player::O),
    ];
    for (r, c, p) in moves {
        let res = game.apply_move(r, c, p);
        assert!(res.accepted);
        assert_eq!(res.outcome, GameOutcome::InProgress);
        assert_eq!(game.score(), (0, 0));
    }

    let res = game.apply_move(0, 2, Player::X);
    assert!(res.accepted);
    assert_eq!(res.outcome, GameOutcome::Win(Player::X));
    assert_eq!(
        res.delta,
        Some(CellDelta {
            row: 0,
            col: 2,
            cell: Cell::X
        })
    );
    assert_eq!(res.rejection, None);
    assert_eq!(game.score(), (1, 0));
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::Row(0));
}

#[test]
fn test_last_cell_can_still_win() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
        ],
    );
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    let res = game.apply_move(2, 2, Player::X);
    assert!(res.accepted);
    assert_eq!(res.outcome, GameOutcome::Win(Player::X));
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::MainDiagonal);
}

#[test]
fn test_full_grid_without_line_is_draw() {
    // X O X
    // O X O
    // O X O
    let layout = [
        [Player::X, Player::O, Player::X],
        [Player::O, Player::X, Player::O],
        [Player::O, Player::X, Player::O],
    ];
    let mut board = Board::new();
    for (r, row) in layout.iter().enumerate() {
        for (c, &p) in row.iter().enumerate() {
            board.place(r, c, p).unwrap();
        }
    }
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_draw_by_play() {
    // X O X
    // O X X
    // O X O
    let mut game = GameState::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 2),
            (2, 1),
            (2, 0),
        ],
    );
    assert_eq!(game.outcome(), GameOutcome::InProgress);

    let res = game.apply_move(1, 2, Player::X);
    assert!(res.accepted);
    assert_eq!(res.outcome, GameOutcome::Draw);
    assert_eq!(game.evaluate(), GameOutcome::Draw);
    assert_eq!(game.score(), (0, 0));
    assert_eq!(game.winning_line(), None);
    assert!(!game.apply_move(0, 0, Player::O).accepted);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0)]);
    let before = game.clone();

    let res = game.apply_move(0, 0, Player::O);
    assert!(!res.accepted);
    assert_eq!(res.delta, None);
    assert_eq!(res.rejection, Some(MoveError::CellOccupied { row: 0, col: 0 }));
    assert_eq!(res.outcome, GameOutcome::InProgress);
    assert_eq!(game, before);
    assert_eq!(game.cell(0, 0), Some(Cell::X));
    assert_eq!(game.current_turn(), Player::O);
}

#[test]
fn test_wrong_turn_rejected() {
    let mut game = GameState::new();
    let res = game.apply_move(1, 1, Player::O);
    assert!(!res.accepted);
    assert_eq!(
        res.rejection,
        Some(MoveError::WrongTurn {
            expected: Player::X,
            got: Player::O
        })
    );
    assert_eq!(game.cell(1, 1), Some(Cell::Empty));
    assert_eq!(game.current_turn(), Player::X);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = GameState::new();
    let res = game.apply_move(0, 3, Player::X);
    assert!(!res.accepted);
    assert_eq!(res.rejection, Some(MoveError::OutOfBounds { row: 0, col: 3 }));
    assert_eq!(game.cell(0, 3), None);
    assert_eq!(game, GameState::new());
}

#[test]
fn test_moves_after_win_rejected_until_reset() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(game.outcome(), GameOutcome::Win(Player::X));
    let before = game.clone();

    for (r, c) in [(1, 0), (2, 0), (2, 1)] {
        let res = game.apply_move(r, c, game.current_turn());
        assert!(!res.accepted);
        assert_eq!(res.rejection, Some(MoveError::GameOver));
        assert_eq!(res.outcome, GameOutcome::Win(Player::X));
    }
    assert_eq!(game, before);

    game.reset();
    assert!(game.apply_move(1, 0, Player::X).accepted);
}

#[test]
fn test_reset_keeps_score() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    game.reset();

    assert_eq!(game.board().filled(), 0);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.current_turn(), Player::X);
    assert_eq!(game.score(), (1, 0));

    // O wins down the middle column
    play(&mut game, &[(0, 0), (0, 1), (2, 0), (1, 1), (2, 2), (2, 1)]);
    assert_eq!(game.outcome(), GameOutcome::Win(Player::O));
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::Column(1));
    assert_eq!(game.score(), (1, 1));
    assert_eq!(game.scoreboard().leader(), None);
}

#[test]
fn test_reset_mid_round() {
    let mut game = GameState::new();
    play(&mut game, &[(1, 1)]);
    game.reset();
    assert_eq!(game, GameState::new());
}

#[test]
fn test_snapshot() {
    let mut game = GameState::new();
    play(&mut game, &[(2, 0), (1, 1), (2, 1), (0, 0), (2, 2)]);
    let snap = game.snapshot();
    assert_eq!(snap.cells[2], [Cell::X, Cell::X, Cell::X]);
    assert_eq!(snap.outcome, GameOutcome::Win(Player::X));
    assert_eq!(snap.turn, Player::O);
    assert_eq!(snap.moves_played, 5);
    assert_eq!(snap.score.as_tuple(), (1, 0));
    assert_eq!(snap.winning_line.unwrap().kind(), LineKind::Row(2));
    assert!(snap.winning_line.unwrap().contains(2, 1));
}

#[test]
fn test_outcome_display() {
    assert_eq!(GameOutcome::Win(Player::O).to_string(), "O wins");
    assert_eq!(GameOutcome::Draw.to_string(), "Draw");
    assert_eq!(GameOutcome::InProgress.to_string(), "In progress");
    assert!(GameOutcome::Draw.is_over());
    assert_eq!(GameOutcome::Win(Player::X).winner(), Some(Player::X));
}
