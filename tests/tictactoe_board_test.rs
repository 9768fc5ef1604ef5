//! Tests for board placement, turn order and terminal states.

use strictly_ntoe::{Cell, Dimensions, GameBoard, GameStatus, Mark, Outcome, PlaceError};

fn board(size: usize, condition: usize) -> GameBoard {
    GameBoard::new(Dimensions::new(size, condition).unwrap())
}

fn play(board: &mut GameBoard, moves: &[usize]) {
    for &index in moves {
        board.place(index).unwrap();
    }
}

#[test]
fn test_turn_parity_alternates_marks() {
    let mut board = board(4, 4);
    let mut placed = Vec::new();
    for index in [1, 2, 3, 4] {
        placed.push(board.place(index).unwrap());
    }
    assert_eq!(placed, vec![Mark::X, Mark::O, Mark::X, Mark::O]);
    assert_eq!(board.turn(), 5);
    assert_eq!(board.current_mark(), Mark::X);
    assert_eq!(board.last_mark(), Some(Mark::O));
}

#[test]
fn test_out_of_range_does_not_mutate() {
    let mut board = board(3, 3);
    board.place(5).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place(0),
        Err(PlaceError::OutOfRange {
            index: 0,
            cell_count: 9
        })
    );
    assert!(matches!(board.place(10), Err(PlaceError::OutOfRange { .. })));
    assert_eq!(board, before);
}

#[test]
fn test_occupied_does_not_mutate() {
    let mut board = board(3, 3);
    board.place(5).unwrap();
    let before = board.clone();

    let result = board.place(5);
    assert_eq!(
        result,
        Err(PlaceError::Occupied {
            index: 5,
            mark: Mark::X
        })
    );
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(board, before);
    assert_eq!(board.current_mark(), Mark::O);
}

#[test]
fn test_classic_top_row_wins_before_full() {
    let mut board = board(3, 3);
    play(&mut board, &[1, 4, 2, 5]);
    assert!(!board.is_finished());

    board.place(3).unwrap();
    assert!(board.is_finished());
    assert!(!board.is_drawn());
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
    assert_eq!(board.outcome(), Some(Outcome::Winner(Mark::X)));
    assert!(board.cells().iter().any(|cell| *cell == Cell::Empty));
}

#[test]
fn test_two_in_a_row_wins_immediately() {
    let mut board = board(4, 2);
    board.place(1).unwrap();
    assert!(!board.is_finished());
    board.place(16).unwrap();
    assert!(!board.is_finished());
    board.place(2).unwrap();
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_alternating_fill_is_draw() {
    // X O X / O X X / O X O
    let mut board = board(3, 3);
    play(&mut board, &[1, 2, 3, 4, 5, 7, 6, 9]);
    assert!(!board.is_finished());

    board.place(8).unwrap();
    assert!(board.is_finished());
    assert!(board.is_drawn());
    assert_eq!(board.status(), GameStatus::Draw);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // O X X / X X O / X O O, with X completing 3-5-7 last
    let mut board = board(3, 3);
    play(&mut board, &[2, 1, 3, 6, 4, 8, 7, 9]);
    assert!(!board.is_finished());

    board.place(5).unwrap();
    assert_eq!(board.turn(), 10);
    assert!(!board.is_drawn());
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_finished_query_is_stable() {
    let mut board = board(3, 3);
    play(&mut board, &[1, 2, 3, 4, 5, 7, 6, 9, 8]);
    assert_eq!(board.is_finished(), board.is_finished());
    assert_eq!(board.status(), board.status());
}

#[test]
fn test_win_in_bottom_right_corner_of_large_board() {
    // Vertical run in the last column, below and right of every anchor
    let mut board = board(6, 3);
    play(&mut board, &[24, 1, 30, 2, 36]);
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
    assert_eq!(board.history(), &[24, 1, 30, 2, 36]);
}

#[test]
fn test_ascending_win_on_last_anchor() {
    // 5x5 board, w = 3: cells 15, 19, 23 form the last window's ascending diagonal
    let mut board = board(5, 3);
    play(&mut board, &[15, 1, 19, 2, 23]);
    assert_eq!(board.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_no_wraparound_between_rows() {
    // 3 and 4 are adjacent indices but on different rows
    let mut board = board(3, 2);
    play(&mut board, &[3, 9, 4]);
    assert_eq!(board.status(), GameStatus::InProgress);
}
