//! Board tests

use colorfall::core::{ActivePiece, Board};
use colorfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i16, kind: PieceKind) {
    for x in 0..board.width() as i16 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i16), None);

    assert!(!board.is_valid(-1, 5));
    assert!(board.is_out_of_bounds(10, 0));
    assert!(!board.is_occupied(-1, -1));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(10, 0, Some(PieceKind::I)));
    assert!(!board.set(0, 20, Some(PieceKind::I)));
}

#[test]
fn test_merge_writes_piece_kind() {
    let mut board = Board::new();
    let piece = ActivePiece::new(PieceKind::T, 3, 17);

    assert_eq!(board.merge(&piece), 4);

    // T: (1,0), (0,1), (1,1), (2,1)
    assert_eq!(board.get(4, 17), Some(Some(PieceKind::T)));
    assert_eq!(board.get(3, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_merge_skips_cells_outside_grid() {
    let mut board = Board::new();
    // Vertical I hanging two rows below the floor.
    let piece = ActivePiece::new(PieceKind::I, 0, 18);
    assert_eq!(board.merge(&piece), 2);
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::O));
    }
    assert!(!board.is_row_full(19));

    board.set(9, 19, Some(PieceKind::O));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_sweep_without_full_rows_is_noop() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::L));
    let before = board.clone();

    assert_eq!(board.sweep_cleared_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_sweep_single_row_drops_rows_above() {
    let mut board = Board::new();
    board.set(2, 17, Some(PieceKind::S));
    board.set(7, 18, Some(PieceKind::Z));
    fill_row(&mut board, 19, PieceKind::I);

    assert_eq!(board.sweep_cleared_rows(), 1);

    assert_eq!(board.get(2, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_sweep_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::J);
    board.set(4, 18, Some(PieceKind::T));
    fill_row(&mut board, 17, PieceKind::J);
    board.set(1, 16, Some(PieceKind::O));

    assert_eq!(board.sweep_cleared_rows(), 2);

    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_sweep_four_rows_leaves_empty_board() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }

    assert_eq!(board.sweep_cleared_rows(), 4);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_clear_empties_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::Z);
    fill_row(&mut board, 10, PieceKind::S);

    board.clear();
    assert_eq!(board, Board::new());
}
