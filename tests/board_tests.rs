use tictactoe::{Board, BoardError, Cell, GameResult, Occupancy, Player};

fn mark(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        board.set_occupancy(x, y, player).unwrap();
    }
}

#[test]
fn test_scale_fallback() {
    assert_eq!(Board::new(0).scale(), 3);
    assert_eq!(Board::new(2).scale(), 3);
    assert_eq!(Board::new(256).scale(), 3);
    assert_eq!(Board::new(usize::MAX).scale(), 3);
    assert_eq!(Board::new(3).scale(), 3);
    assert_eq!(Board::new(7).scale(), 7);
    assert_eq!(Board::new(255).scale(), 255);
}

#[test]
fn test_new_board_is_vacant() {
    let board = Board::new(4);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(board.get_cell(x, y).unwrap().occupancy(), Occupancy::Vacant);
            assert!(!board.is_occupied(x, y));
        }
    }
    assert_eq!(board.vacant_count(), 16);
    assert_eq!(board.evaluate(), GameResult::NoResult);
}

#[test]
fn test_get_cell_checks_each_axis() {
    let board = Board::new(3);
    assert!(board.get_cell(2, 2).is_some());
    assert!(board.get_cell(3, 0).is_none());
    assert!(board.get_cell(0, 3).is_none());
    // Below scale * scale, but still off the board.
    assert!(board.get_cell(8, 1).is_none());
    assert!(!board.is_occupied(8, 1));
}

#[test]
fn test_cell_value_type() {
    let mut cell = Cell::new(Occupancy::Player1);
    assert!(!cell.is_vacant());
    assert_eq!(cell.occupancy().holder(), Some(Player::One));
    cell.set_occupancy(Occupancy::Vacant);
    assert!(cell.is_vacant());
    assert_eq!(cell, Cell::default());
    assert_eq!(Occupancy::from(Player::Two), Occupancy::Player2);
}

#[test]
fn test_set_occupancy_out_of_bounds() {
    let mut board = Board::new(3);
    assert_eq!(
        board.set_occupancy(3, 1, Player::One).unwrap_err(),
        BoardError::OutOfBounds { x: 3, y: 1, scale: 3 }
    );
    assert_eq!(board.vacant_count(), 9);
}

#[test]
fn test_set_occupancy_marks_player() {
    let mut board = Board::new(3);
    board.set_occupancy(1, 2, Player::Two).unwrap();
    assert!(board.is_occupied(1, 2));
    assert_eq!(board.get_cell(1, 2).unwrap().occupancy(), Occupancy::Player2);
    assert_eq!(board.get_cell(1, 2).unwrap().occupancy().holder(), Some(Player::Two));
    assert!(!board.is_occupied(2, 1));
}

#[test]
fn test_column_victory() {
    let mut board = Board::new(3);
    mark(&mut board, Player::One, &[(1, 0), (1, 1), (1, 2)]);
    assert_eq!(board.evaluate(), GameResult::Victory);
}

#[test]
fn test_row_victory() {
    let mut board = Board::new(4);
    mark(&mut board, Player::Two, &[(0, 3), (1, 3), (2, 3), (3, 3)]);
    assert_eq!(board.evaluate(), GameResult::Victory);
}

#[test]
fn test_main_diagonal_victory() {
    let mut board = Board::new(3);
    mark(&mut board, Player::One, &[(0, 0), (1, 1), (2, 2)]);
    mark(&mut board, Player::Two, &[(1, 0), (2, 0)]);
    assert_eq!(board.evaluate(), GameResult::Victory);
}

#[test]
fn test_anti_diagonal_victory() {
    let mut board = Board::new(4);
    mark(&mut board, Player::Two, &[(3, 0), (2, 1), (1, 2), (0, 3)]);
    assert_eq!(board.evaluate(), GameResult::Victory);
}

#[test]
fn test_partial_line_is_no_result() {
    let mut board = Board::new(4);
    mark(&mut board, Player::One, &[(0, 0), (1, 0), (2, 0)]);
    mark(&mut board, Player::One, &[(3, 1), (3, 2), (3, 3)]);
    mark(&mut board, Player::One, &[(2, 1), (1, 2), (0, 3)]);
    assert_eq!(board.evaluate(), GameResult::NoResult);
}

#[test]
fn test_mixed_line_is_not_victory() {
    let mut board = Board::new(3);
    mark(&mut board, Player::One, &[(0, 0), (1, 0)]);
    mark(&mut board, Player::Two, &[(2, 0)]);
    mark(&mut board, Player::One, &[(2, 1)]);
    assert_eq!(board.evaluate(), GameResult::NoResult);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut board = Board::new(3);
    mark(&mut board, Player::One, &[(0, 0), (2, 0), (0, 1), (1, 2), (2, 2)]);
    mark(&mut board, Player::Two, &[(1, 0), (1, 1), (2, 1), (0, 2)]);
    assert_eq!(board.vacant_count(), 0);
    assert_eq!(board.evaluate(), GameResult::Draw);
}

#[test]
fn test_winning_last_move_is_victory_not_draw() {
    // X X X
    // O O X
    // X O O
    let mut board = Board::new(3);
    mark(&mut board, Player::One, &[(0, 0), (1, 0), (2, 1), (0, 2)]);
    mark(&mut board, Player::Two, &[(0, 1), (1, 1), (1, 2), (2, 2)]);
    assert_eq!(board.evaluate(), GameResult::NoResult);
    board.set_occupancy(2, 0, Player::One).unwrap();
    assert_eq!(board.vacant_count(), 0);
    assert_eq!(board.evaluate(), GameResult::Victory);
}

#[test]
fn test_rows_and_view() {
    let mut board = Board::new(3);
    board.set_occupancy(0, 0, Player::One).unwrap();
    board.set_occupancy(2, 1, Player::Two).unwrap();

    assert_eq!(
        board.rows(),
        vec![vec!["X", ".", "."], vec![".", ".", "O"], vec![".", ".", "."]]
    );
    let view = board.view(Some("Board"));
    assert_eq!(view.caption.as_deref(), Some("Board"));
    assert_eq!(
        view.to_string(),
        "Board\n\nX . . \n\n. . O \n\n. . . \n\n"
    );
    assert_eq!(board.view(Some("")).caption, None);
    assert_eq!(board.view(None).to_string(), "X . . \n\n. . O \n\n. . . \n\n");
}
