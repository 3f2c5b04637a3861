//! Tests for board evaluation through the public API.

use strictly_quad::{
    Board, BoardCell, BoardError, BoardEvaluation, EvaluationError, GameStatus, ParseError, Player,
    Square, WinStatus, evaluate, parse_board,
};

fn setup(text: &str) -> BoardEvaluation {
    evaluate(text).expect("Board should evaluate")
}

#[test]
fn test_empty_board() {
    let evaluation = setup(
        "
       | | | \n
       | | | \n
       | | | \n
       | | | ",
    );

    assert!(!evaluation.is_game_over());
    assert_eq!(evaluation.check_winner().winner(), None);
    assert_eq!(evaluation.check_winner().win_code(), 0);
    assert_eq!(evaluation.check_winner().win_description(), "No winner");
    assert_eq!(evaluation.remaining_moves().len(), 16);
    assert_eq!(evaluation.status(), GameStatus::InProgress);
}

#[test]
fn test_full_board_with_no_winner() {
    let evaluation = setup(
        "
      X|O|X|O\n
      X|O|X|O\n
      O|X|O|X\n
      O|X|O|X",
    );

    assert!(evaluation.is_game_over());
    assert_eq!(evaluation.check_winner().winner(), None);
    assert_eq!(evaluation.check_winner().win_code(), 0);
    assert_eq!(evaluation.remaining_moves().len(), 0);
    assert_eq!(evaluation.status(), GameStatus::Draw);
}

#[test]
fn test_x_wins_with_row_0() {
    let evaluation = setup(
        "
      X|X|X|X\n
      O| | |O\n
       | | | \n
      O| | |O",
    );

    assert!(evaluation.is_game_over());
    assert_eq!(evaluation.check_winner().winner(), Some(Player::X));
    assert_eq!(evaluation.check_winner().win_code(), 15);
    assert_eq!(evaluation.check_winner().win_description(), "Row 0");
    assert_eq!(evaluation.remaining_moves().len(), 8);
}

#[test]
fn test_o_wins_with_the_four_corners() {
    let evaluation = setup(
        "
      O|X|X|O\n
      X| | |X\n
       | | | \n
      O| | |O",
    );

    assert!(evaluation.is_game_over());
    assert_eq!(evaluation.check_winner().winner(), Some(Player::O));
    assert_eq!(evaluation.check_winner().win_code(), 36873);
    assert_eq!(evaluation.check_winner().win_description(), "All four corners");
    assert_eq!(evaluation.remaining_moves().len(), 8);
}

#[test]
fn test_x_wins_with_center_box() {
    let evaluation = setup(
        "
       | | | \n
      O|X|X|O\n
       |X|X| \n
      O| | |O",
    );

    assert!(evaluation.is_game_over());
    assert_eq!(evaluation.check_winner().winner(), Some(Player::X));
    assert_eq!(evaluation.check_winner().win_code(), 1632);
    assert_eq!(evaluation.check_winner().win_description(), "2x2 box in the center");
    assert_eq!(evaluation.remaining_moves().len(), 8);
}

#[test]
fn test_diagonals() {
    let down = setup("X|O||\n|X|O|\n||X|\nO|||X");
    assert_eq!(down.check_winner().win_code(), 0b1000_0100_0010_0001);

    let up = setup("X||X|O\nX||O|\n|O||\nO|||X");
    assert_eq!(up.check_winner().winner(), Some(Player::O));
    assert_eq!(up.check_winner().win_code(), 4680);
    assert_eq!(
        up.check_winner().win_description(),
        "Upper right to lower left diagonal"
    );
}

#[test]
fn test_three_rows_fail() {
    let err = parse_board("X|X|X|X\n| | |\n| | |").unwrap_err();
    assert_eq!(err, ParseError::RowCount { found: 3 });
    assert!(err.to_string().contains("3 != 4"));
}

#[test]
fn test_three_columns_fail() {
    let err = parse_board("|||\n|||\n||\n|||").unwrap_err();
    assert_eq!(err, ParseError::ColumnCount { row: 2, found: 3 });
    assert!(err.to_string().starts_with("Row 2"));
}

#[test]
fn test_invalid_token_fails() {
    let err = evaluate("|||\n|Z||\n|||\n|||").unwrap_err();
    assert_eq!(
        err,
        BoardError::Parse(ParseError::InvalidToken {
            row: 1,
            column: 1,
            token: "Z".to_string(),
        })
    );
    assert_eq!(err.to_string(), "Invalid move at row 1, column 1: Z");
}

#[test]
fn test_contradictory_board_names_both_patterns() {
    let err = evaluate("X|X|X|X\n|||\n|||\nO|O|O|O").unwrap_err();
    assert!(matches!(
        err,
        BoardError::Evaluation(EvaluationError::ContradictoryBoard { .. })
    ));
    let message = err.to_string();
    assert!(message.contains("Player X = \"Row 0\""));
    assert!(message.contains("Player O = \"Row 3\""));
}

#[test]
fn test_programmatic_board() {
    let mut board = Board::new();
    for i in 0..4 {
        let cell = BoardCell::new(i, i).unwrap();
        board.set(cell, Square::Occupied(Player::O));
    }
    let evaluation = BoardEvaluation::new(&board).unwrap();
    assert_eq!(
        evaluation.check_winner().win_description(),
        "Upper left to lower right diagonal"
    );
    assert_eq!(evaluation.remaining_moves().len(), 12);
}

#[test]
fn test_invariant_violation_from_raw_codes() {
    let err = Board::from_codes([[0, 1, 2, 0], [0, 0, 0, 0], [0, 0, 3, 0], [0, 0, 0, 0]])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown Player value at row 2, column 2: 3"
    );
}

#[test]
fn test_reevaluation_is_identical() {
    let board = parse_board("X|O||\n|X|O|\nO||X|\n|||").unwrap();
    let first = BoardEvaluation::new(&board).unwrap();
    let second = BoardEvaluation::new(&board).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.check_winner(), &WinStatus::NONE);
}

#[test]
fn test_concurrent_evaluations_share_the_table() {
    let boards = [
        "X|X|X|X\nO|||O\n|||\nO|||O",
        "O|X|X|O\nX|||X\n|||\nO|||O",
        "|||\nO|X|X|O\n|X|X|\nO|||O",
        "|||\n|||\n|||\n|||",
    ];
    let codes: Vec<u16> = std::thread::scope(|scope| {
        let handles: Vec<_> = boards
            .iter()
            .map(|text| scope.spawn(move || setup(text).check_winner().win_code()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(codes, vec![15, 36873, 1632, 0]);
}

#[test]
fn test_board_saved_with_byte_order_mark() {
    let evaluation = setup("\u{FEFF}X|X|X|X\nO| | |O\n | | | \nO| | |O\n");
    assert_eq!(evaluation.check_winner().winner(), Some(Player::X));
    assert_eq!(evaluation.check_winner().win_code(), 15);
}
