use tictactoe::{is_quit, parse_move, parse_rematch, MoveError, Rematch};

#[test]
fn test_parse_move_converts_to_zero_based() {
    assert_eq!(parse_move("2,3", 3), Ok((1, 2)));
    assert_eq!(parse_move("1,1", 3), Ok((0, 0)));
    assert_eq!(parse_move("3,3", 3), Ok((2, 2)));
    assert_eq!(parse_move(" 4 , 5 ", 5), Ok((3, 4)));
}

#[test]
fn test_parse_move_out_of_range() {
    assert_eq!(parse_move("4,1", 3), Err(MoveError::OutOfRange { scale: 3 }));
    assert_eq!(parse_move("1,0", 3), Err(MoveError::OutOfRange { scale: 3 }));
    assert_eq!(
        parse_move("99999999999999999999999999,1", 3),
        Err(MoveError::OutOfRange { scale: 3 })
    );
    assert_eq!(parse_move("255,255", 255), Ok((254, 254)));
}

#[test]
fn test_parse_move_malformed() {
    for input in ["a,1", "1", "", ",", "1,", ",1", "1,2,3", "1;2", "-1,2", "+1,2", "1.0,2"] {
        assert_eq!(parse_move(input, 3), Err(MoveError::Malformed), "input {:?}", input);
    }
}

#[test]
fn test_quit_token() {
    assert!(is_quit("q"));
    assert!(is_quit("Q"));
    assert!(is_quit(" q "));
    assert!(!is_quit("quit"));
    assert!(!is_quit(""));
}

#[test]
fn test_rematch_tokens() {
    assert_eq!(parse_rematch("y"), Some(Rematch::Restart));
    assert_eq!(parse_rematch("N"), Some(Rematch::Exit));
    assert_eq!(parse_rematch("yes"), None);
    assert_eq!(parse_rematch(""), None);
}
