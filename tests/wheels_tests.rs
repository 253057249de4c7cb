use wheel_words::{Cursor, Position, SearchStatus, WheelError, WheelGrid, Wheels};

const EXAMPLE: &str = "3\n5\nABCDE\nFGHIJ\nKLMNO\n";

fn example_grid() -> WheelGrid {
    EXAMPLE.parse().unwrap()
}

fn advance(cursor: Cursor, grid: &WheelGrid, status: SearchStatus, times: usize) -> Cursor {
    (0..times).fold(cursor, |cursor, _| cursor.advance(grid, status))
}

#[test]
fn test_parse_example_grid() {
    let grid = example_grid();
    assert_eq!(grid.number_of_wheels(), 3);
    assert_eq!(grid.letters_per_wheel(), 5);
    assert_eq!(grid.wheel(1), "FGHIJ");
    assert_eq!(grid.letter(1, 2), b'H');
    assert_eq!(grid.letter(2, 4), b'O');
}

#[test]
fn test_parse_uppercases_and_skips_blank_lines() {
    let grid: WheelGrid = "2\r\n2\r\nab\r\n\r\n  cD \r\n".parse().unwrap();
    assert_eq!(grid.wheel(0), "AB");
    assert_eq!(grid.wheel(1), "CD");
}

#[test]
fn test_display_matches_file_format() {
    let grid: WheelGrid = "3\n5\nabcde\nFGHIJ\nklmno\n".parse().unwrap();
    assert_eq!(grid.to_string(), EXAMPLE);
}

#[test]
fn test_zero_wheels_is_invalid() {
    let err = "0\n5\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(err, WheelError::InvalidGridDimensions { wheels: 0, letters: 5 }));
}

#[test]
fn test_one_letter_per_wheel_is_invalid() {
    let err = "2\n1\nA\nB\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(err, WheelError::InvalidGridDimensions { wheels: 2, letters: 1 }));
}

#[test]
fn test_negative_count_is_invalid() {
    let err = "-1\n5\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(err, WheelError::InvalidGridDimensions { wheels: -1, .. }));
}

#[test]
fn test_malformed_counts() {
    let err = "three\n5\nABCDE\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(
        err,
        WheelError::MalformedCount { field: "number of wheels", ref value } if value == "three"
    ));

    let err = "3\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(
        err,
        WheelError::MalformedCount { field: "number of letters per wheel", .. }
    ));

    let err = "99999999999999999999\n5\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(err, WheelError::MalformedCount { .. }));
}

#[test]
fn test_invalid_wheel_character() {
    let err = "2\n3\nAB3\nDEF\n".parse::<WheelGrid>().unwrap_err();
    match err {
        WheelError::InvalidCharacter { text, line } => {
            assert_eq!(text, "AB3");
            assert_eq!(line, Some(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_wheel_length_mismatch() {
    let err = "2\n3\nABC\nDEFG\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(
        err,
        WheelError::WheelLength { wheel: 1, expected: 3, found: 4 }
    ));
}

#[test]
fn test_wheel_count_mismatch() {
    let err = "3\n3\nABC\nDEF\n".parse::<WheelGrid>().unwrap_err();
    assert!(matches!(err, WheelError::WheelCount { expected: 3, found: 2 }));
}

#[test]
fn test_from_lines() {
    let grid = WheelGrid::from_lines(["abcde", "FGHIJ", "KLMNO"]).unwrap();
    assert_eq!(grid, example_grid());

    let err = WheelGrid::from_lines(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, WheelError::InvalidGridDimensions { wheels: 0, .. }));
}

#[test]
fn test_initial_cursor() {
    let grid = example_grid();
    let cursor = Cursor::new(&grid);

    assert_eq!(cursor.permutation(), "AF");
    assert_eq!(cursor.start(), Position::new(0, 0));
    assert_eq!(cursor.end(), Position::new(1, 0));
    assert_eq!(cursor.depth(), 2);
    assert!(cursor.can_permute(&grid));
}

#[test]
fn test_current_permutation_is_non_destructive() {
    let wheels = Wheels::new(example_grid());
    let first = wheels.current_permutation();
    let second = wheels.current_permutation();
    assert_eq!(first, second);
    assert_eq!(first, "AF");
}

#[test]
fn test_miss_rotates_end_letter() {
    let grid = example_grid();
    let cursor = Cursor::new(&grid).advance(&grid, SearchStatus::Miss);
    assert_eq!(cursor.permutation(), "AG");
    assert_eq!(cursor.end(), Position::new(1, 1));
}

#[test]
fn test_parent_extends_into_next_wheel() {
    let grid = example_grid();
    let cursor = Cursor::new(&grid).advance(&grid, SearchStatus::MissParent);
    assert_eq!(cursor.permutation(), "AFK");
    assert_eq!(cursor.end(), Position::new(2, 0));
    assert_eq!(cursor.depth(), 3);

    let cursor = Cursor::new(&grid).advance(&grid, SearchStatus::HitParent);
    assert_eq!(cursor.permutation(), "AFK");
}

#[test]
fn test_exhausted_deep_wheel_backtracks() {
    let grid = example_grid();
    let cursor = Cursor::new(&grid).advance(&grid, SearchStatus::MissParent);
    let cursor = advance(cursor, &grid, SearchStatus::Miss, 4);
    assert_eq!(cursor.permutation(), "AFO");

    let cursor = cursor.advance(&grid, SearchStatus::HitTerminal);
    assert_eq!(cursor.permutation(), "AG");
    assert_eq!(cursor.end(), Position::new(1, 1));
    assert_eq!(cursor.depth(), 2);
}

#[test]
fn test_parent_on_last_wheel_rotates() {
    let grid = example_grid();
    let cursor = Cursor::new(&grid).advance(&grid, SearchStatus::MissParent);
    let cursor = cursor.advance(&grid, SearchStatus::HitParent);
    assert_eq!(cursor.permutation(), "AFL");
    assert_eq!(cursor.end(), Position::new(2, 1));
}

#[test]
fn test_exhausted_start_letter_moves_start() {
    let grid = example_grid();
    let cursor = advance(Cursor::new(&grid), &grid, SearchStatus::Miss, 4);
    assert_eq!(cursor.permutation(), "AJ");

    let cursor = cursor.advance(&grid, SearchStatus::Miss);
    assert_eq!(cursor.permutation(), "BF");
    assert_eq!(cursor.start(), Position::new(0, 1));
    assert_eq!(cursor.end(), Position::new(1, 0));
}

#[test]
fn test_exhausted_start_wheel_moves_to_next_wheel() {
    let grid = example_grid();
    let cursor = advance(Cursor::new(&grid), &grid, SearchStatus::Miss, 24);
    assert_eq!(cursor.permutation(), "EJ");

    let cursor = cursor.advance(&grid, SearchStatus::Miss);
    assert_eq!(cursor.permutation(), "FK");
    assert_eq!(cursor.start(), Position::new(1, 0));
    assert_eq!(cursor.end(), Position::new(2, 0));
}

#[test]
fn test_traversal_exhausts() {
    let grid = example_grid();
    let cursor = advance(Cursor::new(&grid), &grid, SearchStatus::Miss, 49);
    assert_eq!(cursor.permutation(), "JO");
    assert!(cursor.can_permute(&grid));

    let cursor = cursor.advance(&grid, SearchStatus::Miss);
    assert!(!cursor.can_permute(&grid));
    assert_eq!(cursor.permutation(), "");
    assert_eq!(cursor.start(), Position::new(2, 0));

    let again = cursor.clone().advance(&grid, SearchStatus::MissParent);
    assert_eq!(again, cursor);
}

#[test]
fn test_one_wheel_grid_has_no_candidates() {
    let grid: WheelGrid = "1\n4\nABCD\n".parse().unwrap();
    let wheels = Wheels::new(grid);
    assert!(!wheels.can_permute());
    assert_eq!(wheels.current_permutation(), "");
}

#[test]
fn test_wheels_advance_and_reset() {
    let mut wheels = Wheels::new(example_grid());
    assert_eq!(wheels.advance_permutation(SearchStatus::MissParent), "AFK");
    assert_eq!(wheels.advance_permutation(SearchStatus::Miss), "AFL");
    assert_eq!(wheels.cursor().depth(), 3);

    wheels.reset();
    assert_eq!(wheels.current_permutation(), "AF");
}

#[test]
fn test_non_utf8_wheel_is_invalid_character() {
    let input: &[u8] = b"2\n2\nA\xe9\nBC\n";
    let err = WheelGrid::from_reader(input).unwrap_err();
    assert!(matches!(err, WheelError::InvalidCharacter { line: Some(3), .. }));
}

#[test]
fn test_non_utf8_count_is_malformed() {
    let input: &[u8] = b"\xff\n2\nAB\n";
    let err = WheelGrid::from_reader(input).unwrap_err();
    assert!(matches!(err, WheelError::MalformedCount { field: "number of wheels", .. }));
}
