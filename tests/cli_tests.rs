use seabattle::cli::parse_shot;
use seabattle::BOARD_SIZE;

#[test]
fn test_parse_valid_coordinates_are_one_based() {
    assert_eq!(parse_shot("1 2"), Some((0, 1)));
    assert_eq!(parse_shot("6 6"), Some((5, 5)));
    assert_eq!(parse_shot("  3   4  "), Some((2, 3)));
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(parse_shot("0 1"), None);
    assert_eq!(parse_shot("1 0"), None);
    assert_eq!(parse_shot(&format!("{} 1", BOARD_SIZE + 1)), None);
    assert_eq!(parse_shot(&format!("1 {}", BOARD_SIZE + 1)), None);
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(parse_shot(""), None);
    assert_eq!(parse_shot("1"), None);
    assert_eq!(parse_shot("a b"), None);
    assert_eq!(parse_shot("1 2 3"), None);
    assert_eq!(parse_shot("-1 2"), None);
    assert_eq!(parse_shot("1,2"), None);
}
