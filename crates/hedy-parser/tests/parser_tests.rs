//! Parser tests: splitting, lexical validation, and command matching at
//! level 1.

use hedy_levels::{registry, LevelDef};
use hedy_parser::{check_leading_space, match_line, split_lines};
use hedy_types::{Command, Direction, HedyError, Line};

fn level_1() -> &'static LevelDef {
    registry().level(1).unwrap()
}

fn matched(text: &str) -> Command {
    match_line(&Line::new(1, text), level_1())
        .unwrap()
        .expect("line should match a command")
}

// ══════════════════════════════════════════════════════════════════════════════
// Splitting & lexical validation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_blank_program_is_rejected_before_line_checks() {
    assert_eq!(split_lines(" \n  \n").unwrap_err(), HedyError::EmptyProgram);
}

#[test]
fn test_first_offending_line_wins() {
    let lines = split_lines("print a\n print b\n print c").unwrap();
    let first_err = lines
        .iter()
        .find_map(|line| check_leading_space(line).err())
        .unwrap();
    assert_eq!(
        first_err,
        HedyError::InvalidSpace {
            line_number: 2,
            line_text: "print b".to_string(),
        }
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Matching
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_print_matches_with_text() {
    assert_eq!(
        matched("print Hallo welkom bij Hedy!"),
        Command::Print {
            text: "Hallo welkom bij Hedy!".to_string(),
        }
    );
}

#[test]
fn test_ask_matches_with_prompt() {
    assert_eq!(
        matched("ask wat is je lievelingskleur?"),
        Command::Ask {
            prompt: "wat is je lievelingskleur?".to_string(),
        }
    );
}

#[test]
fn test_echo_with_and_without_prefix() {
    assert_eq!(
        matched("echo je lievelingskleur is"),
        Command::Echo {
            prefix: Some("je lievelingskleur is".to_string()),
        }
    );
    assert_eq!(matched("echo"), Command::Echo { prefix: None });
}

#[test]
fn test_forward_numeric_and_default() {
    assert_eq!(
        matched("forward 50"),
        Command::Forward {
            distance: Some("50".to_string()),
        }
    );
    assert_eq!(matched("forward"), Command::Forward { distance: None });
    assert_eq!(
        matched("forward achteruit"),
        Command::Forward { distance: None }
    );
    assert_eq!(matched("forward -10"), Command::Forward { distance: None });
}

#[test]
fn test_turn_directions() {
    assert_eq!(
        matched("turn left"),
        Command::Turn {
            direction: Direction::Left,
        }
    );
    assert_eq!(
        matched("turn right"),
        Command::Turn {
            direction: Direction::Right,
        }
    );
    assert_eq!(
        matched("turn koekoek"),
        Command::Turn {
            direction: Direction::Right,
        }
    );
    assert_eq!(
        matched("turn"),
        Command::Turn {
            direction: Direction::Right,
        }
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Classified failures
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_command_without_guess() {
    let err = match_line(&Line::new(1, "groen"), level_1()).unwrap_err();
    assert_eq!(
        err,
        HedyError::InvalidCommand {
            invalid_command: "groen".to_string(),
            guessed_command: None,
            level: 1,
        }
    );
}

#[test]
fn test_unknown_command_with_guess() {
    let err = match_line(&Line::new(1, "abc felienne 123"), level_1()).unwrap_err();
    assert_eq!(
        err,
        HedyError::InvalidCommand {
            invalid_command: "abc".to_string(),
            guessed_command: Some("ask".to_string()),
            level: 1,
        }
    );
}

#[test]
fn test_keyword_match_is_case_sensitive() {
    let err = match_line(&Line::new(1, "Print Hallo"), level_1()).unwrap_err();
    assert!(matches!(err, HedyError::InvalidCommand { .. }));
}

#[test]
fn test_print_without_argument_is_incomplete() {
    let err = match_line(&Line::new(1, "print"), level_1()).unwrap_err();
    assert_eq!(
        err,
        HedyError::IncompleteCommand {
            incomplete_command: "print".to_string(),
        }
    );
}
