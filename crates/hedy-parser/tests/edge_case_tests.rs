//! Edge cases around whitespace handling, keyword-shaped arguments, and
//! argument extraction.

use hedy_levels::{registry, LevelDef};
use hedy_parser::match_line;
use hedy_types::{Command, Direction, Line};

fn level_1() -> &'static LevelDef {
    registry().level(1).unwrap()
}

fn matched(text: &str) -> Command {
    match_line(&Line::new(1, text), level_1())
        .unwrap()
        .expect("line should match a command")
}

#[test]
fn test_spaces_after_the_separator_belong_to_the_argument() {
    assert_eq!(
        matched("print   hallo!"),
        Command::Print {
            text: "  hallo!".to_string(),
        }
    );
}

#[test]
fn test_trailing_whitespace_never_reaches_the_argument() {
    assert_eq!(
        matched("print Hallo welkom bij Hedy! "),
        Command::Print {
            text: "Hallo welkom bij Hedy!".to_string(),
        }
    );
}

#[test]
fn test_keyword_as_argument_is_plain_text() {
    assert_eq!(
        matched("ask ask Cuál es tu color favorito?"),
        Command::Ask {
            prompt: "ask Cuál es tu color favorito?".to_string(),
        }
    );
}

#[test]
fn test_bare_ask_has_an_empty_prompt() {
    assert_eq!(
        matched("ask"),
        Command::Ask {
            prompt: String::new(),
        }
    );
}

#[test]
fn test_tab_prefix_is_absorbed_by_trimming() {
    // Only the space character triggers the leading-whitespace failure;
    // a tab-led line still matches after trimming.
    assert_eq!(
        matched("\tprint Hallo"),
        Command::Print {
            text: "Hallo".to_string(),
        }
    );
}

#[test]
fn test_turn_direction_token_must_be_exact() {
    // An extra separator space makes the argument ` left`, which is not
    // the left token.
    assert_eq!(
        matched("turn  left"),
        Command::Turn {
            direction: Direction::Right,
        }
    );
}

#[test]
fn test_argument_with_punctuation_passes_through() {
    assert_eq!(
        matched("print iedereen zegt tegen hem: NERD, omdat hij de slimste van de klas is."),
        Command::Print {
            text: "iedereen zegt tegen hem: NERD, omdat hij de slimste van de klas is."
                .to_string(),
        }
    );
}

#[test]
fn test_forward_argument_with_inner_spaces_is_not_numeric() {
    assert_eq!(matched("forward 1 2"), Command::Forward { distance: None });
}
