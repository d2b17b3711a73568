//! Text commands that fire a preset, as typed at the console or sent by a
//! host button.

mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind, Parser};

use crate::common::UInt;
use crate::preset::Preset;
use std::str::FromStr;

/// One user action: which preset to roll and the level input for the boss.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Trigger {
    pub preset: Preset,
    pub level_bonus: UInt,
}

impl Trigger {
    pub const fn new(preset: Preset, level_bonus: UInt) -> Self {
        Self {
            preset,
            level_bonus,
        }
    }
}

impl From<Preset> for Trigger {
    fn from(preset: Preset) -> Self {
        Self::new(preset, 0)
    }
}

impl FromStr for Trigger {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(&s.to_ascii_lowercase()).parse()
    }
}

/// Reads the boss level input the way the host's numeric field does:
/// a leading integer, or zero.
pub fn parse_level_bonus(s: &str) -> UInt {
    Parser::new(&s.to_ascii_lowercase()).parse_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("BBEG 2".parse::<Trigger>(), Ok(Trigger::new(Preset::Boss, 2)));
        assert_eq!("Weak".parse::<Trigger>(), Ok(Trigger::from(Preset::Weak)));
    }

    #[test]
    fn test_parse_level_bonus() {
        assert_eq!(parse_level_bonus("5"), 5);
        assert_eq!(parse_level_bonus(" 12 "), 12);
        assert_eq!(parse_level_bonus("x"), 0);
        assert_eq!(parse_level_bonus(""), 0);
    }
}
