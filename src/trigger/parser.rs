use super::{lexer::*, Trigger};
use crate::common::UInt;
use crate::preset::Preset;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    UnexpectedString {
        expected: Vec<TokenKind>,
    },
    TrailingInput(Preset),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::TrailingInput(preset) => {
                write!(f, "{} takes no arguments", preset)
            }
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

/// Reads a level from an integer prefix. Anything missing, non-numeric or
/// negative counts as zero.
fn level_from(token: Option<TokenKind>) -> UInt {
    match token {
        Some(TokenKind::Integer(n)) => UInt::try_from(n.max(0)).unwrap_or(UInt::MAX),
        _ => 0,
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> PResult<Trigger> {
        self.parse_trigger()
    }

    /// Parses only the level input; never fails.
    pub fn parse_level(mut self) -> UInt {
        level_from(self.lexer.next())
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, found: Option<TokenKind>, expected: &[TokenKind]) -> PResult<T> {
        let expected = expected.to_vec();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn parse_trigger(&mut self) -> PResult<Trigger> {
        let found = self.lexer.next();
        let preset = match found.as_ref().and_then(TokenKind::as_preset) {
            Some(preset) => preset,
            None => return self.unexpected_token(found, TokenKind::PRESETS),
        };

        if preset == Preset::Boss {
            // Whatever follows the level is ignored.
            let level_bonus = level_from(self.lexer.next());
            return Ok(Trigger::new(preset, level_bonus));
        }

        if self.lexer.next().is_some() {
            return self.error(ParseErrorKind::TrailingInput(preset));
        }
        Ok(Trigger::new(preset, 0))
    }
}
