use crate::preset::Preset;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

/// Lexes lowercase trigger text.
pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[token("weak")]
    Weak,
    #[token("strong")]
    Strong,
    #[token("threat")]
    #[token("threatening")]
    Threatening,
    #[token("bbeg")]
    #[token("boss")]
    Boss,

    #[regex(r"[+-]?[0-9]+", integer)]
    Integer(i64),
    #[regex(r"[a-z_][a-z0-9_]*")]
    Word,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

/// Out-of-range integers saturate instead of failing to lex.
fn integer(lex: &mut LogosLexer<TokenKind>) -> i64 {
    let s = lex.slice();
    s.parse()
        .unwrap_or(if s.starts_with('-') { i64::MIN } else { i64::MAX })
}

impl TokenKind {
    pub const PRESETS: &'static [Self] = &[Self::Weak, Self::Strong, Self::Threatening, Self::Boss];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Weak => "'weak'",
            Strong => "'strong'",
            Threatening => "'threat'",
            Boss => "'bbeg'",
            Integer(_) => "<integer>",
            Word => "<word>",
            Error => "<error>",
        }
    }

    pub fn as_preset(&self) -> Option<Preset> {
        Some(match self {
            Self::Weak => Preset::Weak,
            Self::Strong => Preset::Strong,
            Self::Threatening => Preset::Threatening,
            Self::Boss => Preset::Boss,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_keywords() {
        use TokenKind::*;

        assert_eq!(kinds("weak strong"), vec![Weak, Strong]);
        assert_eq!(kinds("threat threatening"), vec![Threatening, Threatening]);
        assert_eq!(kinds("bbeg boss"), vec![Boss, Boss]);
        assert_eq!(kinds("weakling"), vec![Word]);
    }

    #[test]
    fn test_lex_integers() {
        use TokenKind::*;

        assert_eq!(kinds("bbeg 12"), vec![Boss, Integer(12)]);
        assert_eq!(kinds("-3 +4"), vec![Integer(-3), Integer(4)]);
        assert_eq!(kinds("3abc"), vec![Integer(3), Word]);
        assert_eq!(kinds("?"), vec![Error]);
    }

    #[test]
    fn test_lex_integer_overflow_saturates() {
        use TokenKind::*;

        assert_eq!(kinds("99999999999999999999"), vec![Integer(i64::MAX)]);
        assert_eq!(kinds("-99999999999999999999"), vec![Integer(i64::MIN)]);
    }
}
