use std::fmt;
use strum_macros::{Display, EnumDiscriminants};

pub static EOF_VALUE: &str = "EndOfFile";

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenKind))]
pub enum Token {
    // Literals
    Number(String),
    Identifier(String),
    String(String),

    // Keywords
    Let,
    Const,
    Fn,

    // Operators
    BinaryOperator(String),
    Equals,

    // Delimiters
    Comma,
    Dot,
    Colon,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,

    Eof,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text {
            "let" => Self::Let,
            "const" => Self::Const,
            "fn" => Self::Fn,
            identifier => Self::Identifier(identifier.to_owned()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{}\"", s),
            token => write!(f, "{}", token.value()),
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        TokenKind::from(self)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Number(s) | Self::Identifier(s) | Self::String(s) | Self::BinaryOperator(s) => {
                s.as_str()
            }
            Self::Let => "let",
            Self::Const => "const",
            Self::Fn => "fn",
            Self::Equals => "=",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::Eof => EOF_VALUE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keywords() {
        let cases = vec![
            ("let", Token::Let),
            ("const", Token::Const),
            ("fn", Token::Fn),
            ("lets", Token::Identifier("lets".to_owned())),
            ("Const", Token::Identifier("Const".to_owned())),
        ];

        for (text, token) in cases.into_iter() {
            assert_eq!(Token::from(text), token);
        }
    }

    #[test]
    fn test_kind_and_value() {
        let token = Token::BinaryOperator("%".to_owned());
        assert!(token.is(TokenKind::BinaryOperator));
        assert_eq!(token.value(), "%");
        assert_eq!(Token::Eof.value(), "EndOfFile");
        assert_eq!(TokenKind::OpenBracket.to_string(), "OpenBracket");
    }
}
