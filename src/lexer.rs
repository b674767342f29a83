use crate::token::Token;
use custom_error::custom_error;
use log::trace;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub LexError

    UnrecognizedCharacter{found: char, line: usize, column: usize} = "unrecognized character '{found}' at line {line}, column {column}",
    UnterminatedString{line: usize, column: usize} = "unterminated string starting at line {line}, column {column}",
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: usize,
    column: usize,
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.ch == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = vec![];
        loop {
            let token = self.next_token()?;
            trace!("scanned token {:?}", token);
            if token == Token::Eof {
                tokens.push(token);
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let c = match self.ch {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let token = match c {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            '[' => Token::OpenBracket,
            ']' => Token::CloseBracket,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '=' => Token::Equals,
            '+' | '-' | '*' | '/' | '%' => Token::BinaryOperator(c.to_string()),
            '.' if self.peek_char().map_or(false, |p| p.is_ascii_digit()) => {
                return Ok(Token::Number(self.read_number()));
            }
            '.' => Token::Dot,
            '"' | '\'' => return self.read_string(c).map(Token::String),
            c if c.is_ascii_digit() => return Ok(Token::Number(self.read_number())),
            c if is_letter(c) => return Ok(Token::from(self.read_identifier().as_str())),
            found => {
                return Err(LexError::UnrecognizedCharacter {
                    found,
                    line: self.line,
                    column: self.column,
                })
            }
        };
        self.read_char();
        Ok(token)
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.ch.map_or(false, is_letter) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    // A leading point gets a `0` in front.
    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut seen_point = false;
        while let Some(c) = self.ch {
            if c == '.' && !seen_point {
                if number.is_empty() {
                    number.push('0');
                }
                seen_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            number.push(c);
            self.read_char();
        }
        number
    }

    // Escapes are kept verbatim: a backslash and the character after it both land in the value.
    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let (line, column) = (self.line, self.column);
        let unterminated = LexError::UnterminatedString { line, column };
        let mut value = String::new();

        self.read_char();
        loop {
            match self.ch {
                None => return Err(unterminated),
                Some('\\') => {
                    value.push('\\');
                    self.read_char();
                    match self.ch {
                        Some(escaped) => value.push(escaped),
                        None => return Err(unterminated),
                    }
                }
                Some(c) if c == quote => {
                    self.read_char();
                    return Ok(value);
                }
                Some(c) => value.push(c),
            }
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch.map_or(false, is_whitespace) {
            self.read_char();
        }
    }
}
