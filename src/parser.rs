use crate::ast::{
    AssignmentExpr, BinaryExpr, CallExpr, Expression, FunctionDeclaration, Identifier, MemberExpr,
    ObjectLiteral, Operator, Program, Property, Statement, VarDeclaration,
};
use crate::lexer::{self, LexError};
use crate::token::{Token, TokenKind};
use custom_error::custom_error;
use log::debug;
use std::str::FromStr;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ParseError

    Lex{source: LexError} = "{source}",
    UnexpectedToken{expected: TokenKind, found: Token, context: &'static str} = "{context}: expected {expected}, found '{found}'",
    ExpectedExpression{found: Token} = "unexpected token '{found}' where an expression was expected",
    UninitializedConstant{name: String} = "constant '{name}' must be assigned a value",
    InvalidMemberProperty{found: String} = "property after '.' must be an identifier, found {found}",
    InvalidNumber{text: String} = "invalid numeric literal {text}",
    NestingTooDeep{limit: usize} = "nesting exceeds {limit} levels",
}

pub type Result<T> = std::result::Result<T, ParseError>;

static ADDITIVE: &[Operator] = &[Operator::Plus, Operator::Minus];
static MULTIPLICATIVE: &[Operator] = &[Operator::Asterisk, Operator::Slash, Operator::Percent];

pub const MAX_NESTING: usize = 128;

pub fn produce_ast(source: &str) -> Result<Program> {
    Parser::new(lexer::tokenize(source)?).parse_program()
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::Eof) {
            tokens.push(Token::Eof);
        }

        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    fn cur_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    // Never steps past the trailing Eof.
    fn next_token(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token().is(kind)
    }

    fn expect(&mut self, expected: TokenKind, context: &'static str) -> Result<Token> {
        if self.cur_token_is(expected) {
            Ok(self.next_token())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.cur_token().clone(),
                context,
            })
        }
    }

    fn expect_identifier(&mut self, context: &'static str) -> Result<String> {
        self.expect(TokenKind::Identifier, context)
            .map(|token| token.value().to_owned())
    }

    fn cur_operator(&self, allowed: &[Operator]) -> Option<Operator> {
        match self.cur_token() {
            Token::BinaryOperator(symbol) => Operator::from_str(symbol)
                .ok()
                .filter(|op| allowed.contains(op)),
            _ => None,
        }
    }

    // Fails once more than MAX_NESTING calls are open at once.
    fn nested<T, F>(&mut self, parse: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub fn parse_program(mut self) -> Result<Program> {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            program.body.push(self.parse_statement()?);
        }

        debug!("parsed program with {} statements", program.body.len());
        Ok(program)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur_token().kind() {
            TokenKind::Let | TokenKind::Const => {
                self.parse_var_declaration().map(Statement::VarDeclaration)
            }
            TokenKind::Fn => self
                .nested(Self::parse_function_declaration)
                .map(Statement::FunctionDeclaration),
            _ => {
                let expression = self.parse_expression()?;
                if self.cur_token_is(TokenKind::Semicolon) {
                    self.next_token();
                }
                Ok(Statement::Expr(expression))
            }
        }
    }

    // (let | const) IDENT ( ';' | '=' EXPR ';' )
    fn parse_var_declaration(&mut self) -> Result<VarDeclaration> {
        let constant = self.next_token() == Token::Const;
        let identifier =
            self.expect_identifier("expected identifier name following let | const keywords")?;

        if self.cur_token_is(TokenKind::Semicolon) {
            self.next_token();
            if constant {
                return Err(ParseError::UninitializedConstant { name: identifier });
            }

            return Ok(VarDeclaration {
                constant,
                identifier,
                value: None,
            });
        }

        self.expect(
            TokenKind::Equals,
            "expected equals token following identifier in var declaration",
        )?;
        let value = self.parse_expression()?;
        self.expect(
            TokenKind::Semicolon,
            "variable declaration statement must end with semicolon",
        )?;

        Ok(VarDeclaration {
            constant,
            identifier,
            value: Some(value),
        })
    }

    // fn IDENT ( params ) { statements }
    fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration> {
        self.next_token();
        let name = self.expect_identifier("expected function name following fn keyword")?;

        self.expect(TokenKind::OpenParen, "expected parameter list")?;
        let mut parameters = vec![];
        if !self.cur_token_is(TokenKind::CloseParen) {
            loop {
                parameters.push(self.expect_identifier("expected parameter name")?);
                if !self.cur_token_is(TokenKind::Comma) {
                    break;
                }
                self.next_token();
            }
        }
        self.expect(TokenKind::CloseParen, "missing closing parenthesis")?;

        self.expect(TokenKind::OpenBrace, "expected function body")?;
        let mut body = vec![];
        while !self.cur_token_is(TokenKind::Eof) && !self.cur_token_is(TokenKind::CloseBrace) {
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::CloseBrace, "expected closing brace for function body")?;

        Ok(FunctionDeclaration {
            name,
            parameters,
            body,
        })
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        self.nested(Self::parse_assignment_expression)
    }

    // Right-associative; the assignee is whatever the left side parsed to.
    fn parse_assignment_expression(&mut self) -> Result<Expression> {
        let left = self.parse_object_expression()?;

        if self.cur_token_is(TokenKind::Equals) {
            self.next_token();
            let value = self.parse_expression()?;
            return Ok(Expression::Assignment(AssignmentExpr {
                assignee: Box::new(left),
                value: Box::new(value),
            }));
        }

        Ok(left)
    }

    fn parse_object_expression(&mut self) -> Result<Expression> {
        if !self.cur_token_is(TokenKind::OpenBrace) {
            return self.parse_additive_expression();
        }
        self.next_token();

        let mut properties = vec![];
        while !self.cur_token_is(TokenKind::Eof) && !self.cur_token_is(TokenKind::CloseBrace) {
            let key = self.expect_identifier("expected identifier for object property key")?;

            // { key, } and { key }
            if self.cur_token_is(TokenKind::Comma) {
                self.next_token();
                properties.push(Property { key, value: None });
                continue;
            } else if self.cur_token_is(TokenKind::CloseBrace) {
                properties.push(Property { key, value: None });
                continue;
            }

            self.expect(TokenKind::Colon, "expected colon after object property key")?;
            let value = self.parse_expression()?;
            properties.push(Property {
                key,
                value: Some(value),
            });

            if !self.cur_token_is(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma, "expected comma after object property value")?;
            }
        }

        self.expect(
            TokenKind::CloseBrace,
            "expected closing brace for object literal",
        )?;
        Ok(Expression::Object(ObjectLiteral { properties }))
    }

    fn parse_additive_expression(&mut self) -> Result<Expression> {
        let mut left = self.parse_multiplicative_expression()?;

        while let Some(operator) = self.cur_operator(ADDITIVE) {
            self.next_token();
            let right = self.parse_multiplicative_expression()?;
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        let mut left = self.parse_call_member_expression()?;

        while let Some(operator) = self.cur_operator(MULTIPLICATIVE) {
            self.next_token();
            let right = self.parse_call_member_expression()?;
            left = Expression::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_call_member_expression(&mut self) -> Result<Expression> {
        let member = self.parse_member_expression()?;

        if self.cur_token_is(TokenKind::OpenParen) {
            return self.parse_call_expression(member);
        }

        Ok(member)
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Result<Expression> {
        let mut call = callee;

        while self.cur_token_is(TokenKind::OpenParen) {
            call = Expression::Call(CallExpr {
                callee: Box::new(call),
                arguments: self.parse_arguments()?,
            });
        }

        Ok(call)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>> {
        self.expect(TokenKind::OpenParen, "expected open parenthesis")?;

        let mut arguments = vec![];
        if !self.cur_token_is(TokenKind::CloseParen) {
            arguments.push(self.parse_expression()?);
            while self.cur_token_is(TokenKind::Comma) {
                self.next_token();
                arguments.push(self.parse_expression()?);
            }
        }

        self.expect(TokenKind::CloseParen, "missing closing parenthesis")?;
        Ok(arguments)
    }

    fn parse_member_expression(&mut self) -> Result<Expression> {
        let mut object = self.parse_primary_expression()?;

        while self.cur_token_is(TokenKind::Dot) || self.cur_token_is(TokenKind::OpenBracket) {
            let operator = self.next_token();

            let (property, computed) = if operator == Token::Dot {
                let property = self.parse_primary_expression()?;
                if !matches!(property, Expression::Identifier(_)) {
                    return Err(ParseError::InvalidMemberProperty {
                        found: property.to_string(),
                    });
                }
                (property, false)
            } else {
                let property = self.parse_expression()?;
                self.expect(TokenKind::CloseBracket, "missing closing bracket")?;
                (property, true)
            };

            object = Expression::Member(MemberExpr {
                object: Box::new(object),
                property: Box::new(property),
                computed,
            });
        }

        Ok(object)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression> {
        match self.cur_token() {
            Token::Identifier(_) => {
                let token = self.next_token();
                Ok(Expression::Identifier(Identifier::from(token.value())))
            }
            Token::Number(text) => {
                let value = f64::from_str(text)
                    .map_err(|_| ParseError::InvalidNumber { text: text.clone() })?;
                self.next_token();
                Ok(Expression::NumericLiteral(value))
            }
            Token::OpenParen => {
                self.next_token();
                let value = self.parse_expression()?;
                self.expect(
                    TokenKind::CloseParen,
                    "expected closing parenthesis after grouped expression",
                )?;
                Ok(value)
            }
            found => Err(ParseError::ExpectedExpression {
                found: found.clone(),
            }),
        }
    }
}
