mod expression;
mod statement;
pub use expression::*;
pub use statement::*;

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Expression(Expression),
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Self::Statement(statement)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Program(program) => write!(f, "{}", program),
            Self::Statement(stmt) => write!(f, "{}", stmt),
            Self::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write_block(f, &self.body)
    }
}

pub(crate) fn write_block(f: &mut Formatter, statements: &[Statement]) -> std::fmt::Result {
    let rendered: Vec<String> = statements.iter().map(Statement::to_string).collect();
    write!(f, "{}", rendered.join(" "))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub symbol: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl From<&str> for Identifier {
    fn from(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_owned(),
        }
    }
}
