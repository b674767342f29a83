use super::{write_block, Expression};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDeclaration(VarDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    Expr(Expression),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VarDeclaration(_) => "VarDeclaration",
            Self::FunctionDeclaration(_) => "FunctionDeclaration",
            Self::Expr(expr) => expr.kind(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::VarDeclaration(stmt) => write!(f, "{}", stmt),
            Self::FunctionDeclaration(stmt) => write!(f, "{}", stmt),
            Self::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub constant: bool,
    pub identifier: String,
    pub value: Option<Expression>,
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let keyword = if self.constant { "const" } else { "let" };
        match &self.value {
            Some(value) => write!(f, "{} {} = {};", keyword, self.identifier, value),
            None => write!(f, "{} {};", keyword, self.identifier),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Statement>,
}

impl Display for FunctionDeclaration {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "fn {}({}) {{ ", self.name, self.parameters.join(", "))?;
        write_block(f, &self.body)?;
        write!(f, " }}")
    }
}
