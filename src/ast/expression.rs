use super::Identifier;
use std::fmt::{Display, Formatter};
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Expression {
    #[strum(serialize = "AssignmentExpr")]
    Assignment(AssignmentExpr),
    #[strum(serialize = "BinaryExpr")]
    Binary(BinaryExpr),
    #[strum(serialize = "CallExpr")]
    Call(CallExpr),
    #[strum(serialize = "MemberExpr")]
    Member(MemberExpr),
    Identifier(Identifier),
    NumericLiteral(f64),
    #[strum(serialize = "ObjectLiteral")]
    Object(ObjectLiteral),
}

impl Expression {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Assignment(expr) => write!(f, "{}", expr),
            Self::Binary(expr) => write!(f, "{}", expr),
            Self::Call(expr) => write!(f, "{}", expr),
            Self::Member(expr) => write!(f, "{}", expr),
            Self::Identifier(ident) => write!(f, "{}", ident),
            Self::NumericLiteral(n) => write!(f, "{}", n),
            Self::Object(expr) => write!(f, "{}", expr),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, EnumString)]
pub enum Operator {
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Minus,
    #[strum(to_string = "*")]
    Asterisk,
    #[strum(to_string = "/")]
    Slash,
    #[strum(to_string = "%")]
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    // Only an `Identifier` is accepted at evaluation.
    pub assignee: Box<Expression>,
    pub value: Box<Expression>,
}

impl Display for AssignmentExpr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({} = {})", self.assignee, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(Expression::to_string).collect();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    // obj[expr]
    pub computed: bool,
}

impl Display for MemberExpr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.computed {
            write!(f, "{}[{}]", self.object, self.property)
        } else {
            write!(f, "{}.{}", self.object, self.property)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
}

impl Display for ObjectLiteral {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.properties.is_empty() {
            return write!(f, "{{}}");
        }
        let properties: Vec<String> = self.properties.iter().map(Property::to_string).collect();
        write!(f, "{{ {} }}", properties.join(", "))
    }
}

impl From<Vec<Property>> for ObjectLiteral {
    fn from(properties: Vec<Property>) -> Self {
        Self { properties }
    }
}

// A missing `value` is shorthand for the variable named `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Option<Expression>,
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}
