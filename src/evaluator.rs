use crate::ast::{self, Expression, Node, Operator, Statement};
use crate::environment::Environment;
use crate::object::{EvalError, ObjectValue, Result, RuntimeVal};
use log::{debug, trace};

pub fn eval(node: Node, env: &mut Environment) -> Result<RuntimeVal> {
    match node {
        Node::Program(program) => eval_program(&program, env),
        Node::Statement(stmt) => eval_statement(&stmt, env),
        Node::Expression(expr) => eval_expression(&expr, env),
    }
}

pub fn eval_program(program: &ast::Program, env: &mut Environment) -> Result<RuntimeVal> {
    eval_statements(&program.body, env)
}

// Every statement runs in the same scope; the last value wins.
fn eval_statements(statements: &[Statement], env: &mut Environment) -> Result<RuntimeVal> {
    statements
        .iter()
        .try_fold(RuntimeVal::Null, |_, stmt| eval_statement(stmt, env))
}

pub fn eval_statement(stmt: &Statement, env: &mut Environment) -> Result<RuntimeVal> {
    match stmt {
        Statement::VarDeclaration(decl) => eval_var_declaration(decl, env),
        Statement::FunctionDeclaration(_) => Err(EvalError::UnsupportedNode { kind: stmt.kind() }),
        Statement::Expr(expr) => eval_expression(expr, env),
    }
}

pub fn eval_expression(expr: &Expression, env: &mut Environment) -> Result<RuntimeVal> {
    trace!("evaluating {}", expr.kind());

    match expr {
        Expression::NumericLiteral(n) => Ok(RuntimeVal::Number(*n)),
        Expression::Identifier(ident) => env.lookup(&ident.symbol),
        Expression::Object(object) => eval_object_literal(object, env),
        Expression::Assignment(assignment) => eval_assignment(assignment, env),
        Expression::Binary(binary) => {
            let left = eval_expression(&binary.left, env)?;
            let right = eval_expression(&binary.right, env)?;
            Ok(eval_binary_expression(binary.operator, left, right))
        }
        Expression::Call(_) | Expression::Member(_) => {
            Err(EvalError::UnsupportedNode { kind: expr.kind() })
        }
    }
}

fn eval_var_declaration(decl: &ast::VarDeclaration, env: &mut Environment) -> Result<RuntimeVal> {
    let value = match &decl.value {
        Some(value) => eval_expression(value, env)?,
        None => RuntimeVal::Null,
    };

    debug!(
        "declaring {} {} = {}",
        if decl.constant { "const" } else { "let" },
        decl.identifier,
        value
    );
    env.declare(&decl.identifier, value, decl.constant)
}

fn eval_assignment(assignment: &ast::AssignmentExpr, env: &mut Environment) -> Result<RuntimeVal> {
    let name = match assignment.assignee.as_ref() {
        Expression::Identifier(ident) => &ident.symbol,
        target => {
            return Err(EvalError::InvalidAssignmentTarget {
                target: target.to_string(),
            })
        }
    };

    let value = eval_expression(&assignment.value, env)?;
    debug!("assigning {} = {}", name, value);
    env.assign(name, value)
}

// Later duplicate keys overwrite earlier ones.
fn eval_object_literal(object: &ast::ObjectLiteral, env: &mut Environment) -> Result<RuntimeVal> {
    let mut properties = ObjectValue::default();

    for property in object.properties.iter() {
        let value = match &property.value {
            Some(value) => eval_expression(value, env)?,
            None => env.lookup(&property.key)?,
        };
        properties.properties.insert(property.key.clone(), value);
    }

    Ok(properties.into())
}

fn eval_binary_expression(operator: Operator, left: RuntimeVal, right: RuntimeVal) -> RuntimeVal {
    match (left, right) {
        (RuntimeVal::Number(x), RuntimeVal::Number(y)) => {
            RuntimeVal::Number(eval_numeric_binary_expression(operator, x, y))
        }
        _ => RuntimeVal::Null,
    }
}

// Division by zero follows IEEE-754.
fn eval_numeric_binary_expression(operator: Operator, left: f64, right: f64) -> f64 {
    match operator {
        Operator::Plus => left + right,
        Operator::Minus => left - right,
        Operator::Asterisk => left * right,
        Operator::Slash => left / right,
        Operator::Percent => left % right,
    }
}
