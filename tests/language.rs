use std::cell::RefCell;
use std::rc::Rc;

use wrek::ast::Statement;
use wrek::{builtins, eval, produce_ast, run, tokenize};
use wrek::{Environment, Error, EvalError, ParseError, RuntimeVal, Token};

fn run_fresh(source: &str) -> Result<RuntimeVal, Error> {
    let mut env = Environment::new();
    run(source, &mut env)
}

#[test]
fn numeric_literals_round_trip() {
    assert_eq!(run_fresh("3.0"), Ok(RuntimeVal::Number(3.0)));
    assert_eq!(tokenize(".5"), tokenize("0.5"));
    assert_eq!(run_fresh(".5"), Ok(RuntimeVal::Number(0.5)));
}

#[test]
fn precedence() {
    assert_eq!(run_fresh("2 + 3 * 4"), Ok(RuntimeVal::Number(14.0)));
    assert_eq!(run_fresh("(2 + 3) * 4"), Ok(RuntimeVal::Number(20.0)));
}

#[test]
fn chained_assignment_is_right_associative() {
    let mut env = Environment::new();
    env.declare("x", RuntimeVal::Null, false).unwrap();
    env.declare("y", RuntimeVal::Null, false).unwrap();

    assert_eq!(run("x = y = 5", &mut env), Ok(RuntimeVal::Number(5.0)));
    assert_eq!(env.lookup("x"), Ok(RuntimeVal::Number(5.0)));
    assert_eq!(env.lookup("y"), Ok(RuntimeVal::Number(5.0)));
}

#[test]
fn constants_cannot_be_reassigned() {
    let mut env = Environment::new();
    run("const c = 1;", &mut env).unwrap();

    assert_eq!(
        run("c = 2", &mut env),
        Err(Error::Eval {
            source: EvalError::ConstantReassignment {
                name: "c".to_owned()
            }
        })
    );
    assert_eq!(env.lookup("c"), Ok(RuntimeVal::Number(1.0)));
}

#[test]
fn child_scope_shadows_parent() {
    let parent = Rc::new(RefCell::new(Environment::new()));
    run("let x = 1;", &mut parent.borrow_mut()).unwrap();

    let mut child = Environment::new_enclosed(Rc::clone(&parent));
    run("let x = 2;", &mut child).unwrap();

    assert_eq!(run("x", &mut child), Ok(RuntimeVal::Number(2.0)));
    assert_eq!(run("x", &mut parent.borrow_mut()), Ok(RuntimeVal::Number(1.0)));
}

#[test]
fn shorthand_object_property() {
    let mut env = Environment::new();
    env.declare("name", RuntimeVal::Number(7.0), false).unwrap();

    match run("{ name }", &mut env) {
        Ok(RuntimeVal::Object(object)) => {
            assert_eq!(object.get("name"), Some(&RuntimeVal::Number(7.0)))
        }
        result => panic!("expected an object, got {:?}", result),
    }
}

#[test]
fn redeclaration_fails() {
    let mut env = Environment::new();
    run("let a = 1;", &mut env).unwrap();

    assert_eq!(
        run("let a = 1;", &mut env),
        Err(Error::Eval {
            source: EvalError::AlreadyDeclared {
                name: "a".to_owned()
            }
        })
    );
}

#[test]
fn unresolved_identifier_fails() {
    assert_eq!(
        run_fresh("ghost"),
        Err(Error::Eval {
            source: EvalError::IdentifierNotFound {
                name: "ghost".to_owned()
            }
        })
    );
}

#[test]
fn parse_failures_stop_the_pipeline() {
    let mut env = Environment::new();

    assert_eq!(
        run("let kept = 1; const broken;", &mut env),
        Err(Error::Parse {
            source: ParseError::UninitializedConstant {
                name: "broken".to_owned()
            }
        })
    );
    assert!(env.lookup("kept").is_err());

    match run("let x = 1 $", &mut env) {
        Err(Error::Parse {
            source: ParseError::Lex { .. },
        }) => {}
        result => panic!("expected a lex failure, got {:?}", result),
    }
}

#[test]
fn programs_can_be_evaluated_statement_by_statement() {
    let mut env = Environment::new();
    let program = produce_ast("let a = 2; let b = a * 3; b - a").unwrap();
    assert_eq!(program.body.len(), 3);

    let mut last = RuntimeVal::Null;
    for stmt in program.body.into_iter() {
        assert!(!matches!(stmt, Statement::FunctionDeclaration(_)));
        last = eval(stmt.into(), &mut env).unwrap();
    }
    assert_eq!(last, RuntimeVal::Number(4.0));
}

#[test]
fn global_environment_provides_literals() {
    let mut env = builtins::global_environment().unwrap();

    assert_eq!(run("true", &mut env), Ok(RuntimeVal::Boolean(true)));
    assert_eq!(run("null", &mut env), Ok(RuntimeVal::Null));
    assert_eq!(run("true + 1", &mut env), Ok(RuntimeVal::Null));
    assert!(run("false = 1", &mut env).is_err());
    assert_eq!(
        run("time()", &mut env),
        Err(Error::Eval {
            source: EvalError::UnsupportedNode { kind: "CallExpr" }
        })
    );
}

#[test]
fn every_token_sequence_ends_with_eof() {
    for source in &["", "let", "a.b[c]", "{ x: 1 }"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.last(), Some(&Token::Eof));
        assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
    }
}

#[test]
fn deeply_nested_input_is_rejected() {
    let mut env = Environment::new();
    let source = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));

    assert_eq!(
        run(&source, &mut env),
        Err(Error::Parse {
            source: ParseError::NestingTooDeep { limit: 128 }
        })
    );
    assert_eq!(run("((2 + 3)) * 4", &mut env), Ok(RuntimeVal::Number(20.0)));
}
