pub mod ast;
pub mod builtins;
mod environment;
pub mod evaluator;
mod lexer;
pub mod object;
mod parser;
pub mod repl;
mod token;

pub use environment::Environment;
pub use evaluator::eval;
pub use lexer::{tokenize, LexError, Lexer};
pub use object::{EvalError, RuntimeVal};
pub use parser::{produce_ast, ParseError, Parser};
pub use token::{Token, TokenKind};

use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub Error

    Parse{source: ParseError} = "{source}",
    Eval{source: EvalError} = "{source}",
}

pub fn run(source: &str, env: &mut Environment) -> Result<RuntimeVal, Error> {
    let program = produce_ast(source)?;
    Ok(eval(program.into(), env)?)
}
