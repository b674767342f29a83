use crate::builtins;
use rustyline::error::ReadlineError;
use rustyline::Editor;

static PROMPT: &str = "wrek > ";
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn start(quiet: bool) {
    if !quiet {
        println!("Wrek programming language v{}", VERSION);
        println!("Type `exit` to leave");
    }

    let mut env = match builtins::global_environment() {
        Ok(env) => env,
        Err(err) => {
            println!("ERROR: {}", err);
            return;
        }
    };

    let mut rl = Editor::<()>::new();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let input = line.trim();
                if input == "exit" || input == "quit" {
                    break;
                } else if input.is_empty() {
                    continue;
                }

                rl.add_history_entry(input);

                match crate::run(input, &mut env) {
                    Ok(value) => println!("{}", value),
                    Err(err) => println!("ERROR: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
