use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use wrek::{builtins, repl};

#[derive(Parser, Debug)]
#[command(version, about = "Runs a wrek script, or an interactive session without one")]
struct Args {
    #[arg(help = "Script to run")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Skip the interactive greeting")]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.file {
        Some(path) => run_file(&path),
        None => repl::start(args.quiet),
    }
}

fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Failed to read '{}': {}", path.display(), err);
        process::exit(1);
    });

    let result = builtins::global_environment()
        .map_err(wrek::Error::from)
        .and_then(|mut env| wrek::run(&source, &mut env));

    match result {
        Ok(value) => println!("{}", value),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
